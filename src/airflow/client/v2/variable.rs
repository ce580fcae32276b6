use reqwest::Method;

use super::model::variable::{Variable, VariableCollection};
use super::{ApiError, PageParams, API_PATH, CREATE, DELETE, GET, LIST, UPDATE};
use crate::airflow::client::request::ApiRequest;
use crate::airflow::client::response::Operation;

pub fn get_variables(page: &PageParams) -> Operation<VariableCollection, ApiError> {
    let request = page.apply(ApiRequest::new(Method::GET, API_PATH).path("variables"));
    Operation::new(request, LIST)
}

pub fn get_variable(variable_key: &str) -> Operation<Variable, ApiError> {
    let request = ApiRequest::new(Method::GET, API_PATH)
        .path("variables")
        .param(variable_key);
    Operation::new(request, GET)
}

pub fn post_variables(body: &Variable) -> Operation<Variable, ApiError> {
    let request = ApiRequest::new(Method::POST, API_PATH)
        .path("variables")
        .json(body);
    Operation::new(request, CREATE)
}

pub fn patch_variable(
    variable_key: &str,
    body: &Variable,
    update_mask: &[String],
) -> Operation<Variable, ApiError> {
    let request = ApiRequest::new(Method::PATCH, API_PATH)
        .path("variables")
        .param(variable_key)
        .query("update_mask", update_mask)
        .json(body);
    Operation::new(request, UPDATE)
}

pub fn delete_variable(variable_key: &str) -> Operation<(), ApiError> {
    let request = ApiRequest::new(Method::DELETE, API_PATH)
        .path("variables")
        .param(variable_key);
    Operation::new(request, DELETE)
}
