use reqwest::Method;

use super::model::pool::{Pool, PoolCollection};
use super::{ApiError, PageParams, API_PATH, CREATE_UNIQUE, DELETE, GET, LIST, UPDATE};
use crate::airflow::client::request::ApiRequest;
use crate::airflow::client::response::Operation;

pub fn get_pools(page: &PageParams) -> Operation<PoolCollection, ApiError> {
    let request = page.apply(ApiRequest::new(Method::GET, API_PATH).path("pools"));
    Operation::new(request, LIST)
}

pub fn get_pool(pool_name: &str) -> Operation<Pool, ApiError> {
    let request = ApiRequest::new(Method::GET, API_PATH)
        .path("pools")
        .param(pool_name);
    Operation::new(request, GET)
}

/// Creates a pool. 409 means a pool with this name exists.
pub fn post_pool(body: &Pool) -> Operation<Pool, ApiError> {
    let request = ApiRequest::new(Method::POST, API_PATH)
        .path("pools")
        .json(body);
    Operation::new(request, CREATE_UNIQUE)
}

pub fn patch_pool(
    pool_name: &str,
    body: &Pool,
    update_mask: &[String],
) -> Operation<Pool, ApiError> {
    let request = ApiRequest::new(Method::PATCH, API_PATH)
        .path("pools")
        .param(pool_name)
        .query("update_mask", update_mask)
        .json(body);
    Operation::new(request, UPDATE)
}

pub fn delete_pool(pool_name: &str) -> Operation<(), ApiError> {
    let request = ApiRequest::new(Method::DELETE, API_PATH)
        .path("pools")
        .param(pool_name);
    Operation::new(request, DELETE)
}
