use reqwest::Method;

use super::model::importerror::{ImportErrorCollectionResponse, ImportErrorResponse};
use super::{ApiError, PageParams, API_PATH, GET, LIST};
use crate::airflow::client::request::ApiRequest;
use crate::airflow::client::response::Operation;

pub fn get_import_errors(page: &PageParams) -> Operation<ImportErrorCollectionResponse, ApiError> {
    let request = page.apply(ApiRequest::new(Method::GET, API_PATH).path("importErrors"));
    Operation::new(request, LIST)
}

pub fn get_import_error(import_error_id: i64) -> Operation<ImportErrorResponse, ApiError> {
    let request = ApiRequest::new(Method::GET, API_PATH)
        .path("importErrors")
        .param(import_error_id);
    Operation::new(request, GET)
}
