use reqwest::Method;

use super::model::pool::{PoolBody, PoolCollectionResponse, PoolPatchBody, PoolResponse};
use super::{ApiError, PageParams, API_PATH, CREATE, DELETE, GET, LIST, UPDATE};
use crate::airflow::client::request::ApiRequest;
use crate::airflow::client::response::Operation;

pub fn get_pools(
    page: &PageParams,
    pool_name_pattern: Option<&str>,
) -> Operation<PoolCollectionResponse, ApiError> {
    let request = page
        .apply(ApiRequest::new(Method::GET, API_PATH).path("pools"))
        .query("pool_name_pattern", &pool_name_pattern);
    Operation::new(request, LIST)
}

pub fn get_pool(pool_name: &str) -> Operation<PoolResponse, ApiError> {
    let request = ApiRequest::new(Method::GET, API_PATH)
        .path("pools")
        .param(pool_name);
    Operation::new(request, GET)
}

pub fn post_pool(body: &PoolBody) -> Operation<PoolResponse, ApiError> {
    let request = ApiRequest::new(Method::POST, API_PATH)
        .path("pools")
        .json(body);
    Operation::new(request, CREATE)
}

pub fn patch_pool(
    pool_name: &str,
    body: &PoolPatchBody,
    update_mask: &[String],
) -> Operation<PoolResponse, ApiError> {
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
