use reqwest::Method;

use super::model::connection::{
    ConnectionBody, ConnectionCollectionResponse, ConnectionResponse, ConnectionTestResponse,
};
use super::{ApiError, PageParams, API_PATH, CREATE, DELETE, GET, LIST, UPDATE};
use crate::airflow::client::request::ApiRequest;
use crate::airflow::client::response::Operation;

pub fn get_connections(
    page: &PageParams,
    connection_id_pattern: Option<&str>,
) -> Operation<ConnectionCollectionResponse, ApiError> {
    let request = page
        .apply(ApiRequest::new(Method::GET, API_PATH).path("connections"))
        .query("connection_id_pattern", &connection_id_pattern);
    Operation::new(request, LIST)
}

pub fn get_connection(connection_id: &str) -> Operation<ConnectionResponse, ApiError> {
    let request = ApiRequest::new(Method::GET, API_PATH)
        .path("connections")
        .param(connection_id);
    Operation::new(request, GET)
}

pub fn post_connection(body: &ConnectionBody) -> Operation<ConnectionResponse, ApiError> {
    let request = ApiRequest::new(Method::POST, API_PATH)
        .path("connections")
        .json(body);
    Operation::new(request, CREATE)
}

pub fn patch_connection(
    connection_id: &str,
    body: &ConnectionBody,
    update_mask: &[String],
) -> Operation<ConnectionResponse, ApiError> {
    let request = ApiRequest::new(Method::PATCH, API_PATH)
        .path("connections")
        .param(connection_id)
        .query("update_mask", update_mask)
        .json(body);
    Operation::new(request, UPDATE)
}

pub fn delete_connection(connection_id: &str) -> Operation<(), ApiError> {
    let request = ApiRequest::new(Method::DELETE, API_PATH)
        .path("connections")
        .param(connection_id);
    Operation::new(request, DELETE)
}

/// Tries the connection from the API server without storing it.
pub fn test_connection(body: &ConnectionBody) -> Operation<ConnectionTestResponse, ApiError> {
    let request = ApiRequest::new(Method::POST, API_PATH)
        .path("connections/test")
        .json(body);
    Operation::new(request, LIST)
}
