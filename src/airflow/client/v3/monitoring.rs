use reqwest::Method;

use super::model::monitoring::{HealthInfoResponse, VersionInfo};
use super::{ApiError, API_PATH, PUBLIC};
use crate::airflow::client::request::ApiRequest;
use crate::airflow::client::response::Operation;

/// Health of the metadatabase and the scheduler-side components. Needs no auth.
pub fn get_health() -> Operation<HealthInfoResponse, ApiError> {
    Operation::new(
        ApiRequest::new(Method::GET, API_PATH).path("monitor/health"),
        PUBLIC,
    )
}

pub fn get_version() -> Operation<VersionInfo, ApiError> {
    Operation::new(ApiRequest::new(Method::GET, API_PATH).path("version"), PUBLIC)
}
