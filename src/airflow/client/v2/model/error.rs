use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::airflow::client::response::ErrorModel;
use crate::airflow::model::{impl_dto, Extras, Maybe};

/// Problem-details body (RFC 7807) returned with every documented error status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent", rename = "type")]
    pub type_: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub title: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub status: Maybe<f64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub detail: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub instance: Maybe<String>,
}

impl ApiError {
    /// Human readable summary: `detail`, else `title`.
    pub fn message(&self) -> Option<&str> {
        self.detail
            .as_option()
            .or(self.title.as_option())
            .map(String::as_str)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message().unwrap_or("Airflow API error"))
    }
}

impl std::error::Error for ApiError {}

impl ErrorModel for ApiError {
    fn decode(_status: StatusCode, content: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(content)
    }
}

impl_dto!(ApiError);
