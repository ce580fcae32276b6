use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::airflow::client::response::ErrorModel;
use crate::airflow::model::{impl_dto, Extras, Maybe};

/// Detail of an HTTP exception: a message, or an object for structured errors
/// such as unique constraint violations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExceptionDetail {
    Message(String),
    Object(Extras),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpExceptionResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub detail: ExceptionDetail,
}

/// Element of a validation error location: a field name or a list index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocItem {
    Key(String),
    Index(i64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub loc: Vec<LocItem>,
    pub msg: String,
    #[serde(rename = "type")]
    pub type_: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpValidationError {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub detail: Maybe<Vec<ValidationError>>,
}

/// Documented error body: request validation failures (422) or any other
/// HTTP exception.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Validation(HttpValidationError),
    Http(HttpExceptionResponse),
}

impl ApiError {
    /// Human readable summary of the error.
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiError::Http(response) => match &response.detail {
                ExceptionDetail::Message(message) => Some(message.as_str()),
                ExceptionDetail::Object(detail) => detail
                    .get("message")
                    .or_else(|| detail.get("reason"))
                    .and_then(serde_json::Value::as_str),
            },
            ApiError::Validation(validation) => validation
                .detail
                .as_option()
                .and_then(|errors| errors.first())
                .map(|error| error.msg.as_str()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message().unwrap_or("Airflow API error"))
    }
}

impl std::error::Error for ApiError {}

impl ErrorModel for ApiError {
    fn decode(status: StatusCode, content: &[u8]) -> serde_json::Result<Self> {
        if status == StatusCode::UNPROCESSABLE_ENTITY {
            serde_json::from_slice(content).map(ApiError::Validation)
        } else {
            serde_json::from_slice(content).map(ApiError::Http)
        }
    }
}

impl_dto!(HttpExceptionResponse, ValidationError, HttpValidationError);
