use serde::{Deserialize, Serialize};

use crate::airflow::model::{impl_dto, Extras, Maybe};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub connection_id: String,
    pub conn_type: String,
    pub description: Option<String>,
    pub host: Option<String>,
    pub login: Option<String>,
    pub schema: Option<String>,
    pub port: Option<i64>,
    pub password: Option<String>,
    pub extra: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionCollectionResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub connections: Vec<ConnectionResponse>,
    pub total_entries: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionBody {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub connection_id: String,
    pub conn_type: String,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub description: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub host: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub login: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub schema: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub port: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub password: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub extra: Maybe<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionTestResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub status: bool,
    pub message: String,
}

impl_dto!(
    ConnectionResponse,
    ConnectionCollectionResponse,
    ConnectionBody,
    ConnectionTestResponse,
);
