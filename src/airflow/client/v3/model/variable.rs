use serde::{Deserialize, Serialize};

use crate::airflow::model::{impl_dto, Extras, Maybe};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub key: String,
    pub value: Option<String>,
    pub description: Option<String>,
    pub is_encrypted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableCollectionResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub variables: Vec<VariableResponse>,
    pub total_entries: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableBody {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub key: String,
    /// Stored JSON-encoded unless a string.
    pub value: serde_json::Value,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub description: Maybe<String>,
}

impl_dto!(VariableResponse, VariableCollectionResponse, VariableBody);
