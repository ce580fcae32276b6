use serde::{Deserialize, Serialize};

use crate::airflow::model::{impl_dto, Extras, Timestamp};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportErrorResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub import_error_id: i64,
    pub timestamp: Timestamp,
    pub filename: String,
    pub bundle_name: Option<String>,
    pub stack_trace: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportErrorCollectionResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub import_errors: Vec<ImportErrorResponse>,
    pub total_entries: i64,
}

impl_dto!(ImportErrorResponse, ImportErrorCollectionResponse);
