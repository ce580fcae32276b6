use serde::{Deserialize, Serialize};

use crate::airflow::model::{impl_dto, Extras, Maybe, Timestamp};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportError {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub import_error_id: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub timestamp: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub filename: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub stack_trace: Maybe<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportErrorCollection {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub import_errors: Vec<ImportError>,
    pub total_entries: i64,
}

impl_dto!(ImportError, ImportErrorCollection);
