use serde::{Deserialize, Serialize};

use crate::airflow::model::{impl_dto, Extras, Maybe, Timestamp};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XComCollectionItem {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub key: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub timestamp: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub execution_date: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub map_index: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub task_id: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dag_id: Maybe<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XCom {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub key: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub timestamp: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub execution_date: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub map_index: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub task_id: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dag_id: Maybe<String>,
    /// Stringified unless requested with `deserialize=true`.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub value: Maybe<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XComCollection {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub xcom_entries: Vec<XComCollectionItem>,
    pub total_entries: i64,
}

impl_dto!(XComCollectionItem, XCom, XComCollection);
