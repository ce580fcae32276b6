use serde::{Deserialize, Serialize};

use crate::airflow::model::{impl_dto, Extras, Maybe, Timestamp};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XComResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub key: String,
    pub timestamp: Timestamp,
    pub logical_date: Option<Timestamp>,
    pub map_index: i64,
    pub task_id: String,
    pub dag_id: String,
    pub run_id: String,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dag_display_name: Maybe<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XComCollectionResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub xcom_entries: Vec<XComResponse>,
    pub total_entries: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XComResponseNative {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub key: String,
    pub timestamp: Timestamp,
    pub logical_date: Option<Timestamp>,
    pub map_index: i64,
    pub task_id: String,
    pub dag_id: String,
    pub run_id: String,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dag_display_name: Maybe<String>,
    pub value: serde_json::Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XComResponseString {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub key: String,
    pub timestamp: Timestamp,
    pub logical_date: Option<Timestamp>,
    pub map_index: i64,
    pub task_id: String,
    pub dag_id: String,
    pub run_id: String,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dag_display_name: Maybe<String>,
    pub value: Option<String>,
}

/// One XCom entry. Candidates are tried in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum XComEntry {
    Native(XComResponseNative),
    String(XComResponseString),
    Raw(serde_json::Value),
}

impl_dto!(XComResponse, XComCollectionResponse, XComResponseNative, XComResponseString);
