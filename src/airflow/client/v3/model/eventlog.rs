use serde::{Deserialize, Serialize};

use crate::airflow::model::{impl_dto, Extras, Maybe, Timestamp};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventLogResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub event_log_id: i64,
    pub when: Timestamp,
    pub dag_id: Option<String>,
    pub task_id: Option<String>,
    pub run_id: Option<String>,
    pub map_index: Option<i64>,
    pub try_number: Option<i64>,
    pub event: String,
    pub logical_date: Option<Timestamp>,
    pub owner: Option<String>,
    pub extra: Option<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dag_display_name: Maybe<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventLogCollectionResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub event_logs: Vec<EventLogResponse>,
    pub total_entries: i64,
}

impl_dto!(EventLogResponse, EventLogCollectionResponse);
