use serde::{Deserialize, Serialize};

use crate::airflow::model::{impl_dto, Extras, Maybe, Timestamp};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventLog {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub event_log_id: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub when: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dag_id: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub task_id: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub run_id: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub map_index: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub try_number: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub event: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub execution_date: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub owner: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub extra: Maybe<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventLogCollection {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub event_logs: Vec<EventLog>,
    pub total_entries: i64,
}

impl_dto!(EventLog, EventLogCollection);
