use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::airflow::client::request::query_via_display;
use crate::airflow::model::{impl_dto, Extras, Maybe, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TriggerRule {
    AllSuccess,
    AllFailed,
    AllDone,
    AllDoneSetupSuccess,
    OneSuccess,
    OneFailed,
    OneDone,
    NoneFailed,
    NoneSkipped,
    NoneFailedMinOneSuccess,
    AllSkipped,
    Always,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WeightRule {
    Downstream,
    Upstream,
    Absolute,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeDelta {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent", rename = "__type")]
    pub type_: Maybe<String>,
    pub days: i64,
    pub seconds: i64,
    pub microseconds: i64,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub task_id: Option<String>,
    pub task_display_name: Option<String>,
    pub owner: String,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub trigger_rule: Option<TriggerRule>,
    pub depends_on_past: bool,
    pub wait_for_downstream: bool,
    pub retries: Option<f64>,
    pub queue: Option<String>,
    pub pool: Option<String>,
    pub pool_slots: Option<f64>,
    pub execution_timeout: Option<TimeDelta>,
    pub retry_delay: Option<TimeDelta>,
    pub retry_exponential_backoff: bool,
    pub priority_weight: Option<f64>,
    pub weight_rule: Option<WeightRule>,
    pub ui_color: Option<String>,
    pub ui_fgcolor: Option<String>,
    pub template_fields: Option<Vec<String>>,
    pub downstream_task_ids: Vec<String>,
    pub doc_md: Option<String>,
    pub operator_name: Option<String>,
    pub params: Option<serde_json::Value>,
    pub class_ref: Option<serde_json::Value>,
    pub is_mapped: Option<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub extra_links: Maybe<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskCollectionResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub tasks: Vec<TaskResponse>,
    pub total_entries: i64,
}

query_via_display!(TriggerRule, WeightRule);

impl_dto!(TimeDelta, TaskResponse, TaskCollectionResponse);
