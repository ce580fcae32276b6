use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::dagrun::DagVersionResponse;
use crate::airflow::client::request::query_via_display;
use crate::airflow::model::{impl_dto, Extras, Maybe, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TaskInstanceState {
    Removed,
    Scheduled,
    Queued,
    Running,
    Success,
    Restarting,
    Failed,
    UpForRetry,
    UpForReschedule,
    UpstreamFailed,
    Skipped,
    Deferred,
}

/// States a task instance can be set to by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PatchTaskInstanceState {
    Success,
    Failed,
    Skipped,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriggerResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub id: i64,
    pub classpath: String,
    pub kwargs: String,
    pub created_date: Timestamp,
    pub triggerer_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub id: i64,
    pub dag_id: Option<String>,
    pub state: Option<String>,
    pub job_type: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub latest_heartbeat: Option<Timestamp>,
    pub executor_class: Option<String>,
    pub hostname: Option<String>,
    pub unixname: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskInstanceResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub id: String,
    pub task_id: String,
    pub dag_id: String,
    pub dag_run_id: String,
    pub map_index: i64,
    pub logical_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub run_after: Maybe<Timestamp>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub duration: Option<f64>,
    pub state: Option<TaskInstanceState>,
    pub try_number: i64,
    pub max_tries: i64,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub task_display_name: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dag_display_name: Maybe<String>,
    pub hostname: Option<String>,
    pub unixname: Option<String>,
    pub pool: Option<String>,
    pub pool_slots: i64,
    pub queue: Option<String>,
    pub priority_weight: Option<i64>,
    pub operator: Option<String>,
    pub queued_when: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub scheduled_when: Maybe<Timestamp>,
    pub pid: Option<i64>,
    pub executor: Option<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub executor_config: Maybe<String>,
    pub note: Option<String>,
    pub rendered_map_index: Option<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub rendered_fields: Maybe<serde_json::Value>,
    pub trigger: Option<TriggerResponse>,
    pub triggerer_job: Option<JobResponse>,
    pub dag_version: Option<DagVersionResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskInstanceCollectionResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub task_instances: Vec<TaskInstanceResponse>,
    pub total_entries: i64,
}

/// Body of `POST /dags/~/dagRuns/~/taskInstances/list`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskInstancesBatchBody {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dag_ids: Maybe<Vec<String>>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dag_run_ids: Maybe<Vec<String>>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub task_ids: Maybe<Vec<String>>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub state: Maybe<Vec<TaskInstanceState>>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub run_after_gte: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub run_after_lte: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub logical_date_gte: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub logical_date_lte: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub start_date_gte: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub start_date_lte: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub end_date_gte: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub end_date_lte: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub duration_gte: Maybe<f64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub duration_lte: Maybe<f64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub pool: Maybe<Vec<String>>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub queue: Maybe<Vec<String>>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub executor: Maybe<Vec<String>>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub page_offset: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub page_limit: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub order_by: Maybe<String>,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatchTaskInstanceBody {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub new_state: Maybe<PatchTaskInstanceState>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub note: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub include_upstream: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub include_downstream: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub include_future: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub include_past: Maybe<bool>,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClearTaskInstancesBody {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dry_run: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub start_date: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub end_date: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub only_failed: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub only_running: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub reset_dag_runs: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub task_ids: Maybe<Vec<String>>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dag_run_id: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub include_upstream: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub include_downstream: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub include_future: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub include_past: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub run_on_latest_version: Maybe<bool>,
}

/// One structured log line. Extra keys are the logger context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredLogMessage {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub timestamp: Maybe<Timestamp>,
    pub event: String,
}

/// Content of a task log. Candidates are tried in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LogContent {
    Structured(Vec<StructuredLogMessage>),
    Plain(Vec<String>),
    Raw(serde_json::Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskInstancesLogResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub content: LogContent,
    /// Pass back as `token` to fetch the next chunk.
    pub continuation_token: Option<String>,
}

query_via_display!(TaskInstanceState);

impl_dto!(
    TriggerResponse,
    JobResponse,
    TaskInstanceResponse,
    TaskInstanceCollectionResponse,
    TaskInstancesBatchBody,
    PatchTaskInstanceBody,
    ClearTaskInstancesBody,
    StructuredLogMessage,
    TaskInstancesLogResponse,
);
