use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::airflow::client::request::query_via_display;
use crate::airflow::model::{impl_dto, Extras, Maybe, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TaskState {
    Success,
    Running,
    Failed,
    UpstreamFailed,
    Skipped,
    UpForRetry,
    UpForReschedule,
    Queued,
    None,
    Scheduled,
    Deferred,
    Removed,
    Restarting,
}

/// States a task instance can be set to by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum UpdateTaskState {
    Success,
    Failed,
    Skipped,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlaMiss {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub task_id: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dag_id: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub execution_date: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub email_sent: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub timestamp: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub description: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub notification_sent: Maybe<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trigger {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub id: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub classpath: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub kwargs: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub created_date: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub triggerer_id: Maybe<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub id: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dag_id: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub state: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub job_type: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub start_date: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub end_date: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub latest_heartbeat: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub executor_class: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub hostname: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub unixname: Maybe<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskInstance {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub task_id: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub task_display_name: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dag_id: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dag_run_id: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub execution_date: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub start_date: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub end_date: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub duration: Maybe<f64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub state: Maybe<TaskState>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub try_number: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub map_index: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub max_tries: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub hostname: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub unixname: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub pool: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub pool_slots: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub queue: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub priority_weight: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub operator: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub queued_when: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub pid: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub executor: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub executor_config: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub sla_miss: Maybe<SlaMiss>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub rendered_map_index: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub rendered_fields: Maybe<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub trigger: Maybe<Trigger>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub triggerer_job: Maybe<Job>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub note: Maybe<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskInstanceCollection {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub task_instances: Vec<TaskInstance>,
    pub total_entries: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskInstanceReference {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub task_id: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dag_id: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub execution_date: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dag_run_id: Maybe<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskInstanceReferenceCollection {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub task_instances: Vec<TaskInstanceReference>,
}

/// Body of `POST /dags/~/dagRuns/~/taskInstances/list`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListTaskInstanceForm {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dag_ids: Maybe<Vec<String>>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dag_run_ids: Maybe<Vec<String>>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub task_ids: Maybe<Vec<String>>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub execution_date_gte: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub execution_date_lte: Maybe<Timestamp>,
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
    pub state: Maybe<Vec<TaskState>>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub pool: Maybe<Vec<String>>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub queue: Maybe<Vec<String>>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub executor: Maybe<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateTaskInstance {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dry_run: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub new_state: Maybe<UpdateTaskState>,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateTaskInstancesState {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dry_run: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub task_id: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub execution_date: Maybe<String>,
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
    pub new_state: Maybe<UpdateTaskState>,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClearTaskInstances {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dry_run: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub task_ids: Maybe<Vec<String>>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub start_date: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub end_date: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub only_failed: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub only_running: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub include_subdags: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub include_parentdag: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub reset_dag_runs: Maybe<bool>,
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
}

/// JSON representation of a task log chunk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskLog {
    #[serde(flatten)]
    pub additional_properties: Extras,
    /// Pass back as `token` to fetch the next chunk.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub continuation_token: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub content: Maybe<String>,
}

query_via_display!(TaskState);

impl_dto!(
    SlaMiss,
    Trigger,
    Job,
    TaskInstance,
    TaskInstanceCollection,
    TaskInstanceReference,
    TaskInstanceReferenceCollection,
    ListTaskInstanceForm,
    UpdateTaskInstance,
    UpdateTaskInstancesState,
    ClearTaskInstances,
    TaskLog
);
