use serde::{Deserialize, Serialize};

use super::dagrun::DagVersionResponse;
use crate::airflow::model::{impl_dto, Extras, Maybe, Timestamp};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DagTagResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub name: String,
    pub dag_id: String,
}

/// A DAG as listed by `GET /dags`.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DagResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub dag_id: String,
    pub dag_display_name: Option<String>,
    pub is_paused: Option<bool>,
    pub is_stale: Option<bool>,
    pub last_parsed_time: Option<Timestamp>,
    pub last_expired: Option<Timestamp>,
    pub bundle_name: Option<String>,
    pub bundle_version: Option<String>,
    pub relative_fileloc: Option<String>,
    pub fileloc: Option<String>,
    pub description: Option<String>,
    /// Cron expression, preset or timetable name.
    pub timetable_summary: Option<String>,
    pub timetable_description: Option<String>,
    #[serde(default)]
    pub tags: Vec<DagTagResponse>,
    pub max_active_tasks: Option<i64>,
    pub max_active_runs: Option<i64>,
    pub max_consecutive_failed_dag_runs: Option<i64>,
    pub has_task_concurrency_limits: Option<bool>,
    pub has_import_errors: Option<bool>,
    pub next_dagrun_logical_date: Option<Timestamp>,
    pub next_dagrun_data_interval_start: Option<Timestamp>,
    pub next_dagrun_data_interval_end: Option<Timestamp>,
    pub next_dagrun_run_after: Option<Timestamp>,
    #[serde(default)]
    pub owners: Vec<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub file_token: Maybe<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DagCollectionResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub dags: Vec<DagResponse>,
    pub total_entries: i64,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DagDetailsResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub dag_id: String,
    pub dag_display_name: Option<String>,
    pub is_paused: Option<bool>,
    pub is_stale: Option<bool>,
    pub last_parsed_time: Option<Timestamp>,
    pub last_expired: Option<Timestamp>,
    pub bundle_name: Option<String>,
    pub bundle_version: Option<String>,
    pub relative_fileloc: Option<String>,
    pub fileloc: Option<String>,
    pub description: Option<String>,
    /// Cron expression, preset or timetable name.
    pub timetable_summary: Option<String>,
    pub timetable_description: Option<String>,
    #[serde(default)]
    pub tags: Vec<DagTagResponse>,
    pub max_active_tasks: Option<i64>,
    pub max_active_runs: Option<i64>,
    pub max_consecutive_failed_dag_runs: Option<i64>,
    pub has_task_concurrency_limits: Option<bool>,
    pub has_import_errors: Option<bool>,
    pub next_dagrun_logical_date: Option<Timestamp>,
    pub next_dagrun_data_interval_start: Option<Timestamp>,
    pub next_dagrun_data_interval_end: Option<Timestamp>,
    pub next_dagrun_run_after: Option<Timestamp>,
    #[serde(default)]
    pub owners: Vec<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub file_token: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub catchup: Maybe<bool>,
    /// ISO 8601 duration.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dag_run_timeout: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub asset_expression: Maybe<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub doc_md: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub start_date: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub end_date: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub is_paused_upon_creation: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub params: Maybe<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub render_template_as_native_obj: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub template_search_path: Maybe<Vec<String>>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub timezone: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub last_parsed: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub default_args: Maybe<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub owner_links: Maybe<std::collections::BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub concurrency: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub latest_dag_version: Maybe<DagVersionResponse>,
}

/// Body of `PATCH /dags` and `PATCH /dags/{dag_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DagPatchBody {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub is_paused: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DagTagCollectionResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub tags: Vec<String>,
    pub total_entries: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DagSourceResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub content: Option<String>,
    pub dag_id: String,
    pub version_number: Option<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dag_display_name: Maybe<String>,
}

impl_dto!(
    DagTagResponse,
    DagResponse,
    DagCollectionResponse,
    DagDetailsResponse,
    DagPatchBody,
    DagTagCollectionResponse,
    DagSourceResponse,
);
