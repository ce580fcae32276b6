use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::taskinstance::TaskInstanceCollection;
use crate::airflow::client::request::query_via_display;
use crate::airflow::model::{impl_dto, Extras, Maybe, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DagState {
    Queued,
    Running,
    Success,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DagRunType {
    Backfill,
    Manual,
    Scheduled,
    DatasetTriggered,
}

/// States a DAG run can be set to by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum UpdateDagRunStateKind {
    Success,
    Failed,
    Queued,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DagRun {
    #[serde(flatten)]
    pub additional_properties: Extras,
    /// Generated by Airflow when left out of a trigger request.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dag_run_id: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dag_id: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub logical_date: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub execution_date: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub start_date: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub end_date: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub data_interval_start: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub data_interval_end: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub last_scheduling_decision: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub run_type: Maybe<DagRunType>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub state: Maybe<DagState>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub external_trigger: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub conf: Maybe<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub note: Maybe<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DagRunCollection {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub dag_runs: Vec<DagRun>,
    pub total_entries: i64,
}

/// Body of `POST /dags/~/dagRuns/list`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListDagRunsForm {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub order_by: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub page_offset: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub page_limit: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dag_ids: Maybe<Vec<String>>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub states: Maybe<Vec<String>>,
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
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateDagRunState {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub state: Maybe<UpdateDagRunStateKind>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClearDagRun {
    #[serde(flatten)]
    pub additional_properties: Extras,
    /// Airflow defaults this to true.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dry_run: Maybe<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetDagRunNote {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub note: Maybe<String>,
}

/// Body of a cleared DAG run: the affected task instances on a dry run, the run
/// itself otherwise. Candidates are tried in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClearDagRunResponse {
    TaskInstances(TaskInstanceCollection),
    DagRun(DagRun),
    Raw(serde_json::Value),
}

query_via_display!(DagState, DagRunType);

impl_dto!(
    DagRun,
    DagRunCollection,
    ListDagRunsForm,
    UpdateDagRunState,
    ClearDagRun,
    SetDagRunNote
);
