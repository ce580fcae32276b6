use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::taskinstance::TaskInstanceCollectionResponse;
use crate::airflow::client::request::query_via_display;
use crate::airflow::model::{impl_dto, Extras, Maybe, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DagRunState {
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
    Scheduled,
    Manual,
    AssetTriggered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DagRunTriggeredByType {
    Cli,
    Operator,
    RestApi,
    Ui,
    Test,
    Timetable,
    Asset,
    Backfill,
}

/// States a DAG run can be set to by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DagRunPatchStates {
    Queued,
    Success,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DagVersionResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub id: String,
    pub version_number: i64,
    pub dag_id: String,
    pub bundle_name: Option<String>,
    pub bundle_version: Option<String>,
    pub created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub bundle_url: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dag_display_name: Maybe<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DagRunResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub dag_run_id: String,
    pub dag_id: String,
    pub logical_date: Option<Timestamp>,
    pub queued_at: Option<Timestamp>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub data_interval_start: Option<Timestamp>,
    pub data_interval_end: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub run_after: Maybe<Timestamp>,
    pub last_scheduling_decision: Option<Timestamp>,
    pub run_type: DagRunType,
    pub state: DagRunState,
    pub triggered_by: Option<DagRunTriggeredByType>,
    pub conf: Option<serde_json::Value>,
    pub note: Option<String>,
    #[serde(default)]
    pub dag_versions: Vec<DagVersionResponse>,
    pub bundle_version: Option<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dag_display_name: Maybe<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DagRunCollectionResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub dag_runs: Vec<DagRunResponse>,
    pub total_entries: i64,
}

/// Body of `POST /dags/~/dagRuns/list`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DagRunsBatchBody {
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
    pub states: Maybe<Vec<DagRunState>>,
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
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriggerDagRunPostBody {
    #[serde(flatten)]
    pub additional_properties: Extras,
    /// Generated by Airflow when left out.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dag_run_id: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub data_interval_start: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub data_interval_end: Maybe<Timestamp>,
    /// Required key; `None` triggers a run without a logical date.
    pub logical_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub run_after: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub conf: Maybe<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub note: Maybe<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DagRunPatchBody {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub state: Maybe<DagRunPatchStates>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub note: Maybe<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DagRunClearBody {
    #[serde(flatten)]
    pub additional_properties: Extras,
    /// Airflow defaults this to true.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dry_run: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub only_failed: Maybe<bool>,
}

/// Body of a cleared DAG run: the affected task instances on a dry run, the run
/// itself otherwise. Candidates are tried in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClearDagRunResponse {
    TaskInstances(TaskInstanceCollectionResponse),
    DagRun(DagRunResponse),
    Raw(serde_json::Value),
}

query_via_display!(DagRunState, DagRunType);

impl_dto!(
    DagVersionResponse,
    DagRunResponse,
    DagRunCollectionResponse,
    DagRunsBatchBody,
    TriggerDagRunPostBody,
    DagRunPatchBody,
    DagRunClearBody,
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run_body() -> serde_json::Value {
        json!({
            "dag_run_id": "manual__2025-03-01T00:00:00+00:00",
            "dag_id": "etl",
            "run_type": "manual",
            "state": "queued",
            "triggered_by": "rest_api",
            "logical_date": null
        })
    }

    #[test]
    fn clear_prefers_task_instances_then_run() {
        let dry_run = json!({"task_instances": [], "total_entries": 0});
        assert!(matches!(
            serde_json::from_value::<ClearDagRunResponse>(dry_run).unwrap(),
            ClearDagRunResponse::TaskInstances(_)
        ));

        let ClearDagRunResponse::DagRun(run) = serde_json::from_value(run_body()).unwrap() else {
            panic!("expected a DAG run");
        };
        assert_eq!(run.triggered_by, Some(DagRunTriggeredByType::RestApi));
        assert_eq!(run.logical_date, None);
    }

    #[test]
    fn clear_falls_back_to_raw() {
        let body = json!({"message": "cleared"});
        assert_eq!(
            serde_json::from_value::<ClearDagRunResponse>(body.clone()).unwrap(),
            ClearDagRunResponse::Raw(body)
        );
    }

    #[test]
    fn trigger_body_always_sends_logical_date() {
        let body = TriggerDagRunPostBody {
            conf: Maybe::Present(json!({"full_refresh": true})),
            ..TriggerDagRunPostBody::default()
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"logical_date": null, "conf": {"full_refresh": true}})
        );
    }

    #[test]
    fn asset_triggered_runs_decode() {
        let mut raw = run_body();
        raw["run_type"] = json!("asset_triggered");
        let run: DagRunResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(run.run_type, DagRunType::AssetTriggered);
        assert!(run.dag_versions.is_empty());
    }
}
