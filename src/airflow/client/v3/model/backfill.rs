use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::airflow::model::{impl_dto, Extras, Maybe, Timestamp};

/// Which existing runs in the range a backfill re-runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ReprocessBehavior {
    Failed,
    Completed,
    #[default]
    None,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackfillResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub id: i64,
    pub dag_id: String,
    pub from_date: Timestamp,
    pub to_date: Timestamp,
    pub dag_run_conf: serde_json::Value,
    pub is_paused: bool,
    pub reprocess_behavior: ReprocessBehavior,
    pub max_active_runs: i64,
    pub created_at: Timestamp,
    pub completed_at: Option<Timestamp>,
    pub updated_at: Timestamp,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dag_display_name: Maybe<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackfillCollectionResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub backfills: Vec<BackfillResponse>,
    pub total_entries: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackfillPostBody {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub dag_id: String,
    pub from_date: Timestamp,
    pub to_date: Timestamp,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub run_backwards: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dag_run_conf: Maybe<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub reprocess_behavior: Maybe<ReprocessBehavior>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub max_active_runs: Maybe<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DryRunBackfillResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub logical_date: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DryRunBackfillCollectionResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub backfills: Vec<DryRunBackfillResponse>,
    pub total_entries: i64,
}

impl_dto!(
    BackfillResponse,
    BackfillCollectionResponse,
    BackfillPostBody,
    DryRunBackfillResponse,
    DryRunBackfillCollectionResponse,
);
