use serde::{Deserialize, Serialize};

use crate::airflow::model::{impl_dto, Extras, Maybe, Timestamp};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DagScheduleAssetReference {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub dag_id: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskOutletAssetReference {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub dag_id: String,
    pub task_id: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetAliasResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub id: i64,
    pub name: String,
    pub group: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub id: i64,
    pub name: String,
    pub uri: String,
    pub group: String,
    pub extra: Option<serde_json::Value>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default)]
    pub scheduled_dags: Vec<DagScheduleAssetReference>,
    #[serde(default)]
    pub producing_tasks: Vec<TaskOutletAssetReference>,
    #[serde(default)]
    pub aliases: Vec<AssetAliasResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetCollectionResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub assets: Vec<AssetResponse>,
    pub total_entries: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DagRunAssetReference {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub run_id: String,
    pub dag_id: String,
    pub logical_date: Option<Timestamp>,
    pub start_date: Timestamp,
    pub end_date: Option<Timestamp>,
    pub state: String,
    pub data_interval_start: Option<Timestamp>,
    pub data_interval_end: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetEventResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub id: i64,
    pub asset_id: i64,
    pub uri: Option<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub name: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub group: Maybe<String>,
    pub extra: Option<serde_json::Value>,
    pub source_task_id: Option<String>,
    pub source_dag_id: Option<String>,
    pub source_run_id: Option<String>,
    pub source_map_index: i64,
    #[serde(default)]
    pub created_dagruns: Vec<DagRunAssetReference>,
    pub timestamp: Timestamp,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetEventCollectionResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub asset_events: Vec<AssetEventResponse>,
    pub total_entries: i64,
}

/// Body of `POST /assets/events`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateAssetEventsBody {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub asset_id: i64,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub extra: Maybe<serde_json::Value>,
}

impl_dto!(
    DagScheduleAssetReference,
    TaskOutletAssetReference,
    AssetAliasResponse,
    AssetResponse,
    AssetCollectionResponse,
    DagRunAssetReference,
    AssetEventResponse,
    AssetEventCollectionResponse,
    CreateAssetEventsBody,
);
