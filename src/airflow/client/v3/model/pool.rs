use serde::{Deserialize, Serialize};

use crate::airflow::model::{impl_dto, Extras, Maybe};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoolResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub name: String,
    pub slots: i64,
    pub description: Option<String>,
    pub include_deferred: bool,
    pub occupied_slots: i64,
    pub running_slots: i64,
    pub queued_slots: i64,
    pub scheduled_slots: i64,
    pub open_slots: i64,
    pub deferred_slots: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoolCollectionResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub pools: Vec<PoolResponse>,
    pub total_entries: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoolBody {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub name: String,
    pub slots: i64,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub description: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub include_deferred: Maybe<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoolPatchBody {
    #[serde(flatten)]
    pub additional_properties: Extras,
    /// New name of the pool.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub pool: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub slots: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub description: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub include_deferred: Maybe<bool>,
}

impl_dto!(PoolResponse, PoolCollectionResponse, PoolBody, PoolPatchBody);
