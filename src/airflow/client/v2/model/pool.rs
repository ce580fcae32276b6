use serde::{Deserialize, Serialize};

use crate::airflow::model::{impl_dto, Extras, Maybe};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pool {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub name: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub slots: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub occupied_slots: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub running_slots: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub queued_slots: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub open_slots: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub scheduled_slots: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub deferred_slots: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub description: Maybe<String>,
    /// Whether deferred tasks count against the slots.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub include_deferred: Maybe<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoolCollection {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub pools: Vec<Pool>,
    pub total_entries: i64,
}

impl_dto!(Pool, PoolCollection);
