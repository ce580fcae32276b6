use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::airflow::model::{impl_dto, Extras, Maybe, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadatabaseStatus {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub status: Maybe<HealthStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchedulerStatus {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub status: Maybe<HealthStatus>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub latest_scheduler_heartbeat: Maybe<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriggererStatus {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub status: Maybe<HealthStatus>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub latest_triggerer_heartbeat: Maybe<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DagProcessorStatus {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub status: Maybe<HealthStatus>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub latest_dag_processor_heartbeat: Maybe<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthInfo {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub metadatabase: Maybe<MetadatabaseStatus>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub scheduler: Maybe<SchedulerStatus>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub triggerer: Maybe<TriggererStatus>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dag_processor: Maybe<DagProcessorStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VersionInfo {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub version: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub git_version: Maybe<String>,
}

impl_dto!(
    MetadatabaseStatus,
    SchedulerStatus,
    TriggererStatus,
    DagProcessorStatus,
    HealthInfo,
    VersionInfo
);
