use serde::{Deserialize, Serialize};

use crate::airflow::model::{impl_dto, Extras, Maybe, Timestamp};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseInfoResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchedulerInfoResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub status: Option<String>,
    pub latest_scheduler_heartbeat: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriggererInfoResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub status: Option<String>,
    pub latest_triggerer_heartbeat: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DagProcessorInfoResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub status: Option<String>,
    pub latest_dag_processor_heartbeat: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthInfoResponse {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub metadatabase: BaseInfoResponse,
    pub scheduler: SchedulerInfoResponse,
    pub triggerer: TriggererInfoResponse,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dag_processor: Maybe<DagProcessorInfoResponse>,
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
    BaseInfoResponse,
    SchedulerInfoResponse,
    TriggererInfoResponse,
    DagProcessorInfoResponse,
    HealthInfoResponse,
    VersionInfo,
);
