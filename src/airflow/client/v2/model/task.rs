use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::dag::Dag;
use super::schedule::TimeDelta;
use crate::airflow::client::request::query_via_display;
use crate::airflow::model::{impl_dto, Extras, Maybe, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TriggerRule {
    AllSuccess,
    AllFailed,
    AllDone,
    AllDoneSetupSuccess,
    OneSuccess,
    OneFailed,
    OneDone,
    NoneFailed,
    NoneSkipped,
    NoneFailedOrSkipped,
    NoneFailedMinOneSuccess,
    Dummy,
    AllSkipped,
    Always,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WeightRule {
    Downstream,
    Upstream,
    Absolute,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassReference {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub module_path: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub class_name: Maybe<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtraLink {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub class_ref: Maybe<ClassReference>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub name: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub href: Maybe<String>,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub class_ref: Maybe<ClassReference>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub task_id: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub task_display_name: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub owner: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub start_date: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub end_date: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub trigger_rule: Maybe<TriggerRule>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub extra_links: Maybe<Vec<ExtraLink>>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub depends_on_past: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub is_mapped: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub wait_for_downstream: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub retries: Maybe<f64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub queue: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub executor: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub pool: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub pool_slots: Maybe<f64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub execution_timeout: Maybe<TimeDelta>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub retry_delay: Maybe<TimeDelta>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub retry_exponential_backoff: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub priority_weight: Maybe<f64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub weight_rule: Maybe<WeightRule>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub ui_color: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub ui_fgcolor: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub template_fields: Maybe<Vec<String>>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub sub_dag: Maybe<Dag>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub downstream_task_ids: Maybe<Vec<String>>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub doc_md: Maybe<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskCollection {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub tasks: Vec<Task>,
    pub total_entries: i64,
}

query_via_display!(TriggerRule, WeightRule);

impl_dto!(ClassReference, ExtraLink, Task, TaskCollection);
