use serde::{Deserialize, Serialize};

use crate::airflow::model::{impl_dto, Extras, Maybe};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeDelta {
    #[serde(flatten)]
    pub additional_properties: Extras,
    /// `"TimeDelta"` when sent standalone; the tag of `ScheduleInterval` otherwise.
    #[serde(default, skip_serializing_if = "Maybe::is_absent", rename = "__type")]
    pub type_: Maybe<String>,
    pub days: i64,
    pub seconds: i64,
    pub microseconds: i64,
}

/// `dateutil.relativedelta`: plural fields are offsets, singular fields replace a component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelativeDelta {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent", rename = "__type")]
    pub type_: Maybe<String>,
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub leapdays: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub microseconds: i64,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub year: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub month: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub day: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub hour: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub minute: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub second: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub microsecond: Maybe<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CronExpression {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent", rename = "__type")]
    pub type_: Maybe<String>,
    pub value: String,
}

/// Schedule of a DAG. The variant is named by the `"__type"` key of the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "__type")]
pub enum ScheduleInterval {
    TimeDelta(TimeDelta),
    RelativeDelta(RelativeDelta),
    CronExpression(CronExpression),
}

impl_dto!(TimeDelta, RelativeDelta, CronExpression);
