use serde::{Deserialize, Serialize};

use super::schedule::{ScheduleInterval, TimeDelta};
use crate::airflow::model::{impl_dto, Extras, Maybe, Timestamp};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub name: Maybe<String>,
}

/// A DAG as listed by `GET /dags`.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dag {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dag_id: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dag_display_name: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub root_dag_id: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub is_paused: Maybe<bool>,
    /// False once the DAG file disappeared from the DAGs folder.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub is_active: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub is_subdag: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub last_parsed_time: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub last_pickled: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub last_expired: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub scheduler_lock: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub pickle_id: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub default_view: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub fileloc: Maybe<String>,
    /// Opaque token to fetch the DAG source with.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub file_token: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub owners: Maybe<Vec<String>>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub description: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub schedule_interval: Maybe<ScheduleInterval>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub timetable_description: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub tags: Maybe<Vec<Tag>>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub max_active_tasks: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub max_active_runs: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub has_task_concurrency_limits: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub has_import_errors: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub next_dagrun: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub next_dagrun_data_interval_start: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub next_dagrun_data_interval_end: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub next_dagrun_create_after: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub max_consecutive_failed_dag_runs: Maybe<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DagCollection {
    #[serde(flatten)]
    pub additional_properties: Extras,
    pub dags: Vec<Dag>,
    pub total_entries: i64,
}

/// `Dag` plus the attributes only `GET /dags/{dag_id}/details` returns.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DagDetail {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dag_id: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dag_display_name: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub root_dag_id: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub is_paused: Maybe<bool>,
    /// False once the DAG file disappeared from the DAGs folder.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub is_active: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub is_subdag: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub last_parsed_time: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub last_pickled: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub last_expired: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub scheduler_lock: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub pickle_id: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub fileloc: Maybe<String>,
    /// Opaque token to fetch the DAG source with.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub file_token: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub owners: Maybe<Vec<String>>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub description: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub schedule_interval: Maybe<ScheduleInterval>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub timetable_description: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub tags: Maybe<Vec<Tag>>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub max_active_tasks: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub max_active_runs: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub has_task_concurrency_limits: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub has_import_errors: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub next_dagrun: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub next_dagrun_data_interval_start: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub next_dagrun_data_interval_end: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub next_dagrun_create_after: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub max_consecutive_failed_dag_runs: Maybe<i64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub default_view: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub timezone: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub catchup: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub orientation: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub concurrency: Maybe<f64>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub start_date: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dag_run_timeout: Maybe<TimeDelta>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub dataset_expression: Maybe<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub doc_md: Maybe<String>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub params: Maybe<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub end_date: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub is_paused_upon_creation: Maybe<bool>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub last_parsed: Maybe<Timestamp>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub template_search_path: Maybe<Vec<String>>,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub render_template_as_native_obj: Maybe<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DagSource {
    #[serde(flatten)]
    pub additional_properties: Extras,
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub content: Maybe<String>,
}

impl_dto!(Tag, Dag, DagCollection, DagDetail, DagSource);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minimal_dag_leaves_everything_else_absent() {
        let collection: DagCollection =
            serde_json::from_value(json!({"total_entries": 1, "dags": [{"dag_id": "x"}]})).unwrap();
        assert_eq!(collection.total_entries, 1);
        let dag = &collection.dags[0];
        assert_eq!(dag.dag_id, Maybe::Present("x".to_string()));
        assert_eq!(
            *dag,
            Dag {
                dag_id: Maybe::Present("x".to_string()),
                ..Dag::default()
            }
        );
        assert_eq!(serde_json::to_value(dag).unwrap(), json!({"dag_id": "x"}));
    }

    #[test]
    fn collection_requires_its_list() {
        assert!(serde_json::from_value::<DagCollection>(json!({"total_entries": 0})).is_err());
    }

    #[test]
    fn detail_decodes_schedule_and_timeout() {
        let detail: DagDetail = serde_json::from_value(json!({
            "dag_id": "etl",
            "schedule_interval": {"__type": "CronExpression", "value": "0 * * * *"},
            "dag_run_timeout": {"__type": "TimeDelta", "days": 0, "seconds": 3600, "microseconds": 0},
            "tags": [{"name": "prod"}],
            "is_paused": null,
            "start_date": "2024-01-01T00:00:00+00:00",
            "params": {"retries": 3}
        }))
        .unwrap();

        assert!(matches!(
            detail.schedule_interval,
            Maybe::Present(ScheduleInterval::CronExpression(ref cron)) if cron.value == "0 * * * *"
        ));
        let timeout = detail.dag_run_timeout.as_option().unwrap();
        assert_eq!(timeout.seconds, 3600);
        assert_eq!(timeout.type_, Maybe::Present("TimeDelta".to_string()));
        assert!(timeout.additional_properties.is_empty());
        assert_eq!(detail.is_paused, Maybe::Null);
        assert_eq!(detail.tags.as_option().unwrap()[0].name, Maybe::Present("prod".to_string()));
        assert!(detail.end_date.is_absent());
    }
}
