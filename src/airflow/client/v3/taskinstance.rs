use reqwest::Method;

use super::model::taskinstance::{
    ClearTaskInstancesBody, PatchTaskInstanceBody, TaskInstanceCollectionResponse,
    TaskInstanceResponse, TaskInstanceState, TaskInstancesBatchBody, TaskInstancesLogResponse,
};
use super::{ApiError, PageParams, API_PATH, GET, UPDATE};
use crate::airflow::client::request::ApiRequest;
use crate::airflow::client::response::Operation;
use crate::airflow::model::Timestamp;

/// Query of `GET /dags/{dag_id}/dagRuns/{dag_run_id}/taskInstances`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetTaskInstancesParams {
    pub page: PageParams,
    pub task_id: Option<String>,
    pub run_after_gte: Option<Timestamp>,
    pub run_after_lte: Option<Timestamp>,
    pub logical_date_gte: Option<Timestamp>,
    pub logical_date_lte: Option<Timestamp>,
    pub start_date_gte: Option<Timestamp>,
    pub start_date_lte: Option<Timestamp>,
    pub end_date_gte: Option<Timestamp>,
    pub end_date_lte: Option<Timestamp>,
    pub updated_at_gte: Option<Timestamp>,
    pub updated_at_lte: Option<Timestamp>,
    pub duration_gte: Option<f64>,
    pub duration_lte: Option<f64>,
    pub task_display_name_pattern: Option<String>,
    pub state: Vec<TaskInstanceState>,
    pub pool: Vec<String>,
    pub queue: Vec<String>,
    pub executor: Vec<String>,
    pub version_number: Vec<i64>,
}

pub fn get_task_instances(
    dag_id: &str,
    dag_run_id: &str,
    params: &GetTaskInstancesParams,
) -> Operation<TaskInstanceCollectionResponse, ApiError> {
    let request = ApiRequest::new(Method::GET, API_PATH)
        .path("dags")
        .param(dag_id)
        .path("dagRuns")
        .param(dag_run_id)
        .path("taskInstances");
    let request = params
        .page
        .apply(request)
        .query("task_id", &params.task_id)
        .query("run_after_gte", &params.run_after_gte)
        .query("run_after_lte", &params.run_after_lte)
        .query("logical_date_gte", &params.logical_date_gte)
        .query("logical_date_lte", &params.logical_date_lte)
        .query("start_date_gte", &params.start_date_gte)
        .query("start_date_lte", &params.start_date_lte)
        .query("end_date_gte", &params.end_date_gte)
        .query("end_date_lte", &params.end_date_lte)
        .query("updated_at_gte", &params.updated_at_gte)
        .query("updated_at_lte", &params.updated_at_lte)
        .query("duration_gte", &params.duration_gte)
        .query("duration_lte", &params.duration_lte)
        .query("task_display_name_pattern", &params.task_display_name_pattern)
        .query("state", &params.state)
        .query("pool", &params.pool)
        .query("queue", &params.queue)
        .query("executor", &params.executor)
        .query("version_number", &params.version_number);
    Operation::new(request, GET)
}

pub fn get_task_instance(
    dag_id: &str,
    dag_run_id: &str,
    task_id: &str,
) -> Operation<TaskInstanceResponse, ApiError> {
    let request = ApiRequest::new(Method::GET, API_PATH)
        .path("dags")
        .param(dag_id)
        .path("dagRuns")
        .param(dag_run_id)
        .path("taskInstances")
        .param(task_id);
    Operation::new(request, GET)
}

/// Lists task instances across DAGs and runs with the filter in the body.
pub fn get_task_instances_batch(
    body: &TaskInstancesBatchBody,
) -> Operation<TaskInstanceCollectionResponse, ApiError> {
    let request = ApiRequest::new(Method::POST, API_PATH)
        .path("dags/~/dagRuns/~/taskInstances/list")
        .json(body);
    Operation::new(request, GET)
}

/// Sets the state or note of a task instance. `include_*` flags in the body extend
/// the change to related instances, which is why a collection comes back.
pub fn patch_task_instance(
    dag_id: &str,
    dag_run_id: &str,
    task_id: &str,
    map_index: Option<i64>,
    body: &PatchTaskInstanceBody,
    update_mask: &[String],
) -> Operation<TaskInstanceCollectionResponse, ApiError> {
    let request = ApiRequest::new(Method::PATCH, API_PATH)
        .path("dags")
        .param(dag_id)
        .path("dagRuns")
        .param(dag_run_id)
        .path("taskInstances")
        .param(task_id)
        .query("map_index", &map_index)
        .query("update_mask", update_mask)
        .json(body);
    Operation::new(request, UPDATE)
}

pub fn post_clear_task_instances(
    dag_id: &str,
    body: &ClearTaskInstancesBody,
) -> Operation<TaskInstanceCollectionResponse, ApiError> {
    let request = ApiRequest::new(Method::POST, API_PATH)
        .path("dags")
        .param(dag_id)
        .path("clearTaskInstances")
        .json(body);
    Operation::new(request, GET)
}

/// Query of the log endpoint. Without `full_content` Airflow returns one chunk and a
/// `continuation_token` to pass back as `token`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetLogParams {
    pub full_content: Option<bool>,
    pub map_index: Option<i64>,
    pub token: Option<String>,
}

pub fn get_log(
    dag_id: &str,
    dag_run_id: &str,
    task_id: &str,
    try_number: u16,
    params: &GetLogParams,
) -> Operation<TaskInstancesLogResponse, ApiError> {
    let request = ApiRequest::new(Method::GET, API_PATH)
        .path("dags")
        .param(dag_id)
        .path("dagRuns")
        .param(dag_run_id)
        .path("taskInstances")
        .param(task_id)
        .path("logs")
        .param(try_number)
        .query("full_content", &params.full_content)
        .query("map_index", &params.map_index)
        .query("token", &params.token)
        .accept("application/json");
    Operation::new(request, GET)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airflow::client::testing::{async_client, blocking_client};
    use crate::airflow::client::v3::model::taskinstance::{LogContent, PatchTaskInstanceState};
    use crate::airflow::model::Maybe;
    use mockito::Matcher;
    use serde_json::json;

    const INSTANCE: &str = r#"{
        "id": "0195a6b2-3d43-7b5a-8a3e-0f8e4f0a1b2c",
        "task_id": "load",
        "dag_id": "etl",
        "dag_run_id": "manual__1",
        "map_index": -1,
        "state": "success",
        "try_number": 1,
        "max_tries": 0,
        "pool_slots": 1,
        "trigger": null,
        "triggerer_job": null,
        "dag_version": null
    }"#;

    #[tokio::test]
    async fn structured_log_chunk() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v2/dags/etl/dagRuns/manual__1/taskInstances/load/logs/1")
            .match_query("map_index=-1")
            .match_header("accept", "application/json")
            .with_status(200)
            .with_body(
                r#"{"content": [{"timestamp": "2025-03-01T00:00:01Z", "event": "Task started", "logger": "task"}],
                    "continuation_token": "eyJlbmQiOjF9"}"#,
            )
            .create_async()
            .await;

        let params = GetLogParams {
            map_index: Some(-1),
            ..GetLogParams::default()
        };
        let log = async_client(&server)
            .execute(get_log("etl", "manual__1", "load", 1, &params))
            .await
            .unwrap()
            .unwrap()
            .into_body()
            .unwrap();

        mock.assert_async().await;
        let LogContent::Structured(lines) = &log.content else {
            panic!("expected structured lines");
        };
        assert_eq!(lines[0].event, "Task started");
        assert_eq!(log.continuation_token.as_deref(), Some("eyJlbmQiOjF9"));
    }

    #[test]
    fn mark_mapped_instance_failed() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("PATCH", "/api/v2/dags/etl/dagRuns/manual__1/taskInstances/load")
            .match_query("map_index=3&update_mask=new_state")
            .match_body(Matcher::Json(json!({"new_state": "failed", "include_downstream": true})))
            .with_status(200)
            .with_body(format!(r#"{{"task_instances": [{INSTANCE}], "total_entries": 1}}"#))
            .create();

        let body = PatchTaskInstanceBody {
            new_state: Maybe::Present(PatchTaskInstanceState::Failed),
            include_downstream: Maybe::Present(true),
            ..PatchTaskInstanceBody::default()
        };
        let collection = blocking_client(&server)
            .execute(patch_task_instance(
                "etl",
                "manual__1",
                "load",
                Some(3),
                &body,
                &["new_state".to_string()],
            ))
            .unwrap()
            .unwrap()
            .into_body()
            .unwrap();

        mock.assert();
        assert_eq!(collection.task_instances[0].state, Some(TaskInstanceState::Success));
    }

    #[test]
    fn single_instance_with_nullable_relations() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/api/v2/dags/etl/dagRuns/manual__1/taskInstances/load")
            .with_status(200)
            .with_body(INSTANCE)
            .create();

        let instance = blocking_client(&server)
            .execute(get_task_instance("etl", "manual__1", "load"))
            .unwrap()
            .unwrap()
            .into_body()
            .unwrap();
        assert_eq!(instance.map_index, -1);
        assert!(instance.trigger.is_none());
        assert!(instance.rendered_fields.is_absent());
    }

    #[test]
    fn dry_run_clear() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/api/v2/dags/etl/clearTaskInstances")
            .match_body(Matcher::Json(
                json!({"dry_run": true, "only_failed": true, "task_ids": ["load"]}),
            ))
            .with_status(200)
            .with_body(r#"{"task_instances": [], "total_entries": 0}"#)
            .create();

        let body = ClearTaskInstancesBody {
            dry_run: Maybe::Present(true),
            only_failed: Maybe::Present(true),
            task_ids: Maybe::Present(vec!["load".to_string()]),
            ..ClearTaskInstancesBody::default()
        };
        blocking_client(&server)
            .execute(post_clear_task_instances("etl", &body))
            .unwrap()
            .unwrap();
        mock.assert();
    }
}
