use reqwest::Method;

use super::model::dagrun::{
    ClearDagRun, ClearDagRunResponse, DagRun, DagRunCollection, DagState, ListDagRunsForm,
    SetDagRunNote, UpdateDagRunState,
};
use super::{ApiError, API_PATH, DELETE, FILTERED_LIST, GET, LIST, TRIGGER, UPDATE};
use crate::airflow::client::request::ApiRequest;
use crate::airflow::client::response::Operation;
use crate::airflow::model::Timestamp;

/// Query of `GET /dags/{dag_id}/dagRuns`. Use `~` as `dag_id` to list runs of every DAG.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetDagRunsParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub execution_date_gte: Option<Timestamp>,
    pub execution_date_lte: Option<Timestamp>,
    pub start_date_gte: Option<Timestamp>,
    pub start_date_lte: Option<Timestamp>,
    pub end_date_gte: Option<Timestamp>,
    pub end_date_lte: Option<Timestamp>,
    pub updated_at_gte: Option<Timestamp>,
    pub updated_at_lte: Option<Timestamp>,
    pub state: Vec<DagState>,
    pub order_by: Option<String>,
    pub fields: Vec<String>,
}

pub fn get_dag_runs(
    dag_id: &str,
    params: &GetDagRunsParams,
) -> Operation<DagRunCollection, ApiError> {
    let request = ApiRequest::new(Method::GET, API_PATH)
        .path("dags")
        .param(dag_id)
        .path("dagRuns")
        .query("limit", &params.limit)
        .query("offset", &params.offset)
        .query("execution_date_gte", &params.execution_date_gte)
        .query("execution_date_lte", &params.execution_date_lte)
        .query("start_date_gte", &params.start_date_gte)
        .query("start_date_lte", &params.start_date_lte)
        .query("end_date_gte", &params.end_date_gte)
        .query("end_date_lte", &params.end_date_lte)
        .query("updated_at_gte", &params.updated_at_gte)
        .query("updated_at_lte", &params.updated_at_lte)
        .query("state", &params.state)
        .query("order_by", &params.order_by)
        .query("fields", &params.fields);
    Operation::new(request, LIST)
}

/// Lists runs across DAGs with the filter in the body.
pub fn get_dag_runs_batch(body: &ListDagRunsForm) -> Operation<DagRunCollection, ApiError> {
    let request = ApiRequest::new(Method::POST, API_PATH)
        .path("dags/~/dagRuns/list")
        .json(body);
    Operation::new(request, FILTERED_LIST)
}

pub fn get_dag_run(
    dag_id: &str,
    dag_run_id: &str,
    fields: &[String],
) -> Operation<DagRun, ApiError> {
    let request = ApiRequest::new(Method::GET, API_PATH)
        .path("dags")
        .param(dag_id)
        .path("dagRuns")
        .param(dag_run_id)
        .query("fields", fields);
    Operation::new(request, GET)
}

/// Triggers a new run. 409 means a run with the same id or logical date exists.
pub fn post_dag_run(dag_id: &str, body: &DagRun) -> Operation<DagRun, ApiError> {
    let request = ApiRequest::new(Method::POST, API_PATH)
        .path("dags")
        .param(dag_id)
        .path("dagRuns")
        .json(body);
    Operation::new(request, TRIGGER)
}

pub fn update_dag_run_state(
    dag_id: &str,
    dag_run_id: &str,
    body: &UpdateDagRunState,
) -> Operation<DagRun, ApiError> {
    let request = ApiRequest::new(Method::PATCH, API_PATH)
        .path("dags")
        .param(dag_id)
        .path("dagRuns")
        .param(dag_run_id)
        .json(body);
    Operation::new(request, UPDATE)
}

pub fn delete_dag_run(dag_id: &str, dag_run_id: &str) -> Operation<(), ApiError> {
    let request = ApiRequest::new(Method::DELETE, API_PATH)
        .path("dags")
        .param(dag_id)
        .path("dagRuns")
        .param(dag_run_id);
    Operation::new(request, DELETE)
}

/// Clears a run. The body is the affected task instances when `dry_run` is set and
/// the cleared run otherwise.
pub fn clear_dag_run(
    dag_id: &str,
    dag_run_id: &str,
    body: &ClearDagRun,
) -> Operation<ClearDagRunResponse, ApiError> {
    let request = ApiRequest::new(Method::POST, API_PATH)
        .path("dags")
        .param(dag_id)
        .path("dagRuns")
        .param(dag_run_id)
        .path("clear")
        .json(body);
    Operation::new(request, UPDATE)
}

pub fn set_dag_run_note(
    dag_id: &str,
    dag_run_id: &str,
    body: &SetDagRunNote,
) -> Operation<DagRun, ApiError> {
    let request = ApiRequest::new(Method::PATCH, API_PATH)
        .path("dags")
        .param(dag_id)
        .path("dagRuns")
        .param(dag_run_id)
        .path("setNote")
        .json(body);
    Operation::new(request, UPDATE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airflow::client::testing::{async_client, blocking_client};
    use crate::airflow::client::v2::model::dagrun::UpdateDagRunStateKind;
    use crate::airflow::model::Maybe;
    use mockito::Matcher;
    use serde_json::json;
    use time::macros::datetime;

    #[test]
    fn run_ids_with_reserved_characters_stay_one_segment() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/v1/dags/etl/dagRuns/manual__2024-01-01T00:00:00+00:00%2Fretry")
            .with_status(200)
            .with_body(r#"{"dag_run_id": "manual__2024-01-01T00:00:00+00:00/retry", "state": "success"}"#)
            .create();

        let run = blocking_client(&server)
            .execute(get_dag_run("etl", "manual__2024-01-01T00:00:00+00:00/retry", &[]))
            .unwrap()
            .unwrap()
            .into_body()
            .unwrap();

        mock.assert();
        assert_eq!(run.state, Maybe::Present(DagState::Success));
    }

    #[tokio::test]
    async fn list_runs_with_state_and_date_filters() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/dags/~/dagRuns")
            .match_query(Matcher::Exact(
                "limit=50&start_date_gte=2024-01-01T00%3A00%3A00Z&state=failed&state=running"
                    .to_string(),
            ))
            .with_status(200)
            .with_body(r#"{"dag_runs": [], "total_entries": 0}"#)
            .create_async()
            .await;

        let params = GetDagRunsParams {
            limit: Some(50),
            start_date_gte: Some(Timestamp(datetime!(2024-01-01 00:00 UTC))),
            state: vec![DagState::Failed, DagState::Running],
            ..GetDagRunsParams::default()
        };
        let runs = async_client(&server)
            .execute(get_dag_runs("~", &params))
            .await
            .unwrap()
            .unwrap()
            .into_body()
            .unwrap();

        mock.assert_async().await;
        assert!(runs.dag_runs.is_empty());
    }

    #[test]
    fn trigger_conflict_is_documented() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/api/v1/dags/etl/dagRuns")
            .match_body(Matcher::Json(json!({"dag_run_id": "nightly", "conf": {}})))
            .with_status(409)
            .with_body(r#"{"title": "DAGRun with DAG ID: 'etl' and DAGRun ID: 'nightly' already exists", "status": 409}"#)
            .create();

        let body = DagRun {
            dag_run_id: Maybe::Present("nightly".to_string()),
            conf: Maybe::Present(json!({})),
            ..DagRun::default()
        };
        let response = blocking_client(&server)
            .execute(post_dag_run("etl", &body))
            .unwrap()
            .unwrap();

        mock.assert();
        assert_eq!(response.status().as_u16(), 409);
        assert!(response.error().unwrap().message().unwrap().contains("already exists"));
    }

    #[test]
    fn dry_run_clear_yields_task_instances() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/api/v1/dags/etl/dagRuns/nightly/clear")
            .match_body(Matcher::Json(json!({"dry_run": true})))
            .with_status(200)
            .with_body(r#"{"task_instances": [{"task_id": "load", "state": "failed"}], "total_entries": 1}"#)
            .create();

        let body = ClearDagRun {
            dry_run: Maybe::Present(true),
            ..ClearDagRun::default()
        };
        let cleared = blocking_client(&server)
            .execute(clear_dag_run("etl", "nightly", &body))
            .unwrap()
            .unwrap()
            .into_body()
            .unwrap();

        assert!(matches!(cleared, ClearDagRunResponse::TaskInstances(ref c) if c.task_instances.len() == 1));
    }

    #[test]
    fn mark_run_failed() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("PATCH", "/api/v1/dags/etl/dagRuns/nightly")
            .match_body(Matcher::Json(json!({"state": "failed"})))
            .with_status(200)
            .with_body(r#"{"dag_run_id": "nightly", "state": "failed"}"#)
            .create();

        let body = UpdateDagRunState {
            state: Maybe::Present(UpdateDagRunStateKind::Failed),
            ..UpdateDagRunState::default()
        };
        let run = blocking_client(&server)
            .execute(update_dag_run_state("etl", "nightly", &body))
            .unwrap()
            .unwrap()
            .into_body()
            .unwrap();

        mock.assert();
        assert_eq!(run.state, Maybe::Present(DagState::Failed));
    }

    #[test]
    fn batch_listing_posts_the_form() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/api/v1/dags/~/dagRuns/list")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({"dag_ids": ["a", "b"], "page_limit": 10})))
            .with_status(200)
            .with_body(r#"{"dag_runs": [{"dag_id": "a"}], "total_entries": 1}"#)
            .create();

        let form = ListDagRunsForm {
            dag_ids: Maybe::Present(vec!["a".to_string(), "b".to_string()]),
            page_limit: Maybe::Present(10),
            ..ListDagRunsForm::default()
        };
        let runs = blocking_client(&server)
            .execute(get_dag_runs_batch(&form))
            .unwrap()
            .unwrap()
            .into_body()
            .unwrap();

        mock.assert();
        assert_eq!(runs.total_entries, 1);
    }
}
