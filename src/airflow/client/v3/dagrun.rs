use reqwest::Method;

use super::model::dagrun::{
    ClearDagRunResponse, DagRunClearBody, DagRunCollectionResponse, DagRunPatchBody,
    DagRunResponse, DagRunState, DagRunType, DagRunsBatchBody, TriggerDagRunPostBody,
};
use super::{ApiError, PageParams, API_PATH, DELETE, GET, TRIGGER, UPDATE};
use crate::airflow::client::request::ApiRequest;
use crate::airflow::client::response::Operation;
use crate::airflow::model::Timestamp;

/// Query of `GET /dags/{dag_id}/dagRuns`. Use `~` as `dag_id` to list runs of every DAG.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetDagRunsParams {
    pub page: PageParams,
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
    pub run_type: Vec<DagRunType>,
    pub state: Vec<DagRunState>,
}

pub fn get_dag_runs(
    dag_id: &str,
    params: &GetDagRunsParams,
) -> Operation<DagRunCollectionResponse, ApiError> {
    let request = ApiRequest::new(Method::GET, API_PATH)
        .path("dags")
        .param(dag_id)
        .path("dagRuns");
    let request = params
        .page
        .apply(request)
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
        .query("run_type", &params.run_type)
        .query("state", &params.state);
    Operation::new(request, GET)
}

/// Lists runs across DAGs with the filter in the body.
pub fn get_list_dag_runs_batch(
    body: &DagRunsBatchBody,
) -> Operation<DagRunCollectionResponse, ApiError> {
    let request = ApiRequest::new(Method::POST, API_PATH)
        .path("dags/~/dagRuns/list")
        .json(body);
    Operation::new(request, GET)
}

pub fn get_dag_run(dag_id: &str, dag_run_id: &str) -> Operation<DagRunResponse, ApiError> {
    let request = ApiRequest::new(Method::GET, API_PATH)
        .path("dags")
        .param(dag_id)
        .path("dagRuns")
        .param(dag_run_id);
    Operation::new(request, GET)
}

/// Triggers a new run. 409 means a run with the same id exists.
pub fn trigger_dag_run(
    dag_id: &str,
    body: &TriggerDagRunPostBody,
) -> Operation<DagRunResponse, ApiError> {
    let request = ApiRequest::new(Method::POST, API_PATH)
        .path("dags")
        .param(dag_id)
        .path("dagRuns")
        .json(body);
    Operation::new(request, TRIGGER)
}

/// Sets the state or the note of a run.
pub fn patch_dag_run(
    dag_id: &str,
    dag_run_id: &str,
    body: &DagRunPatchBody,
    update_mask: &[String],
) -> Operation<DagRunResponse, ApiError> {
    let request = ApiRequest::new(Method::PATCH, API_PATH)
        .path("dags")
        .param(dag_id)
        .path("dagRuns")
        .param(dag_run_id)
        .query("update_mask", update_mask)
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
    body: &DagRunClearBody,
) -> Operation<ClearDagRunResponse, ApiError> {
    let request = ApiRequest::new(Method::POST, API_PATH)
        .path("dags")
        .param(dag_id)
        .path("dagRuns")
        .param(dag_run_id)
        .path("clear")
        .json(body);
    Operation::new(request, GET)
}
