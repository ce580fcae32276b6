use reqwest::Method;

use super::model::taskinstance::{
    ListTaskInstanceForm, TaskInstance, TaskInstanceCollection, TaskInstanceReference, TaskLog,
    TaskState, UpdateTaskInstance,
};
use super::{ApiError, API_PATH, GET, LIST, UPDATE};
use crate::airflow::client::request::ApiRequest;
use crate::airflow::client::response::Operation;
use crate::airflow::model::Timestamp;

/// Query of `GET /dags/{dag_id}/dagRuns/{dag_run_id}/taskInstances`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetTaskInstancesParams {
    pub execution_date_gte: Option<Timestamp>,
    pub execution_date_lte: Option<Timestamp>,
    pub start_date_gte: Option<Timestamp>,
    pub start_date_lte: Option<Timestamp>,
    pub end_date_gte: Option<Timestamp>,
    pub end_date_lte: Option<Timestamp>,
    pub updated_at_gte: Option<Timestamp>,
    pub updated_at_lte: Option<Timestamp>,
    pub duration_gte: Option<f64>,
    pub duration_lte: Option<f64>,
    pub state: Vec<TaskState>,
    pub pool: Vec<String>,
    pub queue: Vec<String>,
    pub executor: Vec<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

pub fn get_task_instances(
    dag_id: &str,
    dag_run_id: &str,
    params: &GetTaskInstancesParams,
) -> Operation<TaskInstanceCollection, ApiError> {
    let request = ApiRequest::new(Method::GET, API_PATH)
        .path("dags")
        .param(dag_id)
        .path("dagRuns")
        .param(dag_run_id)
        .path("taskInstances")
        .query("execution_date_gte", &params.execution_date_gte)
        .query("execution_date_lte", &params.execution_date_lte)
        .query("start_date_gte", &params.start_date_gte)
        .query("start_date_lte", &params.start_date_lte)
        .query("end_date_gte", &params.end_date_gte)
        .query("end_date_lte", &params.end_date_lte)
        .query("updated_at_gte", &params.updated_at_gte)
        .query("updated_at_lte", &params.updated_at_lte)
        .query("duration_gte", &params.duration_gte)
        .query("duration_lte", &params.duration_lte)
        .query("state", &params.state)
        .query("pool", &params.pool)
        .query("queue", &params.queue)
        .query("executor", &params.executor)
        .query("limit", &params.limit)
        .query("offset", &params.offset);
    Operation::new(request, LIST)
}

pub fn get_task_instance(
    dag_id: &str,
    dag_run_id: &str,
    task_id: &str,
) -> Operation<TaskInstance, ApiError> {
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
    body: &ListTaskInstanceForm,
) -> Operation<TaskInstanceCollection, ApiError> {
    let request = ApiRequest::new(Method::POST, API_PATH)
        .path("dags/~/dagRuns/~/taskInstances/list")
        .json(body);
    Operation::new(request, GET)
}

/// Sets the state of one task instance.
pub fn patch_task_instance(
    dag_id: &str,
    dag_run_id: &str,
    task_id: &str,
    body: &UpdateTaskInstance,
) -> Operation<TaskInstanceReference, ApiError> {
    let request = ApiRequest::new(Method::PATCH, API_PATH)
        .path("dags")
        .param(dag_id)
        .path("dagRuns")
        .param(dag_run_id)
        .path("taskInstances")
        .param(task_id)
        .json(body);
    Operation::new(request, UPDATE)
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
    task_try_number: u16,
    params: &GetLogParams,
) -> Operation<TaskLog, ApiError> {
    let request = ApiRequest::new(Method::GET, API_PATH)
        .path("dags")
        .param(dag_id)
        .path("dagRuns")
        .param(dag_run_id)
        .path("taskInstances")
        .param(task_id)
        .path("logs")
        .param(task_try_number)
        .query("full_content", &params.full_content)
        .query("map_index", &params.map_index)
        .query("token", &params.token)
        .accept("application/json");
    Operation::new(request, UPDATE)
}
