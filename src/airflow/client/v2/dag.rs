use reqwest::Method;

use super::model::dag::{Dag, DagCollection, DagDetail, DagSource};
use super::model::taskinstance::{
    ClearTaskInstances, TaskInstanceReferenceCollection, UpdateTaskInstancesState,
};
use super::{ApiError, API_PATH, DELETE, GET, LIST, UPDATE};
use crate::airflow::client::request::ApiRequest;
use crate::airflow::client::response::Operation;

/// Query of `GET /dags`.
#[derive(Debug, Clone, PartialEq)]
pub struct GetDagsParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub order_by: Option<String>,
    pub tags: Vec<String>,
    pub only_active: Option<bool>,
    pub paused: Option<bool>,
    pub fields: Vec<String>,
    pub dag_id_pattern: Option<String>,
}

/// Airflow's own defaults: 100 entries, active DAGs only.
impl Default for GetDagsParams {
    fn default() -> Self {
        Self {
            limit: Some(100),
            offset: None,
            order_by: None,
            tags: Vec::new(),
            only_active: Some(true),
            paused: None,
            fields: Vec::new(),
            dag_id_pattern: None,
        }
    }
}

pub fn get_dags(params: &GetDagsParams) -> Operation<DagCollection, ApiError> {
    let request = ApiRequest::new(Method::GET, API_PATH)
        .path("dags")
        .query("limit", &params.limit)
        .query("offset", &params.offset)
        .query("order_by", &params.order_by)
        .query("tags", &params.tags)
        .query("only_active", &params.only_active)
        .query("paused", &params.paused)
        .query("fields", &params.fields)
        .query("dag_id_pattern", &params.dag_id_pattern);
    Operation::new(request, LIST)
}

/// Query of `PATCH /dags`. `dag_id_pattern` is required by Airflow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchDagsParams {
    pub dag_id_pattern: String,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub tags: Vec<String>,
    pub update_mask: Vec<String>,
    pub only_active: Option<bool>,
}

/// Updates every DAG matching the filter. Only `is_paused` is accepted in `body`.
pub fn patch_dags(params: &PatchDagsParams, body: &Dag) -> Operation<DagCollection, ApiError> {
    let request = ApiRequest::new(Method::PATCH, API_PATH)
        .path("dags")
        .query("limit", &params.limit)
        .query("offset", &params.offset)
        .query("tags", &params.tags)
        .query("update_mask", &params.update_mask)
        .query("only_active", &params.only_active)
        .query("dag_id_pattern", params.dag_id_pattern.as_str())
        .json(body);
    Operation::new(request, GET)
}

pub fn get_dag(dag_id: &str, fields: &[String]) -> Operation<Dag, ApiError> {
    let request = ApiRequest::new(Method::GET, API_PATH)
        .path("dags")
        .param(dag_id)
        .query("fields", fields);
    Operation::new(request, GET)
}

pub fn patch_dag(dag_id: &str, body: &Dag, update_mask: &[String]) -> Operation<Dag, ApiError> {
    let request = ApiRequest::new(Method::PATCH, API_PATH)
        .path("dags")
        .param(dag_id)
        .query("update_mask", update_mask)
        .json(body);
    Operation::new(request, UPDATE)
}

/// Deletes the DAG and all its metadata. Answers 204 on success.
pub fn delete_dag(dag_id: &str) -> Operation<(), ApiError> {
    let request = ApiRequest::new(Method::DELETE, API_PATH)
        .path("dags")
        .param(dag_id);
    Operation::new(request, DELETE)
}

pub fn get_dag_details(dag_id: &str, fields: &[String]) -> Operation<DagDetail, ApiError> {
    let request = ApiRequest::new(Method::GET, API_PATH)
        .path("dags")
        .param(dag_id)
        .path("details")
        .query("fields", fields);
    Operation::new(request, GET)
}

/// Source code of a DAG file. `file_token` comes from [`Dag::file_token`].
pub fn get_dag_source(file_token: &str) -> Operation<DagSource, ApiError> {
    let request = ApiRequest::new(Method::GET, API_PATH)
        .path("dagSources")
        .param(file_token)
        .accept("application/json");
    Operation::new(request, GET)
}

pub fn post_clear_task_instances(
    dag_id: &str,
    body: &ClearTaskInstances,
) -> Operation<TaskInstanceReferenceCollection, ApiError> {
    let request = ApiRequest::new(Method::POST, API_PATH)
        .path("dags")
        .param(dag_id)
        .path("clearTaskInstances")
        .json(body);
    Operation::new(request, UPDATE)
}

pub fn post_set_task_instances_state(
    dag_id: &str,
    body: &UpdateTaskInstancesState,
) -> Operation<TaskInstanceReferenceCollection, ApiError> {
    let request = ApiRequest::new(Method::POST, API_PATH)
        .path("dags")
        .param(dag_id)
        .path("updateTaskInstancesState")
        .json(body);
    Operation::new(request, UPDATE)
}
