use reqwest::Method;

use super::model::xcom::{XComCollectionResponse, XComEntry};
use super::{ApiError, API_PATH, GET};
use crate::airflow::client::request::ApiRequest;
use crate::airflow::client::response::Operation;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetXComEntriesParams {
    pub xcom_key: Option<String>,
    pub map_index: Option<i64>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Use `~` for any path parameter to list entries across DAGs, runs or tasks.
pub fn get_xcom_entries(
    dag_id: &str,
    dag_run_id: &str,
    task_id: &str,
    params: &GetXComEntriesParams,
) -> Operation<XComCollectionResponse, ApiError> {
    let request = ApiRequest::new(Method::GET, API_PATH)
        .path("dags")
        .param(dag_id)
        .path("dagRuns")
        .param(dag_run_id)
        .path("taskInstances")
        .param(task_id)
        .path("xcomEntries")
        .query("xcom_key", &params.xcom_key)
        .query("map_index", &params.map_index)
        .query("limit", &params.limit)
        .query("offset", &params.offset);
    Operation::new(request, GET)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetXComEntryParams {
    pub map_index: Option<i64>,
    pub deserialize: Option<bool>,
    pub stringify: Option<bool>,
}

pub fn get_xcom_entry(
    dag_id: &str,
    dag_run_id: &str,
    task_id: &str,
    xcom_key: &str,
    params: &GetXComEntryParams,
) -> Operation<XComEntry, ApiError> {
    let request = ApiRequest::new(Method::GET, API_PATH)
        .path("dags")
        .param(dag_id)
        .path("dagRuns")
        .param(dag_run_id)
        .path("taskInstances")
        .param(task_id)
        .path("xcomEntries")
        .param(xcom_key)
        .query("map_index", &params.map_index)
        .query("deserialize", &params.deserialize)
        .query("stringify", &params.stringify);
    Operation::new(request, GET)
}
