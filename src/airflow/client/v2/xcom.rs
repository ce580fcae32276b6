use reqwest::Method;

use super::model::xcom::{XCom, XComCollection};
use super::{ApiError, API_PATH, FILTERED_LIST, UPDATE};
use crate::airflow::client::request::ApiRequest;
use crate::airflow::client::response::Operation;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetXComEntriesParams {
    pub map_index: Option<i64>,
    pub xcom_key: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

pub fn get_xcom_entries(
    dag_id: &str,
    dag_run_id: &str,
    task_id: &str,
    params: &GetXComEntriesParams,
) -> Operation<XComCollection, ApiError> {
    let request = ApiRequest::new(Method::GET, API_PATH)
        .path("dags")
        .param(dag_id)
        .path("dagRuns")
        .param(dag_run_id)
        .path("taskInstances")
        .param(task_id)
        .path("xcomEntries")
        .query("map_index", &params.map_index)
        .query("xcom_key", &params.xcom_key)
        .query("limit", &params.limit)
        .query("offset", &params.offset);
    Operation::new(request, FILTERED_LIST)
}

/// `deserialize` asks Airflow for the stored value instead of its string form;
/// `stringify` then controls whether that value is rendered with `str()`.
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
) -> Operation<XCom, ApiError> {
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
    Operation::new(request, UPDATE)
}
