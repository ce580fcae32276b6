use reqwest::Method;

use super::model::task::{TaskCollectionResponse, TaskResponse};
use super::{ApiError, API_PATH, GET};
use crate::airflow::client::request::ApiRequest;
use crate::airflow::client::response::Operation;

pub fn get_tasks(dag_id: &str, order_by: Option<&str>) -> Operation<TaskCollectionResponse, ApiError> {
    let request = ApiRequest::new(Method::GET, API_PATH)
        .path("dags")
        .param(dag_id)
        .path("tasks")
        .query("order_by", &order_by);
    Operation::new(request, GET)
}

pub fn get_task(dag_id: &str, task_id: &str) -> Operation<TaskResponse, ApiError> {
    let request = ApiRequest::new(Method::GET, API_PATH)
        .path("dags")
        .param(dag_id)
        .path("tasks")
        .param(task_id);
    Operation::new(request, GET)
}
