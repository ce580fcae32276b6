use reqwest::Method;

use super::model::eventlog::{EventLogCollectionResponse, EventLogResponse};
use super::{ApiError, PageParams, API_PATH, GET, LIST};
use crate::airflow::client::request::ApiRequest;
use crate::airflow::client::response::Operation;
use crate::airflow::model::Timestamp;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetEventLogsParams {
    pub page: PageParams,
    pub dag_id: Option<String>,
    pub task_id: Option<String>,
    pub run_id: Option<String>,
    pub map_index: Option<i64>,
    pub try_number: Option<i64>,
    pub owner: Option<String>,
    pub event: Option<String>,
    pub excluded_events: Vec<String>,
    pub included_events: Vec<String>,
    pub before: Option<Timestamp>,
    pub after: Option<Timestamp>,
}

pub fn get_event_logs(
    params: &GetEventLogsParams,
) -> Operation<EventLogCollectionResponse, ApiError> {
    let request = params
        .page
        .apply(ApiRequest::new(Method::GET, API_PATH).path("eventLogs"))
        .query("dag_id", &params.dag_id)
        .query("task_id", &params.task_id)
        .query("run_id", &params.run_id)
        .query("map_index", &params.map_index)
        .query("try_number", &params.try_number)
        .query("owner", &params.owner)
        .query("event", &params.event)
        .query("excluded_events", &params.excluded_events)
        .query("included_events", &params.included_events)
        .query("before", &params.before)
        .query("after", &params.after);
    Operation::new(request, LIST)
}

pub fn get_event_log(event_log_id: i64) -> Operation<EventLogResponse, ApiError> {
    let request = ApiRequest::new(Method::GET, API_PATH)
        .path("eventLogs")
        .param(event_log_id);
    Operation::new(request, GET)
}
