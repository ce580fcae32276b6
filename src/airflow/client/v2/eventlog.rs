use reqwest::Method;

use super::model::eventlog::{EventLog, EventLogCollection};
use super::{ApiError, PageParams, API_PATH, GET, LIST};
use crate::airflow::client::request::ApiRequest;
use crate::airflow::client::response::Operation;
use crate::airflow::model::Timestamp;

/// Filters of `GET /eventLogs`. `included_events` and `excluded_events` are
/// comma-separated event names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetEventLogsParams {
    pub page: PageParams,
    pub dag_id: Option<String>,
    pub task_id: Option<String>,
    pub run_id: Option<String>,
    pub map_index: Option<i64>,
    pub try_number: Option<i64>,
    pub event: Option<String>,
    pub owner: Option<String>,
    pub before: Option<Timestamp>,
    pub after: Option<Timestamp>,
    pub included_events: Option<String>,
    pub excluded_events: Option<String>,
}

pub fn get_event_logs(params: &GetEventLogsParams) -> Operation<EventLogCollection, ApiError> {
    let request = params
        .page
        .apply(ApiRequest::new(Method::GET, API_PATH).path("eventLogs"))
        .query("dag_id", &params.dag_id)
        .query("task_id", &params.task_id)
        .query("run_id", &params.run_id)
        .query("map_index", &params.map_index)
        .query("try_number", &params.try_number)
        .query("event", &params.event)
        .query("owner", &params.owner)
        .query("before", &params.before)
        .query("after", &params.after)
        .query("included_events", &params.included_events)
        .query("excluded_events", &params.excluded_events);
    Operation::new(request, LIST)
}

pub fn get_event_log(event_log_id: i64) -> Operation<EventLog, ApiError> {
    let request = ApiRequest::new(Method::GET, API_PATH)
        .path("eventLogs")
        .param(event_log_id);
    Operation::new(request, GET)
}
