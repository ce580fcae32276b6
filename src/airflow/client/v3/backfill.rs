use reqwest::Method;

use super::model::backfill::{
    BackfillCollectionResponse, BackfillPostBody, BackfillResponse,
    DryRunBackfillCollectionResponse,
};
use super::{ApiError, PageParams, API_PATH, ACTION, GET, LIST, TRIGGER};
use crate::airflow::client::request::ApiRequest;
use crate::airflow::client::response::Operation;

/// Backfills of one DAG. `dag_id` is required by Airflow.
pub fn list_backfills(
    dag_id: &str,
    page: &PageParams,
) -> Operation<BackfillCollectionResponse, ApiError> {
    let request = page
        .apply(ApiRequest::new(Method::GET, API_PATH).path("backfills"))
        .query("dag_id", dag_id);
    Operation::new(request, LIST)
}

pub fn get_backfill(backfill_id: i64) -> Operation<BackfillResponse, ApiError> {
    let request = ApiRequest::new(Method::GET, API_PATH)
        .path("backfills")
        .param(backfill_id);
    Operation::new(request, GET)
}

pub fn create_backfill(body: &BackfillPostBody) -> Operation<BackfillResponse, ApiError> {
    let request = ApiRequest::new(Method::POST, API_PATH)
        .path("backfills")
        .json(body);
    Operation::new(request, TRIGGER)
}

/// Logical dates the backfill would create runs for, without creating them.
pub fn create_backfill_dry_run(
    body: &BackfillPostBody,
) -> Operation<DryRunBackfillCollectionResponse, ApiError> {
    let request = ApiRequest::new(Method::POST, API_PATH)
        .path("backfills/dry_run")
        .json(body);
    Operation::new(request, TRIGGER)
}

fn backfill_action(backfill_id: i64, action: &str) -> Operation<BackfillResponse, ApiError> {
    let request = ApiRequest::new(Method::PUT, API_PATH)
        .path("backfills")
        .param(backfill_id)
        .path(action);
    Operation::new(request, ACTION)
}

pub fn pause_backfill(backfill_id: i64) -> Operation<BackfillResponse, ApiError> {
    backfill_action(backfill_id, "pause")
}

pub fn unpause_backfill(backfill_id: i64) -> Operation<BackfillResponse, ApiError> {
    backfill_action(backfill_id, "unpause")
}

pub fn cancel_backfill(backfill_id: i64) -> Operation<BackfillResponse, ApiError> {
    backfill_action(backfill_id, "cancel")
}
