use reqwest::Method;

use super::model::asset::{
    AssetCollectionResponse, AssetEventCollectionResponse, AssetEventResponse, AssetResponse,
    CreateAssetEventsBody,
};
use super::{ApiError, PageParams, API_PATH, GET, LIST};
use crate::airflow::client::request::ApiRequest;
use crate::airflow::client::response::Operation;
use crate::airflow::model::Timestamp;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetAssetsParams {
    pub page: PageParams,
    pub name_pattern: Option<String>,
    pub uri_pattern: Option<String>,
    pub dag_ids: Vec<String>,
    pub only_active: Option<bool>,
}

pub fn get_assets(params: &GetAssetsParams) -> Operation<AssetCollectionResponse, ApiError> {
    let request = params
        .page
        .apply(ApiRequest::new(Method::GET, API_PATH).path("assets"))
        .query("name_pattern", &params.name_pattern)
        .query("uri_pattern", &params.uri_pattern)
        .query("dag_ids", &params.dag_ids)
        .query("only_active", &params.only_active);
    Operation::new(request, LIST)
}

pub fn get_asset(asset_id: i64) -> Operation<AssetResponse, ApiError> {
    let request = ApiRequest::new(Method::GET, API_PATH)
        .path("assets")
        .param(asset_id);
    Operation::new(request, GET)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetAssetEventsParams {
    pub page: PageParams,
    pub asset_id: Option<i64>,
    pub source_dag_id: Option<String>,
    pub source_task_id: Option<String>,
    pub source_run_id: Option<String>,
    pub source_map_index: Option<i64>,
    pub timestamp_gte: Option<Timestamp>,
    pub timestamp_lte: Option<Timestamp>,
}

pub fn get_asset_events(
    params: &GetAssetEventsParams,
) -> Operation<AssetEventCollectionResponse, ApiError> {
    let request = params
        .page
        .apply(ApiRequest::new(Method::GET, API_PATH).path("assets/events"))
        .query("asset_id", &params.asset_id)
        .query("source_dag_id", &params.source_dag_id)
        .query("source_task_id", &params.source_task_id)
        .query("source_run_id", &params.source_run_id)
        .query("source_map_index", &params.source_map_index)
        .query("timestamp_gte", &params.timestamp_gte)
        .query("timestamp_lte", &params.timestamp_lte);
    Operation::new(request, GET)
}

/// Records an asset event by hand, which may trigger DAGs scheduled on the asset.
pub fn create_asset_event(body: &CreateAssetEventsBody) -> Operation<AssetEventResponse, ApiError> {
    let request = ApiRequest::new(Method::POST, API_PATH)
        .path("assets/events")
        .json(body);
    Operation::new(request, GET)
}
