use reqwest::Method;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::model::dag::{
    DagCollectionResponse, DagDetailsResponse, DagPatchBody, DagResponse,
    DagSourceResponse, DagTagCollectionResponse,
};
use super::model::dagrun::DagRunState;
use super::{ApiError, PageParams, API_PATH, GET, LIST, UPDATE};
use crate::airflow::client::request::{query_via_display, ApiRequest};
use crate::airflow::client::response::Operation;

/// How `tags` filters combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TagsMatchMode {
    Any,
    All,
}

query_via_display!(TagsMatchMode);

/// Query of `GET /dags`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetDagsParams {
    pub page: PageParams,
    pub tags: Vec<String>,
    pub tags_match_mode: Option<TagsMatchMode>,
    pub owners: Vec<String>,
    pub dag_id_pattern: Option<String>,
    pub dag_display_name_pattern: Option<String>,
    pub exclude_stale: Option<bool>,
    pub paused: Option<bool>,
    pub last_dag_run_state: Option<DagRunState>,
}

pub fn get_dags(params: &GetDagsParams) -> Operation<DagCollectionResponse, ApiError> {
    let request = params
        .page
        .apply(ApiRequest::new(Method::GET, API_PATH).path("dags"))
        .query("tags", &params.tags)
        .query("tags_match_mode", &params.tags_match_mode)
        .query("owners", &params.owners)
        .query("dag_id_pattern", &params.dag_id_pattern)
        .query("dag_display_name_pattern", &params.dag_display_name_pattern)
        .query("exclude_stale", &params.exclude_stale)
        .query("paused", &params.paused)
        .query("last_dag_run_state", &params.last_dag_run_state);
    Operation::new(request, LIST)
}

/// Query of `PATCH /dags`. Without `dag_id_pattern` every DAG matches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchDagsParams {
    pub update_mask: Vec<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub tags: Vec<String>,
    pub tags_match_mode: Option<TagsMatchMode>,
    pub owners: Vec<String>,
    pub dag_id_pattern: Option<String>,
    pub exclude_stale: Option<bool>,
    pub paused: Option<bool>,
}

pub fn patch_dags(
    params: &PatchDagsParams,
    body: &DagPatchBody,
) -> Operation<DagCollectionResponse, ApiError> {
    let request = ApiRequest::new(Method::PATCH, API_PATH)
        .path("dags")
        .query("update_mask", &params.update_mask)
        .query("limit", &params.limit)
        .query("offset", &params.offset)
        .query("tags", &params.tags)
        .query("tags_match_mode", &params.tags_match_mode)
        .query("owners", &params.owners)
        .query("dag_id_pattern", &params.dag_id_pattern)
        .query("exclude_stale", &params.exclude_stale)
        .query("paused", &params.paused)
        .json(body);
    Operation::new(request, UPDATE)
}

pub fn get_dag(dag_id: &str) -> Operation<DagResponse, ApiError> {
    let request = ApiRequest::new(Method::GET, API_PATH)
        .path("dags")
        .param(dag_id);
    Operation::new(request, GET)
}

pub fn patch_dag(
    dag_id: &str,
    body: &DagPatchBody,
    update_mask: &[String],
) -> Operation<DagResponse, ApiError> {
    let request = ApiRequest::new(Method::PATCH, API_PATH)
        .path("dags")
        .param(dag_id)
        .query("update_mask", update_mask)
        .json(body);
    Operation::new(request, UPDATE)
}

/// Deletes the DAG and its metadata. Airflow answers 200 with an unspecified body.
pub fn delete_dag(dag_id: &str) -> Operation<serde_json::Value, ApiError> {
    let request = ApiRequest::new(Method::DELETE, API_PATH)
        .path("dags")
        .param(dag_id);
    Operation::new(request, UPDATE)
}

pub fn get_dag_details(dag_id: &str) -> Operation<DagDetailsResponse, ApiError> {
    let request = ApiRequest::new(Method::GET, API_PATH)
        .path("dags")
        .param(dag_id)
        .path("details");
    Operation::new(request, GET)
}

pub fn get_dag_tags(
    page: &PageParams,
    tag_name_pattern: Option<&str>,
) -> Operation<DagTagCollectionResponse, ApiError> {
    let request = page
        .apply(ApiRequest::new(Method::GET, API_PATH).path("dagTags"))
        .query("tag_name_pattern", &tag_name_pattern);
    Operation::new(request, LIST)
}

/// Source code of a DAG, optionally of an older version.
pub fn get_dag_source(
    dag_id: &str,
    version_number: Option<i64>,
) -> Operation<DagSourceResponse, ApiError> {
    let request = ApiRequest::new(Method::GET, API_PATH)
        .path("dagSources")
        .param(dag_id)
        .query("version_number", &version_number)
        .accept("application/json");
    Operation::new(request, GET)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airflow::client::testing::{async_client, blocking_client};
    use crate::airflow::client::v3::model::error::ExceptionDetail;
    use mockito::Matcher;
    use serde_json::json;

    #[tokio::test]
    async fn list_with_tag_filters() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v2/dags")
            .match_query(Matcher::Exact(
                "limit=10&tags=a&tags=b&tags_match_mode=all&last_dag_run_state=failed".to_string(),
            ))
            .with_status(200)
            .with_body(r#"{"dags": [{"dag_id": "x", "tags": [], "owners": ["airflow"]}], "total_entries": 1}"#)
            .create_async()
            .await;

        let params = GetDagsParams {
            page: PageParams {
                limit: Some(10),
                ..PageParams::default()
            },
            tags: vec!["a".to_string(), "b".to_string()],
            tags_match_mode: Some(TagsMatchMode::All),
            last_dag_run_state: Some(DagRunState::Failed),
            ..GetDagsParams::default()
        };
        let dags = async_client(&server)
            .execute(get_dags(&params))
            .await
            .unwrap()
            .unwrap()
            .into_body()
            .unwrap();

        mock.assert_async().await;
        assert_eq!(dags.dags[0].dag_id, "x");
        assert_eq!(dags.dags[0].owners, vec!["airflow".to_string()]);
    }

    #[test]
    fn validation_errors_decode_on_422() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/api/v2/dags")
            .match_query(Matcher::Any)
            .with_status(422)
            .with_body(
                r#"{"detail": [{"loc": ["query", "limit"], "msg": "Input should be a valid integer", "type": "int_parsing"}]}"#,
            )
            .create();

        let response = blocking_client(&server)
            .execute(get_dags(&GetDagsParams::default()))
            .unwrap()
            .unwrap();
        let error = response.error().unwrap();
        assert!(matches!(error, ApiError::Validation(_)));
        assert_eq!(error.message(), Some("Input should be a valid integer"));
    }

    #[test]
    fn unauthorized_is_an_http_exception() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/api/v2/dags/etl")
            .with_status(401)
            .with_body(r#"{"detail": "Not authenticated"}"#)
            .create();

        let response = blocking_client(&server)
            .execute(get_dag("etl"))
            .unwrap()
            .unwrap();
        let Some(ApiError::Http(error)) = response.error() else {
            panic!("expected an HTTP exception");
        };
        assert_eq!(
            error.detail,
            ExceptionDetail::Message("Not authenticated".to_string())
        );
    }

    #[test]
    fn delete_returns_arbitrary_json() {
        let mut server = mockito::Server::new();
        server
            .mock("DELETE", "/api/v2/dags/etl")
            .with_status(200)
            .with_body("null")
            .create();

        let response = blocking_client(&server)
            .execute(delete_dag("etl"))
            .unwrap()
            .unwrap();
        assert_eq!(response.into_body(), Some(json!(null)));
    }

    #[test]
    fn pause_many() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("PATCH", "/api/v2/dags")
            .match_query(Matcher::Exact("dag_id_pattern=etl_%25".to_string()))
            .match_body(Matcher::Json(json!({"is_paused": true})))
            .with_status(200)
            .with_body(r#"{"dags": [], "total_entries": 0}"#)
            .create();

        let params = PatchDagsParams {
            dag_id_pattern: Some("etl_%".to_string()),
            ..PatchDagsParams::default()
        };
        let body = DagPatchBody {
            is_paused: true,
            ..DagPatchBody::default()
        };
        blocking_client(&server)
            .execute(patch_dags(&params, &body))
            .unwrap()
            .unwrap();
        mock.assert();
    }

    #[test]
    fn source_of_a_version() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/v2/dagSources/etl")
            .match_query("version_number=2")
            .with_status(200)
            .with_body(r#"{"content": "print(1)", "dag_id": "etl", "version_number": 2}"#)
            .create();

        let source = blocking_client(&server)
            .execute(get_dag_source("etl", Some(2)))
            .unwrap()
            .unwrap()
            .into_body()
            .unwrap();
        mock.assert();
        assert_eq!(source.content.as_deref(), Some("print(1)"));
    }
}
