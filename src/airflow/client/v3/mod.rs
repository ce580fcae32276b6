//! Endpoints of the Airflow 3.x REST API, served under `/api/v2`.
//!
//! Same shape as [`v2`](super::v2): one function per endpoint returning an
//! [`Operation`](super::Operation). Documented error statuses decode into
//! [`ApiError`], which is a validation error for 422 and an HTTP exception
//! otherwise.

pub mod model;

pub mod asset;
pub mod backfill;
pub mod connection;
pub mod dag;
pub mod dagrun;
pub mod eventlog;
pub mod importerror;
pub mod monitoring;
pub mod pool;
pub mod task;
pub mod taskinstance;
pub mod variable;
pub mod xcom;

pub use model::ApiError;

use super::request::ApiRequest;
use super::response::{Expect, StatusMap};
use crate::airflow::config::AirflowVersion;

const API_PATH: &str = AirflowVersion::V3.api_path();

const LIST: StatusMap = &[
    (200, Expect::Body),
    (401, Expect::Error),
    (403, Expect::Error),
    (422, Expect::Error),
];
const GET: StatusMap = &[
    (200, Expect::Body),
    (401, Expect::Error),
    (403, Expect::Error),
    (404, Expect::Error),
    (422, Expect::Error),
];
const CREATE: StatusMap = &[
    (201, Expect::Body),
    (401, Expect::Error),
    (403, Expect::Error),
    (409, Expect::Error),
    (422, Expect::Error),
];
const TRIGGER: StatusMap = &[
    (200, Expect::Body),
    (400, Expect::Error),
    (401, Expect::Error),
    (403, Expect::Error),
    (404, Expect::Error),
    (409, Expect::Error),
    (422, Expect::Error),
];
const UPDATE: StatusMap = &[
    (200, Expect::Body),
    (400, Expect::Error),
    (401, Expect::Error),
    (403, Expect::Error),
    (404, Expect::Error),
    (422, Expect::Error),
];
const ACTION: StatusMap = &[
    (200, Expect::Body),
    (401, Expect::Error),
    (403, Expect::Error),
    (404, Expect::Error),
    (409, Expect::Error),
    (422, Expect::Error),
];
const DELETE: StatusMap = &[
    (204, Expect::Empty),
    (400, Expect::Error),
    (401, Expect::Error),
    (403, Expect::Error),
    (404, Expect::Error),
    (422, Expect::Error),
];
const PUBLIC: StatusMap = &[(200, Expect::Body)];

/// Paging and ordering shared by the list endpoints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub order_by: Option<String>,
}

impl PageParams {
    fn apply(&self, request: ApiRequest) -> ApiRequest {
        request
            .query("limit", &self.limit)
            .query("offset", &self.offset)
            .query("order_by", &self.order_by)
    }
}
