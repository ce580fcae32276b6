use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use super::base::HttpRequest;
use super::error::{ClientError, Result};
use crate::airflow::model::{Maybe, Timestamp};

/// Transport-independent description of an API call: method, path segments,
/// query pairs, headers and an optional JSON body.
#[derive(Debug)]
pub struct ApiRequest {
    method: Method,
    segments: Vec<String>,
    query: Vec<(String, String)>,
    headers: HeaderMap,
    body: Option<serde_json::Result<Value>>,
}

impl ApiRequest {
    /// Starts a request below `api_path` (e.g. `api/v1`).
    pub fn new(method: Method, api_path: &str) -> Self {
        Self {
            method,
            segments: split_literal(api_path),
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Appends fixed path segments. Slashes separate segments.
    #[must_use]
    pub fn path(mut self, literal: &str) -> Self {
        self.segments.extend(split_literal(literal));
        self
    }

    /// Appends one caller-supplied path segment. Every reserved character, `/`
    /// included, ends up percent-encoded. Empty, `.` and `..` values are rejected
    /// by [`ApiRequest::prepare`].
    #[must_use]
    pub fn param(mut self, value: impl ToString) -> Self {
        self.segments.push(value.to_string());
        self
    }

    /// Adds `key` to the query string unless `value` is unset.
    #[must_use]
    pub fn query<Q: QueryValue + ?Sized>(mut self, key: &str, value: &Q) -> Self {
        value.append_to(key, &mut self.query);
        self
    }

    #[must_use]
    pub fn accept(mut self, media_type: &'static str) -> Self {
        self.headers
            .insert(ACCEPT, HeaderValue::from_static(media_type));
        self
    }

    /// Sets a JSON body. Encoding errors surface when the request is prepared.
    #[must_use]
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self.body = Some(serde_json::to_value(body));
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref().and_then(|body| body.as_ref().ok())
    }

    /// Resolves the request against `base` (the server endpoint).
    pub fn prepare(&self, base: &Url) -> Result<HttpRequest> {
        if let Some(segment) = self
            .segments
            .iter()
            .find(|segment| matches!(segment.as_str(), "" | "." | ".."))
        {
            return Err(ClientError::InvalidPathParam(segment.clone()));
        }

        let mut url = base.clone();
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|()| ClientError::CannotBeABase(base.clone()))?
            .pop_if_empty()
            .extend(&self.segments);
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }

        let body = match &self.body {
            Some(Ok(value)) => Some(serde_json::to_vec(value).map_err(ClientError::Encode)?),
            Some(Err(e)) => {
                return Err(ClientError::Encode(serde::ser::Error::custom(e.to_string())))
            }
            None => None,
        };

        debug!("🔗 Request: {} {url}", self.method);
        Ok(HttpRequest {
            method: self.method.clone(),
            url,
            headers: self.headers.clone(),
            body,
        })
    }
}

fn split_literal(literal: &str) -> Vec<String> {
    literal
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Something that can be written into a query string. Unset values write nothing;
/// lists repeat the key once per item.
pub trait QueryValue {
    fn append_to(&self, key: &str, pairs: &mut Vec<(String, String)>);
}

impl<T: QueryValue + ?Sized> QueryValue for &T {
    fn append_to(&self, key: &str, pairs: &mut Vec<(String, String)>) {
        (**self).append_to(key, pairs);
    }
}

impl<T: QueryValue> QueryValue for Option<T> {
    fn append_to(&self, key: &str, pairs: &mut Vec<(String, String)>) {
        if let Some(value) = self {
            value.append_to(key, pairs);
        }
    }
}

/// Query strings have no null, so `Null` is dropped like `Absent`.
impl<T: QueryValue> QueryValue for Maybe<T> {
    fn append_to(&self, key: &str, pairs: &mut Vec<(String, String)>) {
        if let Maybe::Present(value) = self {
            value.append_to(key, pairs);
        }
    }
}

impl<T: QueryValue> QueryValue for [T] {
    fn append_to(&self, key: &str, pairs: &mut Vec<(String, String)>) {
        for value in self {
            value.append_to(key, pairs);
        }
    }
}

impl<T: QueryValue> QueryValue for Vec<T> {
    fn append_to(&self, key: &str, pairs: &mut Vec<(String, String)>) {
        self.as_slice().append_to(key, pairs);
    }
}

/// Implements [`QueryValue`] through `Display`.
macro_rules! query_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::airflow::client::request::QueryValue for $ty {
                fn append_to(&self, key: &str, pairs: &mut Vec<(String, String)>) {
                    pairs.push((key.to_owned(), self.to_string()));
                }
            }
        )*
    };
}

pub(crate) use query_via_display;

query_via_display!(bool, i32, i64, u16, u32, u64, f64, str, String, Timestamp);
