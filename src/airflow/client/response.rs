use std::marker::PhantomData;

use log::{debug, warn};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use super::base::{HttpRequest, RawResponse};
use super::error::{ClientError, Result};
use super::request::ApiRequest;

/// What a documented status code carries in its body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    /// The endpoint's success model.
    Body,
    /// Nothing (204).
    Empty,
    /// The API's error model.
    Error,
}

/// Documented statuses of an endpoint. Anything else is unexpected.
pub type StatusMap = &'static [(u16, Expect)];

/// Outcome of a call whose status the endpoint documents.
#[derive(Debug, Clone, PartialEq)]
pub enum Response<T, E> {
    Success { status: StatusCode, body: T },
    NoContent { status: StatusCode },
    Failure { status: StatusCode, error: E },
}

impl<T, E> Response<T, E> {
    pub fn status(&self) -> StatusCode {
        match self {
            Response::Success { status, .. }
            | Response::NoContent { status }
            | Response::Failure { status, .. } => *status,
        }
    }

    pub fn is_success(&self) -> bool {
        !matches!(self, Response::Failure { .. })
    }

    /// The decoded success body, if any.
    pub fn body(&self) -> Option<&T> {
        match self {
            Response::Success { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn into_body(self) -> Option<T> {
        match self {
            Response::Success { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            Response::Failure { error, .. } => Some(error),
            _ => None,
        }
    }

    /// `Ok(Some(body))` on success, `Ok(None)` on no-content, `Err` with the
    /// documented error otherwise.
    pub fn into_result(self) -> std::result::Result<Option<T>, E> {
        match self {
            Response::Success { body, .. } => Ok(Some(body)),
            Response::NoContent { .. } => Ok(None),
            Response::Failure { error, .. } => Err(error),
        }
    }
}

/// Error body of an API version. The status picks the schema where a version has
/// more than one.
pub trait ErrorModel: Sized {
    fn decode(status: StatusCode, content: &[u8]) -> serde_json::Result<Self>;
}

/// One endpoint call: the request to send plus the statuses it documents. Build one
/// with an endpoint function and hand it to `AsyncClient::execute` or
/// `BlockingClient::execute`.
#[derive(Debug)]
pub struct Operation<T, E> {
    request: ApiRequest,
    statuses: StatusMap,
    marker: PhantomData<fn() -> (T, E)>,
}

impl<T, E> Operation<T, E>
where
    T: DeserializeOwned,
    E: ErrorModel,
{
    pub fn new(request: ApiRequest, statuses: StatusMap) -> Self {
        Self {
            request,
            statuses,
            marker: PhantomData,
        }
    }

    pub fn request(&self) -> &ApiRequest {
        &self.request
    }

    pub fn statuses(&self) -> StatusMap {
        self.statuses
    }

    pub fn prepare(&self, base: &Url) -> Result<HttpRequest> {
        self.request.prepare(base)
    }

    /// Maps a raw response onto the endpoint's documented statuses.
    ///
    /// Undocumented statuses raise [`ClientError::UnexpectedStatus`] when
    /// `raise_on_unexpected_status` is set and yield `Ok(None)` otherwise.
    pub fn interpret(
        &self,
        raw: RawResponse,
        raise_on_unexpected_status: bool,
    ) -> Result<Option<Response<T, E>>> {
        let status = raw.status;
        debug!("Response status: {status}");

        let Some(&(_, expect)) = self
            .statuses
            .iter()
            .find(|(code, _)| *code == status.as_u16())
        else {
            if raise_on_unexpected_status {
                return Err(ClientError::UnexpectedStatus {
                    status,
                    content: raw.content,
                });
            }
            warn!(
                "Undocumented status {status} for {} {:?}",
                self.request.method(),
                self.request.segments()
            );
            return Ok(None);
        };

        let response = match expect {
            Expect::Body => Response::Success {
                status,
                body: serde_json::from_slice(&raw.content)
                    .map_err(|source| ClientError::Decode { status, source })?,
            },
            Expect::Empty => Response::NoContent { status },
            Expect::Error => Response::Failure {
                status,
                error: E::decode(status, &raw.content)
                    .map_err(|source| ClientError::Decode { status, source })?,
            },
        };
        Ok(Some(response))
    }
}
