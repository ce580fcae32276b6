use reqwest::StatusCode;
use thiserror::Error;

/// Error raised by a transport. It is kept as-is so callers can downcast it back to
/// the concrete type (e.g. `reqwest::Error` to check `is_timeout()`).
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a status the endpoint does not document, and the
    /// client was configured to raise on it.
    #[error("unexpected status {status}: {}", String::from_utf8_lossy(.content))]
    UnexpectedStatus { status: StatusCode, content: Vec<u8> },

    #[error("transport error: {0}")]
    Transport(#[source] TransportError),

    /// A documented status came back with a body that does not match its schema.
    #[error("failed to decode {status} response: {source}")]
    Decode {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The endpoint URL cannot take a path (e.g. `mailto:` or `data:` URLs).
    #[error("endpoint URL cannot have path segments: {0}")]
    CannotBeABase(url::Url),

    /// A path parameter that URL normalization would drop or collapse: empty,
    /// `.` or `..`.
    #[error("invalid path parameter {0:?}")]
    InvalidPathParam(String),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::UnexpectedStatus { status, .. } | ClientError::Decode { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

pub type Result<T, E = ClientError> = std::result::Result<T, E>;
