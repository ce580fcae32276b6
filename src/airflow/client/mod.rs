pub mod base;
pub mod error;
pub mod request;
pub mod response;
pub mod v2;
pub mod v3;

use anyhow::Context;
use log::debug;
use serde::de::DeserializeOwned;
use url::Url;

pub use base::{
    AsyncTransport, BlockingReqwestTransport, BlockingTransport, HttpRequest, RawResponse,
    ReqwestTransport,
};
pub use error::{ClientError, Result, TransportError};
pub use request::{ApiRequest, QueryValue};
pub use response::{ErrorModel, Expect, Operation, Response, StatusMap};

use crate::airflow::config::AirflowConfig;

/// Executes [`Operation`]s over a non-blocking transport.
#[derive(Debug, Clone)]
pub struct AsyncClient<T = ReqwestTransport> {
    base_url: Url,
    raise_on_unexpected_status: bool,
    transport: T,
}

impl AsyncClient<ReqwestTransport> {
    /// Builds an authenticated client for `config`.
    pub fn from_config(config: &AirflowConfig) -> anyhow::Result<Self> {
        let base_url = Url::parse(&config.endpoint)
            .with_context(|| format!("Invalid endpoint URL: {}", config.endpoint))?;
        let transport = ReqwestTransport::new(config)?;
        debug!(
            "Client for '{}' ({}, {})",
            config.name,
            config.version,
            config.version.api_path()
        );
        Ok(Self::new(base_url, transport)
            .with_raise_on_unexpected_status(config.raise_on_unexpected_status))
    }
}

impl<T: AsyncTransport> AsyncClient<T> {
    pub fn new(base_url: Url, transport: T) -> Self {
        Self {
            base_url,
            raise_on_unexpected_status: false,
            transport,
        }
    }

    #[must_use]
    pub fn with_raise_on_unexpected_status(mut self, raise: bool) -> Self {
        self.raise_on_unexpected_status = raise;
        self
    }

    pub fn raise_on_unexpected_status(&self) -> bool {
        self.raise_on_unexpected_status
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends the operation and interprets the response.
    ///
    /// Returns `Ok(None)` for undocumented statuses unless the client raises on them.
    pub async fn execute<R, E>(&self, operation: Operation<R, E>) -> Result<Option<Response<R, E>>>
    where
        R: DeserializeOwned,
        E: ErrorModel,
    {
        let request = operation.prepare(&self.base_url)?;
        let raw = self
            .transport
            .send(request)
            .await
            .map_err(ClientError::Transport)?;
        operation.interpret(raw, self.raise_on_unexpected_status)
    }
}

/// Executes [`Operation`]s over a blocking transport.
#[derive(Debug, Clone)]
pub struct BlockingClient<T = BlockingReqwestTransport> {
    base_url: Url,
    raise_on_unexpected_status: bool,
    transport: T,
}

impl BlockingClient<BlockingReqwestTransport> {
    /// Builds an authenticated client for `config`.
    pub fn from_config(config: &AirflowConfig) -> anyhow::Result<Self> {
        let base_url = Url::parse(&config.endpoint)
            .with_context(|| format!("Invalid endpoint URL: {}", config.endpoint))?;
        let transport = BlockingReqwestTransport::new(config)?;
        debug!(
            "Blocking client for '{}' ({}, {})",
            config.name,
            config.version,
            config.version.api_path()
        );
        Ok(Self::new(base_url, transport)
            .with_raise_on_unexpected_status(config.raise_on_unexpected_status))
    }
}

impl<T: BlockingTransport> BlockingClient<T> {
    pub fn new(base_url: Url, transport: T) -> Self {
        Self {
            base_url,
            raise_on_unexpected_status: false,
            transport,
        }
    }

    #[must_use]
    pub fn with_raise_on_unexpected_status(mut self, raise: bool) -> Self {
        self.raise_on_unexpected_status = raise;
        self
    }

    pub fn raise_on_unexpected_status(&self) -> bool {
        self.raise_on_unexpected_status
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Blocking twin of [`AsyncClient::execute`].
    pub fn execute<R, E>(&self, operation: Operation<R, E>) -> Result<Option<Response<R, E>>>
    where
        R: DeserializeOwned,
        E: ErrorModel,
    {
        let request = operation.prepare(&self.base_url)?;
        let raw = self
            .transport
            .send(request)
            .map_err(ClientError::Transport)?;
        operation.interpret(raw, self.raise_on_unexpected_status)
    }
}
