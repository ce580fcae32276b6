use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use reqwest::header::{HeaderMap, COOKIE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use super::error::TransportError;
use crate::airflow::config::{expand_env_vars, AirflowAuth, AirflowConfig, TokenCmd};

/// A fully built request, ready to hand to a transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

/// What a transport hands back: status, headers and the undecoded body.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub content: Vec<u8>,
}

impl RawResponse {
    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_slice(&self.content)
    }
}

/// Non-blocking HTTP transport. Authentication, timeouts and connection pooling are
/// the transport's business.
#[async_trait]
pub trait AsyncTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, TransportError>;
}

/// Blocking counterpart of [`AsyncTransport`].
pub trait BlockingTransport: Send + Sync {
    fn send(&self, request: HttpRequest) -> Result<RawResponse, TransportError>;
}

#[async_trait]
impl AsyncTransport for reqwest::Client {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, TransportError> {
        execute_async(async_builder(self, request)).await
    }
}

impl BlockingTransport for reqwest::blocking::Client {
    fn send(&self, request: HttpRequest) -> Result<RawResponse, TransportError> {
        execute_blocking(blocking_builder(self, request))
    }
}

fn async_builder(client: &reqwest::Client, request: HttpRequest) -> reqwest::RequestBuilder {
    let builder = client
        .request(request.method, request.url)
        .headers(request.headers);
    match request.body {
        Some(body) => builder.body(body),
        None => builder,
    }
}

async fn execute_async(builder: reqwest::RequestBuilder) -> Result<RawResponse, TransportError> {
    let response = builder.send().await?;
    let status = response.status();
    let headers = response.headers().clone();
    let content = response.bytes().await?.to_vec();
    Ok(RawResponse {
        status,
        headers,
        content,
    })
}

fn blocking_builder(
    client: &reqwest::blocking::Client,
    request: HttpRequest,
) -> reqwest::blocking::RequestBuilder {
    let builder = client
        .request(request.method, request.url)
        .headers(request.headers);
    match request.body {
        Some(body) => builder.body(body),
        None => builder,
    }
}

fn execute_blocking(
    builder: reqwest::blocking::RequestBuilder,
) -> Result<RawResponse, TransportError> {
    let response = builder.send()?;
    let status = response.status();
    let headers = response.headers().clone();
    let content = response.bytes()?.to_vec();
    Ok(RawResponse {
        status,
        headers,
        content,
    })
}

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// reqwest transport that authenticates every request using the configured
/// [`AirflowAuth`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    auth: AirflowAuth,
}

impl ReqwestTransport {
    pub fn new(config: &AirflowConfig) -> Result<Self> {
        let mut client_builder = reqwest::Client::builder()
            .timeout(timeout(config))
            .use_rustls_tls();
        for proxy in proxies(config)? {
            client_builder = client_builder.proxy(proxy);
        }
        let client = client_builder.build()?;
        Ok(Self {
            client,
            auth: config.auth.clone(),
        })
    }
}

#[async_trait]
impl AsyncTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, TransportError> {
        let builder = async_builder(&self.client, request);
        let builder = match credential_async(&self.auth).await? {
            Credential::Basic { username, password } => builder.basic_auth(username, Some(password)),
            Credential::Bearer(token) => builder.bearer_auth(token),
            Credential::Cookie(cookie) => builder.header(COOKIE, format!("session={cookie}")),
        };
        execute_async(builder).await
    }
}

/// Blocking flavour of [`ReqwestTransport`].
#[derive(Debug, Clone)]
pub struct BlockingReqwestTransport {
    client: reqwest::blocking::Client,
    auth: AirflowAuth,
}

impl BlockingReqwestTransport {
    pub fn new(config: &AirflowConfig) -> Result<Self> {
        let mut client_builder = reqwest::blocking::Client::builder()
            .timeout(timeout(config))
            .use_rustls_tls();
        for proxy in proxies(config)? {
            client_builder = client_builder.proxy(proxy);
        }
        let client = client_builder.build()?;
        Ok(Self {
            client,
            auth: config.auth.clone(),
        })
    }
}

impl BlockingTransport for BlockingReqwestTransport {
    fn send(&self, request: HttpRequest) -> Result<RawResponse, TransportError> {
        let builder = blocking_builder(&self.client, request);
        let builder = match credential(&self.auth)? {
            Credential::Basic { username, password } => builder.basic_auth(username, Some(password)),
            Credential::Bearer(token) => builder.bearer_auth(token),
            Credential::Cookie(cookie) => builder.header(COOKIE, format!("session={cookie}")),
        };
        execute_blocking(builder)
    }
}

fn timeout(config: &AirflowConfig) -> Duration {
    Duration::from_secs(config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
}

fn proxies(config: &AirflowConfig) -> Result<Vec<reqwest::Proxy>> {
    let mut proxies = Vec::new();

    // Configure proxy if specified in config (takes priority)
    if let Some(proxy_url) = &config.proxy {
        let proxy_url = expand_env_vars(proxy_url)?;
        let proxy = reqwest::Proxy::all(&proxy_url)
            .with_context(|| format!("Invalid proxy URL: {proxy_url}"))?;
        info!("🔀 Using proxy from config: {proxy_url}");
        proxies.push(proxy);
        return Ok(proxies);
    }

    if let Ok(http_proxy) = std::env::var("HTTP_PROXY").or_else(|_| std::env::var("http_proxy")) {
        let proxy = reqwest::Proxy::http(&http_proxy)
            .with_context(|| format!("Invalid HTTP_PROXY: {http_proxy}"))?;
        info!("🔀 Using proxy from HTTP_PROXY: {http_proxy}");
        proxies.push(proxy);
    }
    if let Ok(https_proxy) =
        std::env::var("HTTPS_PROXY").or_else(|_| std::env::var("https_proxy"))
    {
        let proxy = reqwest::Proxy::https(&https_proxy)
            .with_context(|| format!("Invalid HTTPS_PROXY: {https_proxy}"))?;
        info!("🔀 Using proxy from HTTPS_PROXY: {https_proxy}");
        proxies.push(proxy);
    }
    Ok(proxies)
}

/// Credentials resolved for a single request.
#[derive(PartialEq)]
enum Credential {
    Basic { username: String, password: String },
    Bearer(String),
    Cookie(String),
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credential::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"***redacted***")
                .finish(),
            Credential::Bearer(_) => f.write_str("Bearer(***redacted***)"),
            Credential::Cookie(_) => f.write_str("Cookie(***redacted***)"),
        }
    }
}

/// Resolves `auth` into concrete credentials. Token helpers run on every request so
/// short-lived tokens stay fresh.
fn credential(auth: &AirflowAuth) -> Result<Credential> {
    match auth {
        AirflowAuth::Basic(auth) => {
            let username = expand_env_vars(&auth.username)?;
            let password = expand_env_vars(&auth.password)?;
            debug!("🔑 Basic Auth: {username}");
            Ok(Credential::Basic { username, password })
        }
        AirflowAuth::Token(token) => {
            if let Some(cmd) = &token.cmd {
                debug!("🔑 Token Auth: {cmd:?}");
                return run_token_helper(cmd).map(Credential::Bearer);
            }
            if let Some(token) = &token.token {
                debug!("🔑 Token Auth");
                return expand_env_vars(token.trim()).map(Credential::Bearer);
            }
            Err(anyhow::anyhow!("Token not found"))
        }
        AirflowAuth::Session(session) => {
            debug!("🔑 Session cookie auth");
            expand_env_vars(&session.cookie).map(Credential::Cookie)
        }
    }
}

/// Async flavour of [`credential`]: the token helper runs on `tokio::process` so
/// it does not stall the executor.
async fn credential_async(auth: &AirflowAuth) -> Result<Credential> {
    match auth {
        AirflowAuth::Token(TokenCmd { cmd: Some(cmd), .. }) => {
            debug!("🔑 Token Auth: {cmd:?}");
            let output = tokio::process::Command::new("sh")
                .arg("-c")
                .arg(cmd)
                .output()
                .await
                .context("Failed to run token helper command")?;
            token_from_output(&output).map(Credential::Bearer)
        }
        _ => credential(auth),
    }
}

fn run_token_helper(cmd: &str) -> Result<String> {
    let output = std::process::Command::new("sh")
        .arg("-c")
        .arg(cmd)
        .output()
        .context("Failed to run token helper command")?;
    token_from_output(&output)
}

fn token_from_output(output: &std::process::Output) -> Result<String> {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        return Err(anyhow::anyhow!(
            "Token helper command failed with exit code {:?}\nstdout: {}\nstderr: {}",
            output.status.code(),
            stdout,
            stderr
        ));
    }

    Ok(std::str::from_utf8(&output.stdout)
        .context("Token helper returned invalid UTF-8")?
        .trim()
        .replace('"', ""))
}
