use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Default location of the client configuration: `<config_dir>/flowrs/client.toml`.
pub static CONFIG_FILE: LazyLock<PathBuf> = LazyLock::new(|| {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("flowrs")
        .join("client.toml")
});

/// Expands environment variables in a string value.
/// Supports ${VAR} and $VAR syntax.
pub fn expand_env_vars(value: &str) -> Result<String> {
    shellexpand::env(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| anyhow::anyhow!("Failed to expand environment variable in '{value}': {e}"))
}

/// Major Airflow version a server runs. Each one serves a different REST API.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
pub enum AirflowVersion {
    #[default]
    V2,
    V3,
}

impl AirflowVersion {
    pub const fn api_path(self) -> &'static str {
        match self {
            AirflowVersion::V2 => "api/v1",
            AirflowVersion::V3 => "api/v2",
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct ConfigFile {
    pub servers: Option<Vec<AirflowConfig>>,
    pub active_server: Option<String>,
    #[serde(skip)]
    pub path: Option<PathBuf>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AirflowConfig {
    pub name: String,
    pub endpoint: String,
    pub auth: AirflowAuth,
    #[serde(default)]
    pub version: AirflowVersion,
    pub proxy: Option<String>,
    pub timeout_secs: Option<u64>,
    /// Fail with `ClientError::UnexpectedStatus` on statuses an endpoint does not
    /// document instead of returning `None`.
    #[serde(default)]
    pub raise_on_unexpected_status: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub enum AirflowAuth {
    Basic(BasicAuth),
    Token(TokenCmd),
    Session(SessionAuth),
}

#[derive(Deserialize, Serialize, Clone)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"***redacted***")
            .finish()
    }
}

#[derive(Deserialize, Serialize, Clone)]
pub struct TokenCmd {
    pub cmd: Option<String>,
    pub token: Option<String>,
}

impl std::fmt::Debug for TokenCmd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCmd")
            .field("cmd", &self.cmd)
            .field("token", &self.token.as_ref().map(|_| "***redacted***"))
            .finish()
    }
}

/// A browser session cookie, sent as `Cookie: session=<cookie>`.
#[derive(Deserialize, Serialize, Clone)]
pub struct SessionAuth {
    pub cookie: String,
}

impl std::fmt::Debug for SessionAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionAuth")
            .field("cookie", &"***redacted***")
            .finish()
    }
}

impl ConfigFile {
    /// Loads the configuration at `config_path`, falling back to [`CONFIG_FILE`].
    /// A missing file yields an empty configuration.
    pub fn from_file(config_path: Option<&Path>) -> Result<Self> {
        let path = config_path
            .filter(|p| p.exists())
            .map_or_else(
                || {
                    let default_path = CONFIG_FILE.to_path_buf();
                    info!("Using configuration path: {}", default_path.display());
                    default_path
                },
                Path::to_path_buf,
            );

        let toml_config = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()))
            }
        };
        let mut config = Self::from_str(&toml_config)?;
        config.path = Some(path);
        Ok(config)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(config: &str) -> Result<Self> {
        let config: ConfigFile = toml::from_str(config)?;
        let num_servers = config.servers.as_ref().map_or(0, Vec::len);
        info!("Loaded config: servers={num_servers}");
        Ok(config)
    }

    pub fn to_str(&self) -> Result<String> {
        toml::to_string(self).map_err(Into::into)
    }

    pub fn server(&self, name: &str) -> Option<&AirflowConfig> {
        self.servers
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|server| server.name == name)
    }

    /// The server named by `active_server`, or the only configured server.
    pub fn active(&self) -> Result<&AirflowConfig> {
        if let Some(name) = &self.active_server {
            return self
                .server(name)
                .with_context(|| format!("Active server '{name}' is not configured"));
        }
        match self.servers.as_deref() {
            Some([only]) => Ok(only),
            Some([]) | None => Err(anyhow::anyhow!("No Airflow servers configured")),
            Some(_) => Err(anyhow::anyhow!(
                "Several servers configured but no active_server set"
            )),
        }
    }
}
