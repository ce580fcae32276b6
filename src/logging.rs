use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, LevelFilter};
use simplelog::{Config, WriteLogger};

/// Environment variable holding the log level. Logging stays off when unset.
pub const LOG_ENV_VAR: &str = "FLOWRS_LOG";

/// Directory for log files: `<state_dir>/flowrs/logs`.
pub fn log_dir() -> PathBuf {
    dirs::state_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local").join("state")))
        .unwrap_or_else(std::env::temp_dir)
        .join("flowrs")
        .join("logs")
}

/// Unknown levels fall back to `Info`.
pub fn parse_level(log_level: &str) -> LevelFilter {
    match log_level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

/// Name of a fresh log file, stamped with the local time.
fn log_file_name() -> String {
    format!(
        "flowrs-client-{}.log",
        chrono::Local::now().format("%Y%m%d%H%M%S")
    )
}

/// Routes the `log` macros of the client to a file in `log_dir`.
///
/// Returns the path of the log file. Fails when a logger is already installed.
pub fn setup_logging(log_level: &str, log_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create {}", log_dir.display()))?;

    let log_file_path = log_dir.join(log_file_name());
    let file = File::create(&log_file_path)
        .with_context(|| format!("Failed to create {}", log_file_path.display()))?;
    WriteLogger::init(parse_level(log_level), Config::default(), file)?;

    info!("Logging to: {}", log_file_path.display());
    Ok(log_file_path)
}

/// Sets up logging when `FLOWRS_LOG` is set. Returns the log file, if any.
pub fn init_from_env() -> Result<Option<PathBuf>> {
    match std::env::var(LOG_ENV_VAR) {
        Ok(log_level) => setup_logging(&log_level, &log_dir()).map(Some),
        Err(_) => Ok(None),
    }
}
