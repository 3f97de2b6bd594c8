use crate::utils::logging::DEFAULT_LOG_FILTER;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// stdout log format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            other => Err(ConfigError::InvalidLogFormat(other.to_string())),
        }
    }
}

/// Logging configuration for embedding hosts
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub log_dir: PathBuf,
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::Json,
        }
    }
}

impl AppConfig {
    /// Load from environment variables, reading `.env` first when present
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let log_dir = lookup("LOG_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.log_dir);

        let log_filter = lookup("RUST_LOG")
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or(defaults.log_filter);

        let log_format = match lookup("LOG_FORMAT") {
            Some(format) => format.parse()?,
            None => defaults.log_format,
        };

        Ok(Self {
            log_dir,
            log_filter,
            log_format,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid log format '{0}': expected 'json' or 'pretty'")]
    InvalidLogFormat(String),
}
