//! Configuration layer: typed settings with layered precedence (file → env).

use std::path::Path;
use std::time::Duration;

use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

#[cfg(test)]
mod tests;

const LOCAL_CONFIG_BASENAME: &str = "taskclass";
const ENV_PREFIX: &str = "TASKCLASS";
const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_TIMEOUT_SECS: i64 = 15;
const DEFAULT_PAGE_SIZE: i64 = 10;
const DEFAULT_SEARCH_DEBOUNCE_MS: i64 = 400;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api: ApiSettings,
    pub lists: ListSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the remote TaskClass API.
    pub base_url: String,
    pub timeout_secs: u64,
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ListSettings {
    /// Items requested per page window.
    pub page_size: u32,
    /// Quiescence interval for the search debounce.
    pub search_debounce_ms: u64,
}

impl ListSettings {
    pub fn search_quiescence(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LoggingSettings {
    pub level: LogLevel,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}

impl LoggingSettings {
    pub fn level_filter(&self) -> LevelFilter {
        match self.level {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

/// Load settings from the optional local `taskclass.toml` and the
/// `TASKCLASS_*` environment (environment wins).
pub fn load() -> Result<Settings, ConfigError> {
    let builder = defaults()?.add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));
    finish(builder)
}

/// Load settings from an explicit configuration file.
pub fn load_from(path: &Path) -> Result<Settings, ConfigError> {
    let builder = defaults()?.add_source(File::from(path));
    finish(builder)
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = Config::builder()
        .set_default("api.base_url", DEFAULT_BASE_URL)?
        .set_default("api.timeout_secs", DEFAULT_TIMEOUT_SECS)?
        .set_default("lists.page_size", DEFAULT_PAGE_SIZE)?
        .set_default("lists.search_debounce_ms", DEFAULT_SEARCH_DEBOUNCE_MS)?
        .set_default("logging.level", "info")?
        .set_default("logging.format", "compact")?;
    Ok(builder)
}

fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Settings, ConfigError> {
    let settings = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize()?;
    Ok(settings)
}
