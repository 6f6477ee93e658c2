//! Server configuration: TOML file with serde defaults plus env overrides.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_session_capacity() -> usize {
    1024
}

/// Configuration for the game server.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    host: String,

    /// Port to bind to.
    #[serde(default = "default_port")]
    port: u16,

    /// Maximum number of live sessions before eviction kicks in.
    #[serde(default = "default_session_capacity")]
    session_capacity: usize,

    /// API key for the news upstream. Falls back to the `NEWS_API_KEY`
    /// environment variable when absent.
    #[serde(default)]
    news_api_key: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            session_capacity: default_session_capacity(),
            news_api_key: None,
        }
    }
}

impl ServerConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("failed to read config file: {e}")))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("failed to parse config: {e}")))?;

        info!(host = %config.host, port = config.port, "config loaded");
        Ok(config)
    }

    /// Fills unset values from the environment (`NEWS_API_KEY`).
    pub fn with_env(mut self) -> Self {
        if self.news_api_key.is_none() {
            self.news_api_key = std::env::var("NEWS_API_KEY").ok();
        }
        self
    }

    /// Overrides the bind host.
    pub fn override_host(mut self, host: Option<String>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        self
    }

    /// Overrides the bind port.
    pub fn override_port(mut self, port: Option<u16>) -> Self {
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    /// Overrides the session capacity.
    pub fn override_session_capacity(mut self, capacity: Option<usize>) -> Self {
        if let Some(capacity) = capacity {
            self.session_capacity = capacity;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("config error: {message} at {file}:{line}")]
pub struct ConfigError {
    /// What went wrong.
    message: String,
    /// Source file that raised the error.
    file: &'static str,
    /// Line that raised the error.
    line: u32,
}

impl ConfigError {
    /// Creates a config error capturing the caller location.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message,
            file: location.file(),
            line: location.line(),
        }
    }
}
