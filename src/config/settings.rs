//! Application settings and configuration management

use crate::error::{AppError, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Upstream inference endpoint configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Environment variable holding the API token. The token itself is read
    /// per request, so its absence is a request-time error rather than a
    /// startup error.
    #[serde(default = "default_token_env")]
    pub token_env: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api-inference.huggingface.co".to_string()
}

fn default_model() -> String {
    "stabilityai/stable-diffusion-3.5-large".to_string()
}

fn default_token_env() -> String {
    "HF_TOKEN".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            token_env: default_token_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Settings {
    /// Load settings from configuration files and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path("config/default.toml")
    }

    /// Load settings from a specific configuration file path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::builder()
            // Load from configuration file when present
            .add_source(
                File::with_name(path.as_ref().to_str().unwrap_or("config/default")).required(false),
            )
            // Override with environment variables (prefixed with SCENEFORGE_)
            .add_source(
                Environment::with_prefix("SCENEFORGE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        Ok(settings)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Config(config::ConfigError::Message(
                "Server port cannot be 0".to_string(),
            )));
        }

        if self.upstream.base_url.is_empty() {
            return Err(AppError::Config(config::ConfigError::Message(
                "Upstream base_url cannot be empty".to_string(),
            )));
        }

        if self.upstream.model.is_empty() {
            return Err(AppError::Config(config::ConfigError::Message(
                "Upstream model cannot be empty".to_string(),
            )));
        }

        if self.upstream.token_env.is_empty() {
            return Err(AppError::Config(config::ConfigError::Message(
                "Upstream token_env cannot be empty".to_string(),
            )));
        }

        if self.upstream.timeout_secs == 0 {
            return Err(AppError::Config(config::ConfigError::Message(
                "Upstream timeout_secs cannot be 0".to_string(),
            )));
        }

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            upstream: UpstreamConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
