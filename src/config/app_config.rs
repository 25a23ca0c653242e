use std::time::Duration;

use serde::Deserialize;

use crate::domain::directory::{PageDefaults, DEFAULT_PAGE_SIZE, DEFAULT_SEED, MAX_PAGE_SIZE};
use crate::infrastructure::directory::DEFAULT_DIRECTORY_BASE_URL;
use crate::infrastructure::observability::MetricsConfig;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Upstream directory settings
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_seed")]
    pub default_seed: String,
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    DEFAULT_DIRECTORY_BASE_URL.to_string()
}

fn default_seed() -> String {
    DEFAULT_SEED.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_max_page_size() -> u32 {
    MAX_PAGE_SIZE
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_seed: default_seed(),
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl DirectoryConfig {
    pub fn page_defaults(&self) -> PageDefaults {
        PageDefaults {
            page_size: self.default_page_size,
            seed: self.default_seed.clone(),
            max_page_size: self.max_page_size,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
