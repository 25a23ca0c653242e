//! Application configuration

mod app_config;

pub use self::app_config::{AppConfig, DirectoryConfig, LogFormat, LoggingConfig, ServerConfig};
