//! User Directory
//!
//! A caching and search layer over a paginated user-directory API:
//! - Memoized page fetches keyed by (page, page size, seed)
//! - Case-insensitive search across every cached page, re-paginated
//! - Manual cache clearing

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::{
    cache::InMemoryPageCache,
    directory::{DirectoryClient, DirectoryService, HttpTransport},
};
use tracing::info;

/// Create the application state with default configuration
pub fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default())
}

/// Create the application state with custom configuration
pub fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let directory = &config.directory;

    let transport = HttpTransport::with_timeout(directory.request_timeout())?;
    let cache = Arc::new(InMemoryPageCache::new());

    let client = DirectoryClient::with_base_url(transport, cache, directory.base_url.clone())
        .with_defaults(directory.page_defaults());

    info!(
        base_url = %directory.base_url,
        default_seed = %directory.default_seed,
        default_page_size = directory.default_page_size,
        "Directory client configured"
    );

    Ok(AppState::new(Arc::new(DirectoryService::new(client))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_app_state_starts_with_empty_cache() {
        let state = create_app_state().unwrap();
        assert_eq!(state.directory.cached_pages().await.unwrap(), 0);
    }

    #[test]
    fn test_create_app_state_with_custom_base_url() {
        let mut config = AppConfig::default();
        config.directory.base_url = "http://localhost:9999/api/".to_string();
        assert!(create_app_state_with_config(&config).is_ok());
    }
}
