//! Directory service - the operations exposed to callers

use std::sync::Arc;

use tracing::info;

use super::client::DirectoryClient;
use super::http_client::DirectoryTransport;
use super::search::SearchAggregator;
use crate::domain::cache::PageCache;
use crate::domain::directory::{PageDefaults, PageRequest};
use crate::domain::user::PageResponse;
use crate::domain::DomainError;

/// Trait for directory service operations
#[async_trait::async_trait]
pub trait DirectoryServiceTrait: Send + Sync {
    /// Fetches one page, from the cache when possible
    async fn fetch_page(&self, request: PageRequest) -> Result<Arc<PageResponse>, DomainError>;

    /// Searches every cached page and re-paginates the matches
    async fn search_users(
        &self,
        query: &str,
        request: PageRequest,
    ) -> Result<PageResponse, DomainError>;

    /// Drops every cached page
    async fn clear_cache(&self) -> Result<(), DomainError>;

    /// Number of cached pages
    async fn cached_pages(&self) -> Result<usize, DomainError>;
}

/// Service wiring the client, the search aggregator and the shared cache
#[derive(Debug)]
pub struct DirectoryService<T: DirectoryTransport> {
    client: Arc<DirectoryClient<T>>,
    search: SearchAggregator<T>,
}

impl<T: DirectoryTransport> DirectoryService<T> {
    pub fn new(client: DirectoryClient<T>) -> Self {
        let client = Arc::new(client);

        Self {
            search: SearchAggregator::new(Arc::clone(&client)),
            client,
        }
    }

    pub fn client(&self) -> &DirectoryClient<T> {
        &self.client
    }

    fn defaults(&self) -> &PageDefaults {
        self.client.defaults()
    }

    fn cache(&self) -> &Arc<dyn PageCache> {
        self.client.cache()
    }
}

#[async_trait::async_trait]
impl<T: DirectoryTransport + 'static> DirectoryServiceTrait for DirectoryService<T> {
    async fn fetch_page(&self, request: PageRequest) -> Result<Arc<PageResponse>, DomainError> {
        let (page, page_size, seed) = request.resolve(self.defaults());
        self.client.fetch_page(page, page_size, &seed).await
    }

    async fn search_users(
        &self,
        query: &str,
        request: PageRequest,
    ) -> Result<PageResponse, DomainError> {
        let (page, page_size, seed) = request.resolve(self.defaults());
        self.search
            .search_users(query, page, page_size, &seed)
            .await
    }

    async fn clear_cache(&self) -> Result<(), DomainError> {
        let cleared = self.cache().len().await?;
        self.cache().clear().await?;

        info!(pages = cleared, "Cleared page cache");
        Ok(())
    }

    async fn cached_pages(&self) -> Result<usize, DomainError> {
        self.cache().len().await
    }
}
