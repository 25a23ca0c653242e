//! Page cache trait definition

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;

use super::PageKey;
use crate::domain::user::PageResponse;
use crate::domain::DomainError;

/// Memoization store for fetched pages
///
/// Entries never expire. Iteration order is insertion order, and writing an
/// existing key replaces its value without moving it. Pages are shared as
/// `Arc` so a cache hit hands back the same instance that was stored.
#[async_trait]
pub trait PageCache: Send + Sync + Debug {
    /// Gets a cached page
    async fn get(&self, key: &PageKey) -> Result<Option<Arc<PageResponse>>, DomainError>;

    /// Stores a page, replacing any previous value for the key
    async fn insert(&self, key: PageKey, page: Arc<PageResponse>) -> Result<(), DomainError>;

    /// Returns every cached page in insertion order
    async fn entries(&self) -> Result<Vec<(PageKey, Arc<PageResponse>)>, DomainError>;

    /// Removes every entry
    async fn clear(&self) -> Result<(), DomainError>;

    /// Number of cached pages
    async fn len(&self) -> Result<usize, DomainError>;

    /// Checks if a key is cached
    async fn contains(&self, key: &PageKey) -> Result<bool, DomainError> {
        Ok(self.get(key).await?.is_some())
    }

    async fn is_empty(&self) -> Result<bool, DomainError> {
        Ok(self.len().await? == 0)
    }

    /// Cached pages without their keys, in insertion order
    async fn pages(&self) -> Result<Vec<Arc<PageResponse>>, DomainError> {
        Ok(self
            .entries()
            .await?
            .into_iter()
            .map(|(_, page)| page)
            .collect())
    }
}
