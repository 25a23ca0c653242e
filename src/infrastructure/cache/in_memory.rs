//! In-memory page cache

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::cache::{PageCache, PageKey};
use crate::domain::user::PageResponse;
use crate::domain::DomainError;

#[derive(Debug, Default)]
struct Entries {
    pages: HashMap<PageKey, Arc<PageResponse>>,
    order: Vec<PageKey>,
}

/// Thread-safe, insertion-ordered page cache
///
/// Data lives for the lifetime of the value. The lock is never held across
/// an await point.
#[derive(Debug, Default)]
pub struct InMemoryPageCache {
    entries: RwLock<Entries>,
}

impl InMemoryPageCache {
    /// Creates a new empty cache
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_error(e: impl std::fmt::Display) -> DomainError {
        DomainError::cache(format!("Failed to acquire cache lock: {}", e))
    }
}

#[async_trait]
impl PageCache for InMemoryPageCache {
    async fn get(&self, key: &PageKey) -> Result<Option<Arc<PageResponse>>, DomainError> {
        let entries = self.entries.read().map_err(Self::lock_error)?;

        Ok(entries.pages.get(key).cloned())
    }

    async fn insert(&self, key: PageKey, page: Arc<PageResponse>) -> Result<(), DomainError> {
        let mut entries = self.entries.write().map_err(Self::lock_error)?;

        if entries.pages.insert(key.clone(), page).is_none() {
            entries.order.push(key);
        }

        Ok(())
    }

    async fn entries(&self) -> Result<Vec<(PageKey, Arc<PageResponse>)>, DomainError> {
        let entries = self.entries.read().map_err(Self::lock_error)?;

        Ok(entries
            .order
            .iter()
            .filter_map(|key| {
                entries
                    .pages
                    .get(key)
                    .map(|page| (key.clone(), Arc::clone(page)))
            })
            .collect())
    }

    async fn clear(&self) -> Result<(), DomainError> {
        let mut entries = self.entries.write().map_err(Self::lock_error)?;

        entries.pages.clear();
        entries.order.clear();
        Ok(())
    }

    async fn len(&self) -> Result<usize, DomainError> {
        let entries = self.entries.read().map_err(Self::lock_error)?;

        Ok(entries.pages.len())
    }

    async fn contains(&self, key: &PageKey) -> Result<bool, DomainError> {
        let entries = self.entries.read().map_err(Self::lock_error)?;

        Ok(entries.pages.contains_key(key))
    }
}
