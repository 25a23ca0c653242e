//! Cross-page search over everything fetched so far

use std::sync::Arc;

use tracing::debug;

use super::client::DirectoryClient;
use super::http_client::DirectoryTransport;
use crate::domain::directory::{paginate, SearchQuery};
use crate::domain::user::PageResponse;
use crate::domain::DomainError;
use crate::infrastructure::observability::record_search;

/// Filters every cached page and re-paginates the merged matches
///
/// Search is bounded to the pages already in the cache, across all seeds,
/// not to the full upstream dataset.
#[derive(Debug)]
pub struct SearchAggregator<T: DirectoryTransport> {
    client: Arc<DirectoryClient<T>>,
}

impl<T: DirectoryTransport> SearchAggregator<T> {
    pub fn new(client: Arc<DirectoryClient<T>>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Arc<DirectoryClient<T>> {
        &self.client
    }

    /// Searches cached pages for `query`
    ///
    /// A blank query returns exactly what `fetch_page` returns.
    pub async fn search_users(
        &self,
        query: &str,
        page: u32,
        page_size: u32,
        seed: &str,
    ) -> Result<PageResponse, DomainError> {
        let Some(query) = SearchQuery::parse(query) else {
            let page = self.client.fetch_page(page, page_size, seed).await?;
            return Ok(page.as_ref().clone());
        };

        record_search();

        let mut requested = self.client.fetch_page(page, page_size, seed).await?;

        let cache = self.client.cache();

        if cache.is_empty().await? {
            requested = self.client.fetch_page(page, page_size, seed).await?;
        }

        let pages = cache.pages().await?;
        let matches = query.filter_pages(pages.iter().map(|p| p.as_ref()));

        debug!(
            query = query.as_str(),
            cached_pages = pages.len(),
            matches = matches.len(),
            "Searched cached pages"
        );

        Ok(paginate(matches, page, page_size, &requested.info))
    }
}
