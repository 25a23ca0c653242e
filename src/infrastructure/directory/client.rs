//! Memoizing client for the upstream user directory

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::http_client::DirectoryTransport;
use crate::domain::cache::{PageCache, PageKey};
use crate::domain::directory::PageDefaults;
use crate::domain::user::PageResponse;
use crate::domain::DomainError;
use crate::infrastructure::observability::{record_cache_lookup, record_upstream_request};

pub const DEFAULT_DIRECTORY_BASE_URL: &str = "https://randomuser.me/api/";

/// Fetches pages from the upstream directory, memoizing every success
///
/// A cached key is never requested again until the cache is cleared.
/// Failures are never cached.
pub struct DirectoryClient<T: DirectoryTransport> {
    transport: T,
    cache: Arc<dyn PageCache>,
    base_url: String,
    defaults: PageDefaults,
}

impl<T: DirectoryTransport> DirectoryClient<T> {
    pub fn new(transport: T, cache: Arc<dyn PageCache>) -> Self {
        Self::with_base_url(transport, cache, DEFAULT_DIRECTORY_BASE_URL)
    }

    pub fn with_base_url(
        transport: T,
        cache: Arc<dyn PageCache>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            cache,
            base_url: base_url.into(),
            defaults: PageDefaults::default(),
        }
    }

    pub fn with_defaults(mut self, defaults: PageDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn cache(&self) -> &Arc<dyn PageCache> {
        &self.cache
    }

    pub fn defaults(&self) -> &PageDefaults {
        &self.defaults
    }

    /// Returns the page for `(page, page_size, seed)`, fetching it on a miss
    pub async fn fetch_page(
        &self,
        page: u32,
        page_size: u32,
        seed: &str,
    ) -> Result<Arc<PageResponse>, DomainError> {
        let key = self.defaults.key(page, page_size, seed)?;
        self.fetch(key).await
    }

    /// Returns the page for an already validated key
    pub async fn fetch(&self, key: PageKey) -> Result<Arc<PageResponse>, DomainError> {
        if let Some(page) = self.cache.get(&key).await? {
            debug!(key = %key, "Page cache hit");
            record_cache_lookup(true);
            return Ok(page);
        }

        debug!(key = %key, "Page cache miss");
        record_cache_lookup(false);

        let page = match self.request(&key).await {
            Ok(page) => {
                record_upstream_request("success");
                Arc::new(page)
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to fetch page");
                record_upstream_request(outcome_label(&e));
                return Err(e);
            }
        };

        info!(
            key = %key,
            results = page.len(),
            "Fetched page from upstream"
        );

        self.cache.insert(key, Arc::clone(&page)).await?;

        Ok(page)
    }

    async fn request(&self, key: &PageKey) -> Result<PageResponse, DomainError> {
        let body = self
            .transport
            .get_json(&self.base_url, key.query_params())
            .await?;

        decode_page(body, key)
    }
}

impl<T: DirectoryTransport> fmt::Debug for DirectoryClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectoryClient")
            .field("base_url", &self.base_url)
            .field("defaults", &self.defaults)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

fn outcome_label(error: &DomainError) -> &'static str {
    match error {
        DomainError::Fetch { .. } => "fetch_error",
        DomainError::MalformedResponse { .. } => "malformed",
        _ => "error",
    }
}

/// Validates an upstream body against the page schema
fn decode_page(body: serde_json::Value, key: &PageKey) -> Result<PageResponse, DomainError> {
    if let Some(message) = body.get("error").and_then(|e| e.as_str()) {
        return Err(DomainError::fetch(format!(
            "Upstream reported an error: {}",
            message
        )));
    }

    let page: PageResponse = serde_json::from_value(body)
        .map_err(|e| DomainError::malformed(format!("Failed to parse page: {}", e)))?;

    if page.info.page != key.page() {
        return Err(DomainError::malformed(format!(
            "Requested page {} but upstream returned page {}",
            key.page(),
            page.info.page
        )));
    }

    if page.results.len() > key.page_size() as usize {
        return Err(DomainError::malformed(format!(
            "Requested {} results but upstream returned {}",
            key.page_size(),
            page.results.len()
        )));
    }

    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::fixtures;
    use crate::infrastructure::cache::InMemoryPageCache;
    use crate::infrastructure::directory::http_client::MockDirectoryTransport;

    const TEST_URL: &str = "http://directory.test/api/";

    fn query_value<'a>(query: &'a [(String, String)], name: &str) -> Option<&'a str> {
        query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn client(transport: MockDirectoryTransport) -> DirectoryClient<MockDirectoryTransport> {
        DirectoryClient::with_base_url(transport, Arc::new(InMemoryPageCache::new()), TEST_URL)
    }

    fn page_body(tag: &str, page: u32, seed: &str) -> serde_json::Value {
        fixtures::page_json(vec![fixtures::tagged_user(tag)], page, seed)
    }

    #[tokio::test]
    async fn test_fetch_sends_query_params() {
        let mut transport = MockDirectoryTransport::new();
        transport
            .expect_get_json()
            .withf(|url, query| {
                url.to_string() == TEST_URL
                    && query_value(query, "page") == Some("2")
                    && query_value(query, "results") == Some("25")
                    && query_value(query, "seed") == Some("abc")
            })
            .times(1)
            .returning(|_, _| Ok(page_body("Alice", 2, "abc")));

        let client = client(transport);
        let page = client.fetch_page(2, 25, "abc").await.unwrap();

        assert_eq!(page.info.page, 2);
        assert_eq!(page.results[0].name.first, "Alice");
    }

    #[tokio::test]
    async fn test_fetch_is_memoized() {
        let mut transport = MockDirectoryTransport::new();
        transport
            .expect_get_json()
            .times(1)
            .returning(|_, _| Ok(page_body("Alice", 1, "kiratech")));

        let client = client(transport);
        let first = client.fetch_page(1, 10, "kiratech").await.unwrap();
        let second = client.fetch_page(1, 10, "kiratech").await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(client.cache().len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_distinct_seeds_are_independent() {
        let mut transport = MockDirectoryTransport::new();
        transport
            .expect_get_json()
            .times(2)
            .returning(|_, query| {
                let seed = query_value(&query, "seed").unwrap_or_default().to_string();
                Ok(page_body(&format!("User{}", seed), 1, &seed))
            });

        let client = client(transport);
        client.fetch_page(1, 10, "a").await.unwrap();
        client.fetch_page(1, 10, "b").await.unwrap();

        let a = client.fetch_page(1, 10, "a").await.unwrap();
        let b = client.fetch_page(1, 10, "b").await.unwrap();

        assert_eq!(a.results[0].name.first, "Usera");
        assert_eq!(b.results[0].name.first, "Userb");
        assert_eq!(client.cache().len().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_failed_fetch_is_not_cached() {
        let mut transport = MockDirectoryTransport::new();
        let mut seq = mockall::Sequence::new();
        transport
            .expect_get_json()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(DomainError::fetch_status(500, "HTTP 500")));
        transport
            .expect_get_json()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(page_body("Alice", 1, "kiratech")));

        let client = client(transport);

        let err = client.fetch_page(1, 10, "kiratech").await.unwrap_err();
        assert_eq!(err.upstream_status(), Some(500));
        assert!(client.cache().is_empty().await.unwrap());

        let page = client.fetch_page(1, 10, "kiratech").await.unwrap();
        assert_eq!(page.results.len(), 1);
    }

    #[tokio::test]
    async fn test_clear_forces_refetch() {
        let mut transport = MockDirectoryTransport::new();
        transport
            .expect_get_json()
            .times(2)
            .returning(|_, _| Ok(page_body("Alice", 1, "kiratech")));

        let client = client(transport);
        client.fetch_page(1, 10, "kiratech").await.unwrap();
        client.cache().clear().await.unwrap();
        client.fetch_page(1, 10, "kiratech").await.unwrap();
    }

    #[tokio::test]
    async fn test_invalid_arguments_skip_network() {
        let mut transport = MockDirectoryTransport::new();
        transport.expect_get_json().never();

        let client = client(transport);

        assert!(matches!(
            client.fetch_page(0, 10, "kiratech").await,
            Err(DomainError::Validation { .. })
        ));
        assert!(matches!(
            client.fetch_page(1, 0, "kiratech").await,
            Err(DomainError::Validation { .. })
        ));
        assert!(matches!(
            client.fetch_page(1, 5001, "kiratech").await,
            Err(DomainError::Validation { .. })
        ));
    }

    #[tokio::test]
    async fn test_malformed_body_is_not_cached() {
        let mut transport = MockDirectoryTransport::new();
        transport
            .expect_get_json()
            .times(1)
            .returning(|_, _| Ok(serde_json::json!({ "results": [{ "name": "nobody" }] })));

        let client = client(transport);
        let err = client.fetch_page(1, 10, "kiratech").await.unwrap_err();

        assert!(matches!(err, DomainError::MalformedResponse { .. }));
        assert!(client.cache().is_empty().await.unwrap());
    }

    #[tokio::test]
    async fn test_page_mismatch_is_malformed() {
        let mut transport = MockDirectoryTransport::new();
        transport
            .expect_get_json()
            .times(1)
            .returning(|_, _| Ok(page_body("Alice", 1, "kiratech")));

        let client = client(transport);
        let err = client.fetch_page(3, 10, "kiratech").await.unwrap_err();

        assert!(matches!(err, DomainError::MalformedResponse { .. }));
        assert!(client.cache().is_empty().await.unwrap());
    }

    #[tokio::test]
    async fn test_oversized_page_is_malformed() {
        let mut transport = MockDirectoryTransport::new();
        transport.expect_get_json().times(1).returning(|_, _| {
            Ok(fixtures::page_json(
                vec![fixtures::tagged_user("A"), fixtures::tagged_user("B")],
                1,
                "kiratech",
            ))
        });

        let client = client(transport);
        let err = client.fetch_page(1, 1, "kiratech").await.unwrap_err();

        assert!(matches!(err, DomainError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn test_upstream_error_body_is_fetch_error() {
        let mut transport = MockDirectoryTransport::new();
        transport
            .expect_get_json()
            .times(1)
            .returning(|_, _| Ok(serde_json::json!({ "error": "Uh oh, something has gone wrong." })));

        let client = client(transport);
        let err = client.fetch_page(1, 10, "kiratech").await.unwrap_err();

        assert!(err.is_fetch());
        assert!(client.cache().is_empty().await.unwrap());
    }

    #[tokio::test]
    async fn test_custom_page_size_ceiling() {
        let mut transport = MockDirectoryTransport::new();
        transport.expect_get_json().never();

        let client = client(transport).with_defaults(PageDefaults {
            max_page_size: 50,
            ..Default::default()
        });

        assert!(matches!(
            client.fetch_page(1, 51, "kiratech").await,
            Err(DomainError::Validation { .. })
        ));
    }
}
