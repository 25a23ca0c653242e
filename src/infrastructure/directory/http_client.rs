use std::time::Duration;

use async_trait::async_trait;

use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Trait for upstream HTTP operations (for mocking)
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DirectoryTransport: Send + Sync {
    /// Issues one GET and returns the decoded JSON body
    ///
    /// Transport failures and non-success statuses are `Fetch` errors; a
    /// body that is not JSON is a `MalformedResponse`.
    async fn get_json(
        &self,
        url: &str,
        query: Vec<(String, String)>,
    ) -> Result<serde_json::Value, DomainError>;
}

/// Real HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                DomainError::configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DirectoryTransport for HttpTransport {
    async fn get_json(
        &self,
        url: &str,
        query: Vec<(String, String)>,
    ) -> Result<serde_json::Value, DomainError> {
        let response = self
            .client
            .get(url)
            .query(&query)
            .send()
            .await
            .map_err(|e| DomainError::fetch(format!("Request failed: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(DomainError::fetch_status(
                status.as_u16(),
                format!("HTTP {}: {}", status, error_body),
            ));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| DomainError::fetch(format!("Failed to read response body: {}", e)))?;

        serde_json::from_slice(&body)
            .map_err(|e| DomainError::malformed(format!("Response is not valid JSON: {}", e)))
    }
}
