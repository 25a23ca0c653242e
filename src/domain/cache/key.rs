//! Page cache key

use std::fmt;

use crate::domain::DomainError;

/// Identifies one fetched page: `(page, page_size, seed)`
///
/// Equality and hashing are structural. The `page-size-seed` rendering from
/// `Display` is only used in logs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageKey {
    page: u32,
    page_size: u32,
    seed: String,
}

impl PageKey {
    /// Creates a key, rejecting zero page numbers and page sizes
    pub fn new(page: u32, page_size: u32, seed: impl Into<String>) -> Result<Self, DomainError> {
        if page == 0 {
            return Err(DomainError::validation("page must be at least 1"));
        }

        if page_size == 0 {
            return Err(DomainError::validation("page size must be at least 1"));
        }

        Ok(Self {
            page,
            page_size,
            seed: seed.into(),
        })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Query parameters understood by the upstream
    pub fn query_params(&self) -> Vec<(String, String)> {
        vec![
            ("page".to_string(), self.page.to_string()),
            ("results".to_string(), self.page_size.to_string()),
            ("seed".to_string(), self.seed.clone()),
        ]
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.page, self.page_size, self.seed)
    }
}
