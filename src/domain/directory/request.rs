//! Page request parameters and their defaults

use crate::domain::cache::PageKey;
use crate::domain::DomainError;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_SEED: &str = "kiratech";

/// Largest page the upstream will serve in one response
pub const MAX_PAGE_SIZE: u32 = 5000;

/// Defaults applied to parameters a caller leaves out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDefaults {
    pub page_size: u32,
    pub seed: String,
    pub max_page_size: u32,
}

impl Default for PageDefaults {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            seed: DEFAULT_SEED.to_string(),
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

impl PageDefaults {
    /// Builds a validated key, enforcing the configured page size ceiling
    pub fn key(&self, page: u32, page_size: u32, seed: &str) -> Result<PageKey, DomainError> {
        if page_size > self.max_page_size {
            return Err(DomainError::validation(format!(
                "page size {} exceeds the maximum of {}",
                page_size, self.max_page_size
            )));
        }

        PageKey::new(page, page_size, seed)
    }
}

/// Page parameters with every field optional
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub seed: Option<String>,
}

impl PageRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    /// Fills missing fields from `defaults`
    pub fn resolve(&self, defaults: &PageDefaults) -> (u32, u32, String) {
        (
            self.page.unwrap_or(DEFAULT_PAGE),
            self.page_size.unwrap_or(defaults.page_size),
            self.seed.clone().unwrap_or_else(|| defaults.seed.clone()),
        )
    }
}
