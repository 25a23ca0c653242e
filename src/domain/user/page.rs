//! Paginated upstream response

use serde::{Deserialize, Serialize};

use super::UserRecord;

/// Pagination metadata attached to every page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub seed: String,
    /// Number of results available for this response
    pub results: u32,
    pub page: u32,
    pub version: String,
}

/// One page of directory results plus its metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResponse {
    pub results: Vec<UserRecord>,
    pub info: PageInfo,
}

impl PageResponse {
    pub fn new(results: Vec<UserRecord>, info: PageInfo) -> Self {
        Self { results, info }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
