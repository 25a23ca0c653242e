//! Query and response types for the users endpoints

use serde::{Deserialize, Serialize};

use crate::domain::directory::PageRequest;

/// Query string for `GET /v1/users`, using the upstream's parameter names
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsersQuery {
    pub page: Option<u32>,
    pub results: Option<u32>,
    pub seed: Option<String>,
}

impl UsersQuery {
    pub fn into_page_request(self) -> PageRequest {
        PageRequest {
            page: self.page,
            page_size: self.results,
            seed: self.seed,
        }
    }
}

/// Query string for `GET /v1/users/search`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchUsersQuery {
    #[serde(default)]
    pub q: String,
    pub page: Option<u32>,
    pub results: Option<u32>,
    pub seed: Option<String>,
}

impl SearchUsersQuery {
    pub fn into_parts(self) -> (String, PageRequest) {
        let request = PageRequest {
            page: self.page,
            page_size: self.results,
            seed: self.seed,
        };

        (self.q, request)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStatsResponse {
    pub pages: usize,
}
