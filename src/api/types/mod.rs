//! API request and response types

pub mod error;
pub mod users;

pub use error::{ApiError, ApiErrorResponse};
pub use users::{CacheStatsResponse, SearchUsersQuery, UsersQuery};
