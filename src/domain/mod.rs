//! Domain layer - Core entities and caching/search rules

pub mod cache;
pub mod directory;
pub mod error;
pub mod user;

pub use cache::{PageCache, PageKey};
pub use directory::{PageDefaults, PageRequest, SearchQuery};
pub use error::DomainError;
pub use user::{PageInfo, PageResponse, UserRecord};
