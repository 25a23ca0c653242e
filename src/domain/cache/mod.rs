//! Cache domain - Page memoization abstraction

mod key;
mod repository;

pub use key::PageKey;
pub use repository::PageCache;
