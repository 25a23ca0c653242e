//! Directory domain - Page requests and cross-page search

mod request;
mod search;

pub use request::{
    PageDefaults, PageRequest, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, DEFAULT_SEED, MAX_PAGE_SIZE,
};
pub use search::{paginate, SearchQuery};
