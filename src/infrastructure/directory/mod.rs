//! Directory infrastructure - Upstream client, search and service

mod client;
mod http_client;
mod search;
mod service;

pub use client::{DirectoryClient, DEFAULT_DIRECTORY_BASE_URL};
pub use http_client::{DirectoryTransport, HttpTransport};
pub use search::SearchAggregator;
pub use service::{DirectoryService, DirectoryServiceTrait};

#[cfg(test)]
pub use http_client::MockDirectoryTransport;
