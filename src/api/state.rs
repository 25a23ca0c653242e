//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::directory::DirectoryServiceTrait;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn DirectoryServiceTrait>,
}

impl AppState {
    pub fn new(directory: Arc<dyn DirectoryServiceTrait>) -> Self {
        Self { directory }
    }
}
