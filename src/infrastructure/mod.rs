//! Infrastructure layer - External service implementations

pub mod cache;
pub mod directory;
pub mod logging;
pub mod observability;
