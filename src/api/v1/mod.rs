//! v1 API endpoints

pub mod cache;
pub mod users;

use axum::{routing::get, Router};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users))
        .route("/users/search", get(users::search_users))
        .route("/cache", get(cache::cache_stats).delete(cache::clear_cache))
}
