//! Users endpoint handlers

use axum::{
    extract::{Query, State},
    Json,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, SearchUsersQuery, UsersQuery};
use crate::domain::user::PageResponse;

/// GET /v1/users
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<UsersQuery>,
) -> Result<Json<PageResponse>, ApiError> {
    debug!(?query, "Fetching users page");

    let page = state
        .directory
        .fetch_page(query.into_page_request())
        .await
        .map_err(ApiError::from)?;

    Ok(Json(page.as_ref().clone()))
}

/// GET /v1/users/search
pub async fn search_users(
    State(state): State<AppState>,
    Query(query): Query<SearchUsersQuery>,
) -> Result<Json<PageResponse>, ApiError> {
    let (q, request) = query.into_parts();
    debug!(query = %q, "Searching users");

    let page = state
        .directory
        .search_users(&q, request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(page))
}
