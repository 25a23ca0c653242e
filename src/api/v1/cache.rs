//! Cache management handlers

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use crate::api::state::AppState;
use crate::api::types::{ApiError, CacheStatsResponse};

/// GET /v1/cache
pub async fn cache_stats(
    State(state): State<AppState>,
) -> Result<Json<CacheStatsResponse>, ApiError> {
    let pages = state
        .directory
        .cached_pages()
        .await
        .map_err(ApiError::from)?;

    Ok(Json(CacheStatsResponse { pages }))
}

/// DELETE /v1/cache
pub async fn clear_cache(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    info!("Clearing page cache on request");

    state
        .directory
        .clear_cache()
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
