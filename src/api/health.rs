//! Health check endpoints

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use super::state::AppState;

/// Health response with optional component status
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
}

#[derive(Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Individual component health check
#[derive(Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Returns 200 when the service is running and its page cache is readable
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let check = check_page_cache(&state).await;
    let status = check.status;

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(vec![check]),
    };

    let status_code = match status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response))
}

/// Liveness probe
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

async fn check_page_cache(state: &AppState) -> HealthCheck {
    match state.directory.cached_pages().await {
        Ok(pages) => HealthCheck {
            name: "page_cache".to_string(),
            status: HealthStatus::Healthy,
            message: Some(format!("{} pages cached", pages)),
        },
        Err(e) => HealthCheck {
            name: "page_cache".to_string(),
            status: HealthStatus::Unhealthy,
            message: Some(e.to_string()),
        },
    }
}
