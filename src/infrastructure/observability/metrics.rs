//! Prometheus metrics infrastructure

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, routing::get, Router};
use metrics::{counter, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use super::config::MetricsConfig;

/// Prometheus metrics handle for serving metrics endpoint
#[derive(Clone)]
pub struct PrometheusMetrics {
    handle: Arc<PrometheusHandle>,
}

impl PrometheusMetrics {
    /// Get the metrics as a string for the /metrics endpoint
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// Initialize Prometheus metrics
///
/// Counters recorded before (or without) a recorder are dropped silently.
pub fn init_metrics(config: &MetricsConfig) -> Option<PrometheusMetrics> {
    if !config.enabled {
        tracing::info!("Prometheus metrics disabled");
        return None;
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            gauge!("user_directory_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);

            tracing::info!("Prometheus metrics initialized at {}", config.path);

            Some(PrometheusMetrics {
                handle: Arc::new(handle),
            })
        }
        Err(e) => {
            tracing::error!("Failed to initialize Prometheus metrics: {}", e);
            None
        }
    }
}

/// Create the metrics router
pub fn create_metrics_router(metrics: PrometheusMetrics, path: &str) -> Router {
    Router::new()
        .route(path, get(metrics_handler))
        .with_state(metrics)
}

async fn metrics_handler(State(metrics): State<PrometheusMetrics>) -> impl IntoResponse {
    metrics.render()
}

/// Record a page cache lookup
pub fn record_cache_lookup(hit: bool) {
    if hit {
        counter!("directory_cache_hits_total").increment(1);
    } else {
        counter!("directory_cache_misses_total").increment(1);
    }
}

/// Record an upstream request and how it ended
pub fn record_upstream_request(outcome: &'static str) {
    counter!("directory_upstream_requests_total", "outcome" => outcome).increment(1);
}

/// Record a non-blank search
pub fn record_search() {
    counter!("directory_searches_total").increment(1);
}
