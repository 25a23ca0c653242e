//! Observability infrastructure - Metrics

mod config;
mod metrics;

pub use self::config::MetricsConfig;
pub use self::metrics::{
    create_metrics_router, init_metrics, record_cache_lookup, record_search,
    record_upstream_request, PrometheusMetrics,
};
