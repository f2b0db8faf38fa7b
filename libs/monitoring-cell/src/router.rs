// =====================================================================================
// MONITORING CELL ROUTER
// =====================================================================================

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers::{
    api_info, health_check, liveness_check, metrics_snapshot, readiness_check, MonitoringState,
};

pub fn monitoring_routes(state: Arc<MonitoringState>) -> Router {
    Router::new()
        .route("/", get(api_info))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/live", get(liveness_check))
        .route("/metrics", get(metrics_snapshot))
        .with_state(state)
}
