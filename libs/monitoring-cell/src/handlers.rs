// =====================================================================================
// MONITORING CELL HANDLERS
// =====================================================================================

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::instrument;

use shared_config::AppConfig;
use shared_models::error::ApiError;

use crate::models::{ApiInfo, HealthReport, HealthStatus, LivenessStatus, ReadinessStatus, SystemMetrics};
use crate::services::{HealthMonitor, MetricsRecorder};

pub struct MonitoringState {
    monitor: Arc<HealthMonitor>,
    metrics: Arc<MetricsRecorder>,
}

impl MonitoringState {
    pub fn new(config: &AppConfig) -> Self {
        let metrics = Arc::new(MetricsRecorder::new());
        let monitor = Arc::new(HealthMonitor::new(config, metrics.clone()));
        Self { monitor, metrics }
    }

    pub fn with_monitor(monitor: Arc<HealthMonitor>, metrics: Arc<MetricsRecorder>) -> Self {
        Self { monitor, metrics }
    }

    pub fn metrics(&self) -> Arc<MetricsRecorder> {
        self.metrics.clone()
    }
}

pub async fn api_info(State(state): State<Arc<MonitoringState>>) -> Json<ApiInfo> {
    Json(state.monitor.api_info())
}

/// Dependency-aware health. An unhealthy report (a critical dependency is
/// unreachable) surfaces as 503 so load balancers stop routing here; the
/// business endpoints keep serving from the in-process store either way.
#[instrument(skip(state))]
pub async fn health_check(
    State(state): State<Arc<MonitoringState>>,
) -> Result<Json<HealthReport>, ApiError> {
    let report = state.monitor.health().await;
    if report.status == HealthStatus::Unhealthy {
        return Err(ApiError::Unavailable(format!("database {}", report.database)));
    }
    Ok(Json(report))
}

#[instrument(skip(state))]
pub async fn readiness_check(State(state): State<Arc<MonitoringState>>) -> Json<ReadinessStatus> {
    Json(state.monitor.ready().await)
}

pub async fn liveness_check(State(state): State<Arc<MonitoringState>>) -> Json<LivenessStatus> {
    Json(state.monitor.live())
}

pub async fn metrics_snapshot(State(state): State<Arc<MonitoringState>>) -> Json<SystemMetrics> {
    Json(state.metrics.snapshot())
}
