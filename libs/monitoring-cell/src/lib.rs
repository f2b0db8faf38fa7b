// =====================================================================================
// MONITORING CELL - HEALTH, READINESS, LIVENESS & RUNTIME METRICS
// =====================================================================================
//
// This cell answers the four monitoring questions the orchestration layer
// asks of the service:
// - /health    dependency-aware health (database, cache)
// - /ready     can the service accept traffic right now
// - /live      is the process responsive at all (never probes dependencies)
// - /metrics   request counters and runtime gauges
//
// =====================================================================================

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{
    ApiInfo, DependencySnapshot, HealthReport, HealthStatus, LivenessStatus, ProbeOutcome,
    ReadinessStatus, SystemMetrics,
};

pub use services::{track_requests, DependencyProbe, HealthMonitor, MetricsRecorder, RedisProbe, TcpProbe};

pub use handlers::MonitoringState;
pub use router::monitoring_routes;
