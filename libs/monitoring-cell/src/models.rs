// =====================================================================================
// MONITORING CELL MODELS
// =====================================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Result of one dependency probe.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeOutcome {
    pub name: String,
    pub critical: bool,
    pub healthy: bool,
    pub latency_ms: u64,
    pub error: Option<String>,
}

/// One point-in-time view of every dependency. Health, readiness, and the
/// connection gauge are all derived from this single snapshot so the three
/// probes can never disagree about the same moment.
#[derive(Debug, Clone)]
pub struct DependencySnapshot {
    pub outcomes: Vec<ProbeOutcome>,
}

impl DependencySnapshot {
    pub fn overall_status(&self) -> HealthStatus {
        if self.outcomes.iter().any(|o| o.critical && !o.healthy) {
            HealthStatus::Unhealthy
        } else if self.outcomes.iter().any(|o| !o.healthy) {
            HealthStatus::Degraded
        } else {
            HealthStatus::Healthy
        }
    }

    pub fn all_critical_healthy(&self) -> bool {
        self.outcomes.iter().all(|o| !o.critical || o.healthy)
    }

    pub fn status_line(&self, name: &str) -> String {
        match self.outcomes.iter().find(|o| o.name == name) {
            Some(outcome) if outcome.healthy => "connected".to_string(),
            Some(_) => "unreachable".to_string(),
            None => "unconfigured".to_string(),
        }
    }
}

// Response models, shaped per the OpenAPI contract.

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub service: String,
    pub version: String,
    pub environment: String,
    pub database: String,
    pub cache: String,
    pub timestamp: f64,
    pub uptime: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReadinessStatus {
    pub status: String,
    pub service: String,
    pub timestamp: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LivenessStatus {
    pub status: String,
    pub service: String,
    pub timestamp: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SystemMetrics {
    pub http_requests_total: u64,
    pub http_request_duration_seconds: f64,
    pub database_connections_active: u64,
    pub memory_usage_bytes: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiInfo {
    pub message: String,
    pub version: String,
    pub status: String,
    pub environment: String,
    pub timestamp: f64,
}
