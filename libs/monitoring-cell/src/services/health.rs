// =====================================================================================
// HEALTH MONITOR SERVICE
// =====================================================================================

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, instrument, warn};

use shared_config::AppConfig;
use shared_models::error::unix_timestamp;

use crate::models::{
    ApiInfo, DependencySnapshot, HealthReport, LivenessStatus, ProbeOutcome, ReadinessStatus,
};
use crate::services::metrics::MetricsRecorder;
use crate::services::probe::{DependencyProbe, RedisProbe, TcpProbe};

const POSTGRES_DEFAULT_PORT: u16 = 5432;

/// Probes every dependency with a bounded timeout and derives health,
/// readiness, and liveness answers from one snapshot. Holds no mutable
/// dependency state: each question is answered from fresh probe results, so
/// recovery is observed as soon as a dependency is back.
pub struct HealthMonitor {
    config: AppConfig,
    probes: Vec<Arc<dyn DependencyProbe>>,
    probe_timeout: Duration,
    started_at: Instant,
    metrics: Arc<MetricsRecorder>,
}

impl HealthMonitor {
    pub fn new(config: &AppConfig, metrics: Arc<MetricsRecorder>) -> Self {
        let mut probes: Vec<Arc<dyn DependencyProbe>> = vec![Arc::new(TcpProbe::from_url(
            "database",
            &config.database_url,
            POSTGRES_DEFAULT_PORT,
            true,
        ))];

        match RedisProbe::new("cache", &config.redis_url, false) {
            Ok(probe) => probes.push(Arc::new(probe)),
            Err(err) => warn!("cache probe disabled, REDIS_URL is invalid: {err}"),
        }

        Self::with_probes(config, metrics, probes)
    }

    pub fn with_probes(
        config: &AppConfig,
        metrics: Arc<MetricsRecorder>,
        probes: Vec<Arc<dyn DependencyProbe>>,
    ) -> Self {
        Self {
            config: config.clone(),
            probes,
            probe_timeout: config.probe_timeout(),
            started_at: Instant::now(),
            metrics,
        }
    }

    /// Runs every probe, each bounded by the configured timeout so a hung
    /// dependency reports as a failure instead of hanging the endpoint.
    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> DependencySnapshot {
        let mut outcomes = Vec::with_capacity(self.probes.len());

        for probe in &self.probes {
            let start = Instant::now();
            let result = tokio::time::timeout(self.probe_timeout, probe.check()).await;
            let latency_ms = start.elapsed().as_millis() as u64;

            let outcome = match result {
                Ok(Ok(())) => ProbeOutcome {
                    name: probe.name().to_string(),
                    critical: probe.critical(),
                    healthy: true,
                    latency_ms,
                    error: None,
                },
                Ok(Err(err)) => ProbeOutcome {
                    name: probe.name().to_string(),
                    critical: probe.critical(),
                    healthy: false,
                    latency_ms,
                    error: Some(err.to_string()),
                },
                Err(_) => ProbeOutcome {
                    name: probe.name().to_string(),
                    critical: probe.critical(),
                    healthy: false,
                    latency_ms,
                    error: Some(format!("timed out after {:?}", self.probe_timeout)),
                },
            };

            if !outcome.healthy {
                debug!("probe {} failed: {:?}", outcome.name, outcome.error);
            }
            outcomes.push(outcome);
        }

        let snapshot = DependencySnapshot { outcomes };
        if let Some(database) = snapshot.outcomes.iter().find(|o| o.name == "database") {
            self.metrics.set_db_connections(u64::from(database.healthy));
        }
        snapshot
    }

    pub async fn health(&self) -> HealthReport {
        let snapshot = self.snapshot().await;
        HealthReport {
            status: snapshot.overall_status(),
            service: self.config.service_name.clone(),
            version: self.config.version.clone(),
            environment: self.config.environment.clone(),
            database: snapshot.status_line("database"),
            cache: snapshot.status_line("cache"),
            timestamp: unix_timestamp(),
            uptime: self.uptime_seconds(),
        }
    }

    pub async fn ready(&self) -> ReadinessStatus {
        let snapshot = self.snapshot().await;
        let status = if snapshot.all_critical_healthy() {
            "ready"
        } else {
            "not_ready"
        };
        ReadinessStatus {
            status: status.to_string(),
            service: self.config.service_name.clone(),
            timestamp: unix_timestamp(),
        }
    }

    /// Liveness never touches dependencies: answering at all is the proof.
    pub fn live(&self) -> LivenessStatus {
        LivenessStatus {
            status: "alive".to_string(),
            service: self.config.service_name.clone(),
            timestamp: unix_timestamp(),
        }
    }

    pub fn api_info(&self) -> ApiInfo {
        ApiInfo {
            message: format!("{} is running", self.config.service_name),
            version: self.config.version.clone(),
            status: "operational".to_string(),
            environment: self.config.environment.clone(),
            timestamp: unix_timestamp(),
        }
    }

    pub fn uptime_seconds(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}
