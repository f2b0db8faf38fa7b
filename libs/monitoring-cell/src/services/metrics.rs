// =====================================================================================
// METRICS RECORDER SERVICE
// =====================================================================================

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::models::SystemMetrics;

const PAGE_SIZE_BYTES: u64 = 4096;

/// Lock-free request accounting. The request counter is monotonically
/// non-decreasing for the process lifetime; the remaining fields are gauges
/// sampled at read time.
#[derive(Debug)]
pub struct MetricsRecorder {
    request_count: AtomicU64,
    last_duration_micros: AtomicU64,
    db_connections_active: AtomicU64,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            request_count: AtomicU64::new(0),
            last_duration_micros: AtomicU64::new(0),
            db_connections_active: AtomicU64::new(0),
        }
    }

    pub fn record_request(&self, duration: Duration) {
        self.request_count.fetch_add(1, Ordering::Relaxed);
        self.last_duration_micros
            .store(duration.as_micros() as u64, Ordering::Relaxed);
    }

    pub fn set_db_connections(&self, active: u64) {
        self.db_connections_active.store(active, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> SystemMetrics {
        SystemMetrics {
            http_requests_total: self.request_count.load(Ordering::Relaxed),
            http_request_duration_seconds: self.last_duration_micros.load(Ordering::Relaxed)
                as f64
                / 1e6,
            database_connections_active: self.db_connections_active.load(Ordering::Relaxed),
            memory_usage_bytes: resident_memory_bytes(),
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

/// Resident set size from procfs; 0 where /proc is unavailable.
fn resident_memory_bytes() -> u64 {
    let Ok(statm) = std::fs::read_to_string("/proc/self/statm") else {
        return 0;
    };
    statm
        .split_whitespace()
        .nth(1)
        .and_then(|pages| pages.parse::<u64>().ok())
        .map_or(0, |pages| pages * PAGE_SIZE_BYTES)
}

/// Axum middleware that feeds the recorder; applied once at the top-level
/// router so every endpoint is counted.
pub async fn track_requests(
    State(metrics): State<Arc<MetricsRecorder>>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let response = next.run(request).await;
    metrics.record_request(start.elapsed());
    response
}
