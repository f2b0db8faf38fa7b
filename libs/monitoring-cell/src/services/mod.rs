pub mod health;
pub mod metrics;
pub mod probe;

pub use health::HealthMonitor;
pub use metrics::{track_requests, MetricsRecorder};
pub use probe::{DependencyProbe, RedisProbe, TcpProbe};
