use std::sync::Arc;

use axum::{middleware, Router};

use appointment_cell::appointment_routes;
use monitoring_cell::{monitoring_routes, track_requests, MonitoringState};
use patient_cell::patient_routes;
use shared_config::AppConfig;
use shared_store::ClinicStore;

pub fn create_router(config: Arc<AppConfig>, store: Arc<ClinicStore>) -> Router {
    let monitoring = Arc::new(MonitoringState::new(&config));
    let metrics = monitoring.metrics();

    Router::new()
        .merge(monitoring_routes(monitoring))
        .nest("/api/v1/patients", patient_routes(store.clone()))
        .nest("/api/v1/appointments", appointment_routes(store))
        .layer(middleware::from_fn_with_state(metrics, track_requests))
}
