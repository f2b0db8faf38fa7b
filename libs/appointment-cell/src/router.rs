use std::sync::Arc;

use axum::{routing::get, Router};

use shared_store::ClinicStore;

use crate::handlers::{create_appointment, list_appointments};

pub fn appointment_routes(store: Arc<ClinicStore>) -> Router {
    Router::new()
        .route("/", get(list_appointments).post(create_appointment))
        .with_state(store)
}
