use std::sync::Arc;

use axum::{routing::get, Router};

use shared_store::ClinicStore;

use crate::handlers::{create_patient, list_patients};

pub fn patient_routes(store: Arc<ClinicStore>) -> Router {
    Router::new()
        .route("/", get(list_patients).post(create_patient))
        .with_state(store)
}
