use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use tracing::info;

use shared_models::error::ApiError;
use shared_models::CreatePatientRequest;
use shared_store::ClinicStore;

use crate::models::{ListPatientsQuery, PatientCreateResponse, PatientsList};

#[axum::debug_handler]
pub async fn list_patients(
    State(store): State<Arc<ClinicStore>>,
    query: Result<Query<ListPatientsQuery>, QueryRejection>,
) -> Result<Json<PatientsList>, ApiError> {
    let Query(query) = query?;

    let (patients, total) = store.list_patients(query.limit, query.offset).await?;
    Ok(Json(PatientsList { patients, total }))
}

#[axum::debug_handler]
pub async fn create_patient(
    State(store): State<Arc<ClinicStore>>,
    body: Result<Json<CreatePatientRequest>, JsonRejection>,
) -> Result<Json<PatientCreateResponse>, ApiError> {
    let Json(request) = body?;

    let patient = store.create_patient(request).await?;
    info!("created patient {}", patient.id);

    Ok(Json(PatientCreateResponse {
        message: "Patient created successfully".to_string(),
        patient,
    }))
}
