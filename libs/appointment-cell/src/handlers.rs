use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use chrono::NaiveDate;
use tracing::info;

use shared_models::error::ApiError;
use shared_models::validation::DATE_FORMAT;
use shared_models::CreateAppointmentRequest;
use shared_store::ClinicStore;

use crate::models::{AppointmentCreateResponse, AppointmentsList, ListAppointmentsQuery};

#[axum::debug_handler]
pub async fn list_appointments(
    State(store): State<Arc<ClinicStore>>,
    query: Result<Query<ListAppointmentsQuery>, QueryRejection>,
) -> Result<Json<AppointmentsList>, ApiError> {
    let Query(query) = query?;

    let patient_id = match query.patient_id {
        Some(id) if id < 1 => {
            return Err(ApiError::InvalidParameter(format!(
                "patient_id must be a positive integer, got {id}"
            )));
        }
        Some(id) => Some(id as u64),
        None => None,
    };

    let date = match query.date.as_deref() {
        Some(raw) => Some(NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
            ApiError::InvalidParameter(format!("date must be formatted YYYY-MM-DD, got {raw:?}"))
        })?),
        None => None,
    };

    let (appointments, total) = store.list_appointments(patient_id, date).await;
    Ok(Json(AppointmentsList { appointments, total }))
}

#[axum::debug_handler]
pub async fn create_appointment(
    State(store): State<Arc<ClinicStore>>,
    body: Result<Json<CreateAppointmentRequest>, JsonRejection>,
) -> Result<Json<AppointmentCreateResponse>, ApiError> {
    let Json(request) = body?;

    let appointment = store.create_appointment(request).await?;
    info!(
        "created appointment {} for patient {}",
        appointment.id, appointment.patient_id
    );

    Ok(Json(AppointmentCreateResponse {
        message: "Appointment created successfully".to_string(),
        appointment,
    }))
}
