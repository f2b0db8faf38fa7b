//! In-process repository for patients and appointments.
//!
//! The store is the only shared mutable state in the service. It is owned
//! explicitly and passed to handlers as `Arc<ClinicStore>`, never held as a
//! global, so every test can run against its own instance.

use chrono::NaiveDate;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;

use shared_models::error::ApiError;
use shared_models::validation::{self, FieldViolation};
use shared_models::{Appointment, CreateAppointmentRequest, CreatePatientRequest, Patient};

pub const DEFAULT_PAGE_SIZE: i64 = 50;
pub const MAX_PAGE_SIZE: i64 = 100;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("patient {0} does not exist")]
    UnknownPatient(u64),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(violations) => ApiError::Validation(violations),
            StoreError::InvalidParameter(message) => ApiError::InvalidParameter(message),
            StoreError::UnknownPatient(id) => ApiError::UnknownPatient(id),
        }
    }
}

#[derive(Debug, Default)]
struct StoreInner {
    patients: Vec<Patient>,
    appointments: Vec<Appointment>,
    last_patient_id: u64,
    last_appointment_id: u64,
}

#[derive(Debug, Default)]
pub struct ClinicStore {
    inner: RwLock<StoreInner>,
}

impl ClinicStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates, assigns the next patient id, and inserts. Validation runs
    /// before the write lock is taken so a rejected payload never consumes
    /// an identifier; id assignment and insertion share one lock acquisition
    /// so concurrent creations cannot observe or reuse the same id.
    pub async fn create_patient(
        &self,
        request: CreatePatientRequest,
    ) -> Result<Patient, StoreError> {
        let fields = validation::validate_patient(&request).map_err(StoreError::Validation)?;

        let mut inner = self.inner.write().await;
        inner.last_patient_id += 1;
        let patient = fields.into_patient(inner.last_patient_id);
        inner.patients.push(patient.clone());
        debug!("created patient {}", patient.id);
        Ok(patient)
    }

    /// Returns a slice of patients in insertion order plus the total count
    /// irrespective of the pagination window.
    pub async fn list_patients(
        &self,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<(Vec<Patient>, u64), StoreError> {
        let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE);
        if !(1..=MAX_PAGE_SIZE).contains(&limit) {
            return Err(StoreError::InvalidParameter(format!(
                "limit must be between 1 and {MAX_PAGE_SIZE}, got {limit}"
            )));
        }
        let offset = offset.unwrap_or(0);
        if offset < 0 {
            return Err(StoreError::InvalidParameter(format!(
                "offset must be non-negative, got {offset}"
            )));
        }

        let inner = self.inner.read().await;
        let total = inner.patients.len() as u64;
        let items = inner
            .patients
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect();
        Ok((items, total))
    }

    /// Same contract as patient creation, plus the referential check: the
    /// referenced patient must already exist or the appointment is rejected.
    pub async fn create_appointment(
        &self,
        request: CreateAppointmentRequest,
    ) -> Result<Appointment, StoreError> {
        let fields = validation::validate_appointment(&request).map_err(StoreError::Validation)?;

        let mut inner = self.inner.write().await;
        if !inner.patients.iter().any(|p| p.id == fields.patient_id) {
            return Err(StoreError::UnknownPatient(fields.patient_id));
        }
        inner.last_appointment_id += 1;
        let appointment = fields.into_appointment(inner.last_appointment_id);
        inner.appointments.push(appointment.clone());
        debug!(
            "created appointment {} for patient {}",
            appointment.id, appointment.patient_id
        );
        Ok(appointment)
    }

    /// Both filters are optional and combine with logical AND; an absent
    /// filter matches everything.
    pub async fn list_appointments(
        &self,
        patient_id: Option<u64>,
        date: Option<NaiveDate>,
    ) -> (Vec<Appointment>, u64) {
        let inner = self.inner.read().await;
        let items: Vec<Appointment> = inner
            .appointments
            .iter()
            .filter(|a| patient_id.map_or(true, |id| a.patient_id == id))
            .filter(|a| date.map_or(true, |d| a.date == d))
            .cloned()
            .collect();
        let total = items.len() as u64;
        (items, total)
    }
}
