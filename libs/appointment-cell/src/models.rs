use serde::{Deserialize, Serialize};

use shared_models::Appointment;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListAppointmentsQuery {
    pub patient_id: Option<i64>,
    /// Calendar date filter, `YYYY-MM-DD`.
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AppointmentsList {
    pub appointments: Vec<Appointment>,
    pub total: u64,
}

#[derive(Debug, Serialize)]
pub struct AppointmentCreateResponse {
    pub message: String,
    pub appointment: Appointment,
}
