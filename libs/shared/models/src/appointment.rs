use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u64,
    pub patient_id: u64,
    pub doctor: String,
    pub date: NaiveDate,
    /// Wall-clock time of day, `HH:MM`.
    pub time: String,
    pub duration: Option<i32>,
    pub notes: Option<String>,
}

/// Creation payload; see [`crate::patient::CreatePatientRequest`] for why
/// every field is optional. `date` and `time` arrive as raw strings so the
/// validation layer owns format reporting.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAppointmentRequest {
    pub patient_id: Option<i64>,
    pub doctor: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub duration: Option<i64>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub patient_id: u64,
    pub doctor: String,
    pub date: NaiveDate,
    pub time: String,
    pub duration: Option<i32>,
    pub notes: Option<String>,
}

impl NewAppointment {
    pub fn into_appointment(self, id: u64) -> Appointment {
        Appointment {
            id,
            patient_id: self.patient_id,
            doctor: self.doctor,
            date: self.date,
            time: self.time,
            duration: self.duration,
            notes: self.notes,
        }
    }
}
