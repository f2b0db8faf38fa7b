pub mod appointment;
pub mod error;
pub mod patient;
pub mod validation;

pub use appointment::{Appointment, CreateAppointmentRequest, NewAppointment};
pub use error::ApiError;
pub use patient::{CreatePatientRequest, NewPatient, Patient};
pub use validation::{FieldViolation, ViolationKind};
