//! Pure field validation for creation payloads.
//!
//! Checks are deterministic and order-stable: violations come out in field
//! declaration order so callers can assert exact error shapes.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;

use crate::appointment::{CreateAppointmentRequest, NewAppointment};
use crate::patient::{CreatePatientRequest, NewPatient};

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_EMAIL_LEN: usize = 255;
pub const MAX_PHONE_LEN: usize = 20;
pub const MAX_NOTES_LEN: usize = 500;
pub const MIN_AGE: i64 = 0;
pub const MAX_AGE: i64 = 150;
pub const MIN_DURATION_MINUTES: i64 = 15;
pub const MAX_DURATION_MINUTES: i64 = 240;
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email pattern")
});

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("valid time pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    Missing,
    TooLong,
    TooShort,
    OutOfRange,
    BadFormat,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldViolation {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: ViolationKind,
}

impl FieldViolation {
    pub fn body(field: &str, kind: ViolationKind, msg: impl Into<String>) -> Self {
        Self {
            loc: vec!["body".to_string(), field.to_string()],
            msg: msg.into(),
            kind,
        }
    }

    pub fn field(&self) -> &str {
        self.loc.last().map(String::as_str).unwrap_or_default()
    }
}

fn check_text(
    violations: &mut Vec<FieldViolation>,
    field: &str,
    value: Option<&String>,
    max_len: usize,
    required: bool,
) -> Option<String> {
    match value {
        None => {
            if required {
                violations.push(FieldViolation::body(
                    field,
                    ViolationKind::Missing,
                    "field required",
                ));
            }
            None
        }
        Some(text) => {
            let mut ok = true;
            if required && text.is_empty() {
                violations.push(FieldViolation::body(
                    field,
                    ViolationKind::TooShort,
                    format!("{field} must not be empty"),
                ));
                ok = false;
            }
            if text.chars().count() > max_len {
                violations.push(FieldViolation::body(
                    field,
                    ViolationKind::TooLong,
                    format!("{field} must be at most {max_len} characters"),
                ));
                ok = false;
            }
            ok.then(|| text.clone())
        }
    }
}

pub fn validate_patient(request: &CreatePatientRequest) -> Result<NewPatient, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let name = check_text(&mut violations, "name", request.name.as_ref(), MAX_NAME_LEN, true);

    let age = match request.age {
        None => {
            violations.push(FieldViolation::body("age", ViolationKind::Missing, "field required"));
            None
        }
        Some(age) if !(MIN_AGE..=MAX_AGE).contains(&age) => {
            violations.push(FieldViolation::body(
                "age",
                ViolationKind::OutOfRange,
                format!("age must be between {MIN_AGE} and {MAX_AGE}"),
            ));
            None
        }
        Some(age) => Some(age as i32),
    };

    let email = match request.email.as_ref() {
        None => {
            violations.push(FieldViolation::body("email", ViolationKind::Missing, "field required"));
            None
        }
        Some(email) => {
            let mut ok = true;
            if !EMAIL_RE.is_match(email) {
                violations.push(FieldViolation::body(
                    "email",
                    ViolationKind::BadFormat,
                    "email is not a valid address",
                ));
                ok = false;
            }
            if email.chars().count() > MAX_EMAIL_LEN {
                violations.push(FieldViolation::body(
                    "email",
                    ViolationKind::TooLong,
                    format!("email must be at most {MAX_EMAIL_LEN} characters"),
                ));
                ok = false;
            }
            ok.then(|| email.clone())
        }
    };

    let phone = check_text(&mut violations, "phone", request.phone.as_ref(), MAX_PHONE_LEN, false);

    if violations.is_empty() {
        Ok(NewPatient {
            name: name.expect("validated"),
            age: age.expect("validated"),
            email: email.expect("validated"),
            phone,
        })
    } else {
        Err(violations)
    }
}

pub fn validate_appointment(
    request: &CreateAppointmentRequest,
) -> Result<NewAppointment, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let patient_id = match request.patient_id {
        None => {
            violations.push(FieldViolation::body(
                "patient_id",
                ViolationKind::Missing,
                "field required",
            ));
            None
        }
        Some(id) if id < 1 => {
            violations.push(FieldViolation::body(
                "patient_id",
                ViolationKind::OutOfRange,
                "patient_id must be a positive integer",
            ));
            None
        }
        Some(id) => Some(id as u64),
    };

    let doctor = check_text(&mut violations, "doctor", request.doctor.as_ref(), MAX_NAME_LEN, true);

    let date = match request.date.as_ref() {
        None => {
            violations.push(FieldViolation::body("date", ViolationKind::Missing, "field required"));
            None
        }
        Some(raw) => match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                violations.push(FieldViolation::body(
                    "date",
                    ViolationKind::BadFormat,
                    "date must be a calendar date formatted YYYY-MM-DD",
                ));
                None
            }
        },
    };

    let time = match request.time.as_ref() {
        None => {
            violations.push(FieldViolation::body("time", ViolationKind::Missing, "field required"));
            None
        }
        Some(raw) if !TIME_RE.is_match(raw) => {
            violations.push(FieldViolation::body(
                "time",
                ViolationKind::BadFormat,
                "time must be formatted HH:MM (00-23 hours, 00-59 minutes)",
            ));
            None
        }
        Some(raw) => Some(raw.clone()),
    };

    let duration = match request.duration {
        None => None,
        Some(minutes) if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&minutes) => {
            violations.push(FieldViolation::body(
                "duration",
                ViolationKind::OutOfRange,
                format!(
                    "duration must be between {MIN_DURATION_MINUTES} and {MAX_DURATION_MINUTES} minutes"
                ),
            ));
            None
        }
        Some(minutes) => Some(minutes as i32),
    };

    let notes = check_text(&mut violations, "notes", request.notes.as_ref(), MAX_NOTES_LEN, false);

    if violations.is_empty() {
        Ok(NewAppointment {
            patient_id: patient_id.expect("validated"),
            doctor: doctor.expect("validated"),
            date: date.expect("validated"),
            time: time.expect("validated"),
            duration,
            notes,
        })
    } else {
        Err(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient_request(name: &str, age: i64, email: &str) -> CreatePatientRequest {
        CreatePatientRequest {
            name: Some(name.to_string()),
            age: Some(age),
            email: Some(email.to_string()),
            phone: None,
        }
    }

    fn appointment_request() -> CreateAppointmentRequest {
        CreateAppointmentRequest {
            patient_id: Some(1),
            doctor: Some("Dr. Silva".to_string()),
            date: Some("2025-07-10".to_string()),
            time: Some("10:00".to_string()),
            duration: Some(30),
            notes: None,
        }
    }

    #[test]
    fn accepts_boundary_ages() {
        assert!(validate_patient(&patient_request("Ana", 0, "ana@email.com")).is_ok());
        assert!(validate_patient(&patient_request("Ana", 150, "ana@email.com")).is_ok());
    }

    #[test]
    fn rejects_out_of_range_ages_naming_the_field() {
        for age in [-1, 151] {
            let violations =
                validate_patient(&patient_request("Ana", age, "ana@email.com")).unwrap_err();
            assert_eq!(violations.len(), 1);
            assert_eq!(violations[0].field(), "age");
            assert_eq!(violations[0].kind, ViolationKind::OutOfRange);
        }
    }

    #[test]
    fn enumerates_every_violation_in_declaration_order() {
        let request = CreatePatientRequest {
            name: Some(String::new()),
            age: Some(200),
            email: Some("not-an-email".to_string()),
            phone: Some("x".repeat(MAX_PHONE_LEN + 1)),
        };

        let violations = validate_patient(&request).unwrap_err();
        let fields: Vec<&str> = violations.iter().map(FieldViolation::field).collect();
        assert_eq!(fields, ["name", "age", "email", "phone"]);
        assert_eq!(violations[0].kind, ViolationKind::TooShort);
        assert_eq!(violations[1].kind, ViolationKind::OutOfRange);
        assert_eq!(violations[2].kind, ViolationKind::BadFormat);
        assert_eq!(violations[3].kind, ViolationKind::TooLong);
    }

    #[test]
    fn reports_missing_required_fields() {
        let violations = validate_patient(&CreatePatientRequest::default()).unwrap_err();
        let fields: Vec<&str> = violations.iter().map(FieldViolation::field).collect();
        assert_eq!(fields, ["name", "age", "email"]);
        assert!(violations.iter().all(|v| v.kind == ViolationKind::Missing));
    }

    #[test]
    fn accepts_valid_appointment() {
        let appointment = validate_appointment(&appointment_request()).unwrap();
        assert_eq!(appointment.patient_id, 1);
        assert_eq!(appointment.time, "10:00");
    }

    #[test]
    fn rejects_bad_time_formats() {
        for time in ["24:00", "10:60", "9:00", "10h30", "10:0"] {
            let mut request = appointment_request();
            request.time = Some(time.to_string());
            let violations = validate_appointment(&request).unwrap_err();
            assert_eq!(violations[0].field(), "time");
            assert_eq!(violations[0].kind, ViolationKind::BadFormat);
        }
    }

    #[test]
    fn accepts_boundary_times() {
        for time in ["00:00", "23:59"] {
            let mut request = appointment_request();
            request.time = Some(time.to_string());
            assert!(validate_appointment(&request).is_ok());
        }
    }

    #[test]
    fn rejects_malformed_dates() {
        for date in ["2025-13-01", "2025-02-30", "10-07-2025", "yesterday"] {
            let mut request = appointment_request();
            request.date = Some(date.to_string());
            let violations = validate_appointment(&request).unwrap_err();
            assert_eq!(violations[0].field(), "date");
            assert_eq!(violations[0].kind, ViolationKind::BadFormat);
        }
    }

    #[test]
    fn rejects_out_of_range_duration() {
        for minutes in [14, 241] {
            let mut request = appointment_request();
            request.duration = Some(minutes);
            let violations = validate_appointment(&request).unwrap_err();
            assert_eq!(violations[0].field(), "duration");
            assert_eq!(violations[0].kind, ViolationKind::OutOfRange);
        }
        for minutes in [15, 240] {
            let mut request = appointment_request();
            request.duration = Some(minutes);
            assert!(validate_appointment(&request).is_ok());
        }
    }

    #[test]
    fn violations_serialize_with_contract_field_names() {
        let violations = validate_patient(&CreatePatientRequest::default()).unwrap_err();
        let json = serde_json::to_value(&violations[0]).unwrap();
        assert_eq!(json["loc"], serde_json::json!(["body", "name"]));
        assert_eq!(json["type"], "missing");
        assert!(json["msg"].is_string());
    }
}
