use serde::{Deserialize, Serialize};

use shared_models::Patient;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListPatientsQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct PatientsList {
    pub patients: Vec<Patient>,
    pub total: u64,
}

#[derive(Debug, Serialize)]
pub struct PatientCreateResponse {
    pub message: String,
    pub patient: Patient,
}
