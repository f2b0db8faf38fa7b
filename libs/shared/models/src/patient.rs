use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: u64,
    pub name: String,
    pub age: i32,
    pub email: String,
    pub phone: Option<String>,
}

/// Creation payload. Every field is optional at the serde level so the
/// validation layer can report `missing` per field instead of failing on the
/// first absent one during deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePatientRequest {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Patient fields that passed validation, ready for id assignment.
#[derive(Debug, Clone)]
pub struct NewPatient {
    pub name: String,
    pub age: i32,
    pub email: String,
    pub phone: Option<String>,
}

impl NewPatient {
    pub fn into_patient(self, id: u64) -> Patient {
        Patient {
            id,
            name: self.name,
            age: self.age,
            email: self.email,
            phone: self.phone,
        }
    }
}
