use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::medication_package::MedicationPackage;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    pub id: String,
    pub pet_id: String,
    pub diagnosis: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    pub id: String,
    pub medical_record_id: String,
    pub notes: Option<String>,
    pub prescribed_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub details: Vec<PrescriptionDetail>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionPayload {
    pub medical_record_id: String,
    pub notes: Option<String>,
    pub prescribed_at: Option<DateTime<Utc>>,
}

/// One medication package prescribed, keyed by (prescription, package)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionDetail {
    pub prescription_id: String,
    pub medication_package_id: String,
    pub quantity: i64,
    pub dosage: String,
    pub instructions: Option<String>,
    pub medication_package: Option<MedicationPackage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionDetailPayload {
    pub prescription_id: String,
    pub medication_package_id: String,
    pub quantity: i64,
    pub dosage: String,
    pub instructions: Option<String>,
}

impl PrescriptionDetailPayload {
    pub fn fields_are_valid(&self) -> bool {
        !self.prescription_id.trim().is_empty()
            && !self.medication_package_id.trim().is_empty()
            && self.quantity > 0
            && !self.dosage.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionDetailUpdate {
    pub quantity: Option<i64>,
    pub dosage: Option<String>,
    pub instructions: Option<String>,
}
