use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::medicine::Medicine;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MedicationPackage {
    pub id: String,
    pub medicine_id: String,
    pub package_name: String,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub batch_number: Option<String>,
    pub expiry_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub medicine: Option<Medicine>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MedicationPackagePayload {
    pub medicine_id: String,
    pub package_name: String,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub batch_number: Option<String>,
    pub expiry_date: Option<NaiveDate>,
}

impl MedicationPackagePayload {
    pub fn fields_are_valid(&self) -> bool {
        !self.medicine_id.trim().is_empty()
            && !self.package_name.trim().is_empty()
            && self.quantity >= 0
            && self.unit_price >= Decimal::ZERO
    }
}
