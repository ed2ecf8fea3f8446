use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Medicine {
    pub id: String,
    pub name: String,
    pub concentration: Option<String>,
    pub unit: Option<String>,
    pub description: Option<String>,
    pub manufacturer: Option<String>,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MedicinePayload {
    pub name: String,
    pub concentration: Option<String>,
    pub unit: Option<String>,
    pub description: Option<String>,
    pub manufacturer: Option<String>,
    pub price: Option<Decimal>,
}

impl MedicinePayload {
    pub fn fields_are_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.price.is_none_or(|p| p >= Decimal::ZERO)
    }
}
