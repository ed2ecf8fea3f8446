use chrono::{DateTime, Utc};
use derive_more::Display;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Display, Clone, Default, Deserialize, Serialize, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "TEXT", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomType {
    #[default]
    #[display("STANDARD")]
    Standard,
    #[display("DELUXE")]
    Deluxe,
    #[display("ISOLATION")]
    Isolation,
}

#[derive(Debug, Display, Clone, Default, Deserialize, Serialize, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "TEXT", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomStatus {
    #[default]
    #[display("AVAILABLE")]
    Available,
    #[display("OCCUPIED")]
    Occupied,
    #[display("MAINTENANCE")]
    Maintenance,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub name: String,
    pub room_type: RoomType,
    pub capacity: i64,
    pub price_per_day: Decimal,
    pub status: RoomStatus,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoomPayload {
    pub name: String,
    #[serde(default)]
    pub room_type: RoomType,
    pub capacity: i64,
    pub price_per_day: Decimal,
    #[serde(default)]
    pub status: RoomStatus,
    pub description: Option<String>,
}

impl RoomPayload {
    pub fn fields_are_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.capacity > 0 && self.price_per_day >= Decimal::ZERO
    }
}

/// Optional stay window used to look up free rooms
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AvailabilityWindow {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

impl AvailabilityWindow {
    /// Both bounds set and ordered, or neither set
    pub fn is_valid(&self) -> bool {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => start < end,
            (None, None) => true,
            _ => false,
        }
    }
}
