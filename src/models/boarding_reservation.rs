use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{booking::BookingStatus, pet::PetSummary, room::Room};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BoardingReservation {
    pub id: String,
    pub pet_id: String,
    pub room_id: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: BookingStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub pet: Option<PetSummary>,
    pub room: Option<Room>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BoardingReservationPayload {
    pub pet_id: String,
    pub room_id: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub notes: Option<String>,
}

impl BoardingReservationPayload {
    pub fn dates_are_valid(&self) -> bool {
        self.start_date < self.end_date
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BoardingReservationUpdate {
    pub room_id: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub status: Option<BookingStatus>,
    pub notes: Option<String>,
}
