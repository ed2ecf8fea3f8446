use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    booking::{BookingStatus, ServiceOption},
    pet::PetSummary,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceBooking {
    pub id: String,
    pub pet_id: String,
    pub service_option_id: String,
    pub booking_date: DateTime<Utc>,
    pub status: BookingStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub pet: Option<PetSummary>,
    pub service_option: Option<ServiceOption>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceBookingPayload {
    pub pet_id: String,
    pub service_option_id: String,
    pub booking_date: DateTime<Utc>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceBookingUpdate {
    pub booking_date: Option<DateTime<Utc>>,
    pub status: Option<BookingStatus>,
    pub notes: Option<String>,
}
