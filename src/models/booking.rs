use derive_more::Display;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle shared by service bookings and boarding reservations.
///
/// PENDING -> CONFIRMED -> COMPLETED | CANCELLED. Transitions are asserted
/// (logged) rather than enforced.
#[derive(Debug, Display, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "TEXT", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    #[default]
    #[display("PENDING")]
    Pending,
    #[display("CONFIRMED")]
    Confirmed,
    #[display("COMPLETED")]
    Completed,
    #[display("CANCELLED")]
    Cancelled,
}

impl BookingStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }

    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        match self {
            BookingStatus::Pending => next != BookingStatus::Pending,
            BookingStatus::Confirmed => {
                matches!(next, BookingStatus::Completed | BookingStatus::Cancelled)
            }
            BookingStatus::Completed | BookingStatus::Cancelled => false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOption {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub duration_minutes: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOptionPayload {
    pub name: String,
    pub price: Decimal,
    pub duration_minutes: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_status_transitions() {
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Confirmed));
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Cancelled));
        assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::Completed));
        assert!(!BookingStatus::Confirmed.can_transition_to(BookingStatus::Pending));
        assert!(!BookingStatus::Cancelled.can_transition_to(BookingStatus::Confirmed));
        assert!(BookingStatus::Completed.is_terminal());
    }

    #[test]
    fn test_booking_status_serialization() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::Cancelled).unwrap(),
            "\"CANCELLED\""
        );
        assert_eq!(BookingStatus::Confirmed.to_string(), "CONFIRMED");
    }
}
