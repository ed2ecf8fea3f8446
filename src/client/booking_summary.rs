//! Everything the caller has booked, across all of their pets.
//!
//! The caller's pets are fetched first; then, for every pet at once, its
//! service bookings and its boarding reservations. A pet whose request fails
//! contributes nothing and is reported as [`FetchOutcome::Failed`] instead of
//! failing the whole summary.

use async_trait::async_trait;
use futures::future::join_all;
use serde::{Deserialize, Serialize};

use super::{error::ServiceError, http::HttpClient, services};
use crate::models::{
    boarding_reservation::BoardingReservation, pet::Pet, service_booking::ServiceBooking,
};

/// Where the summary reads from; [`HttpClient`] in production
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingSource: Send + Sync {
    async fn my_pets(&self) -> Result<Vec<Pet>, ServiceError>;

    async fn service_bookings_by_pet(
        &self,
        pet_id: &str,
    ) -> Result<Vec<ServiceBooking>, ServiceError>;

    async fn boarding_reservations_by_pet(
        &self,
        pet_id: &str,
    ) -> Result<Vec<BoardingReservation>, ServiceError>;
}

#[async_trait]
impl BookingSource for HttpClient {
    async fn my_pets(&self) -> Result<Vec<Pet>, ServiceError> {
        services::pet::get_my_pets(self).await
    }

    async fn service_bookings_by_pet(
        &self,
        pet_id: &str,
    ) -> Result<Vec<ServiceBooking>, ServiceError> {
        services::service_booking::get_service_bookings_by_pet(self, pet_id).await
    }

    async fn boarding_reservations_by_pet(
        &self,
        pet_id: &str,
    ) -> Result<Vec<BoardingReservation>, ServiceError> {
        services::boarding_reservation::get_boarding_reservations_by_pet(self, pet_id).await
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", content = "detail", rename_all = "camelCase")]
pub enum FetchOutcome {
    /// Number of rows the request returned
    Loaded(usize),
    Failed(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PetOutcome {
    pub pet_id: String,
    pub service_bookings: FetchOutcome,
    pub boarding_reservations: FetchOutcome,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserBookings {
    /// Latest `booking_date` first
    pub service_bookings: Vec<ServiceBooking>,
    /// Latest `start_date` first
    pub boarding_reservations: Vec<BoardingReservation>,
    pub pet_outcomes: Vec<PetOutcome>,
}

impl UserBookings {
    pub fn has_failures(&self) -> bool {
        self.pet_outcomes.iter().any(|outcome| {
            matches!(outcome.service_bookings, FetchOutcome::Failed(_))
                || matches!(outcome.boarding_reservations, FetchOutcome::Failed(_))
        })
    }
}

fn collect_into<T>(
    pet_id: &str,
    kind: &str,
    result: Result<Vec<T>, ServiceError>,
    into: &mut Vec<T>,
) -> FetchOutcome {
    match result {
        Ok(rows) => {
            let count = rows.len();
            into.extend(rows);
            FetchOutcome::Loaded(count)
        }
        Err(e) => {
            log::warn!("failed to fetch {kind} for pet {pet_id}: {e}");
            FetchOutcome::Failed(e.message)
        }
    }
}

/// Collects the caller's service bookings and boarding reservations.
///
/// # Errors
/// Only a failure to list the caller's pets is returned; per-pet failures
/// end up in [`UserBookings::pet_outcomes`].
pub async fn get_user_bookings<S>(source: &S) -> Result<UserBookings, ServiceError>
where
    S: BookingSource + ?Sized,
{
    let pets = source.my_pets().await?;
    if pets.is_empty() {
        return Ok(UserBookings::default());
    }

    let service_requests = join_all(
        pets.iter()
            .map(|pet| source.service_bookings_by_pet(&pet.id)),
    );
    let boarding_requests = join_all(
        pets.iter()
            .map(|pet| source.boarding_reservations_by_pet(&pet.id)),
    );
    let (service_results, boarding_results) = futures::join!(service_requests, boarding_requests);

    let mut summary = UserBookings::default();
    for ((pet, services), boarding) in pets.iter().zip(service_results).zip(boarding_results) {
        let service_outcome = collect_into(
            &pet.id,
            "service bookings",
            services,
            &mut summary.service_bookings,
        );
        let boarding_outcome = collect_into(
            &pet.id,
            "boarding reservations",
            boarding,
            &mut summary.boarding_reservations,
        );

        summary.pet_outcomes.push(PetOutcome {
            pet_id: pet.id.clone(),
            service_bookings: service_outcome,
            boarding_reservations: boarding_outcome,
        });
    }

    summary
        .service_bookings
        .sort_by(|a, b| b.booking_date.cmp(&a.booking_date));
    summary
        .boarding_reservations
        .sort_by(|a, b| b.start_date.cmp(&a.start_date));

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn pet(id: &str) -> Pet {
        Pet {
            id: id.into(),
            owner_id: "u-1".into(),
            ..Default::default()
        }
    }

    fn booking(id: &str, pet_id: &str, day: u32) -> ServiceBooking {
        ServiceBooking {
            id: id.into(),
            pet_id: pet_id.into(),
            booking_date: Utc.with_ymd_and_hms(2026, 4, day, 9, 0, 0).unwrap(),
            ..Default::default()
        }
    }

    fn reservation(id: &str, pet_id: &str, day: u32) -> BoardingReservation {
        BoardingReservation {
            id: id.into(),
            pet_id: pet_id.into(),
            start_date: Utc.with_ymd_and_hms(2026, 5, day, 12, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2026, 5, day + 2, 12, 0, 0).unwrap(),
            ..Default::default()
        }
    }

    fn service_error(message: &str) -> ServiceError {
        ServiceError {
            message: message.into(),
            status: Some(500),
        }
    }

    #[ntex::test]
    async fn test_zero_pets_skips_per_pet_requests() {
        let mut source = MockBookingSource::new();
        source.expect_my_pets().times(1).returning(|| Ok(vec![]));
        source.expect_service_bookings_by_pet().never();
        source.expect_boarding_reservations_by_pet().never();

        let summary = get_user_bookings(&source).await.unwrap();

        assert!(summary.service_bookings.is_empty());
        assert!(summary.boarding_reservations.is_empty());
        assert!(summary.pet_outcomes.is_empty());
    }

    #[ntex::test]
    async fn test_pets_failure_propagates() {
        let mut source = MockBookingSource::new();
        source
            .expect_my_pets()
            .returning(|| Err(service_error("Failed to fetch pets")));

        let err = get_user_bookings(&source).await.unwrap_err();
        assert_eq!(err.message, "Failed to fetch pets");
    }

    #[ntex::test]
    async fn test_failing_pet_contributes_nothing() {
        let mut source = MockBookingSource::new();
        source
            .expect_my_pets()
            .returning(|| Ok(vec![pet("pet-1"), pet("pet-2"), pet("pet-3")]));
        source
            .expect_service_bookings_by_pet()
            .times(3)
            .returning(|pet_id| match pet_id {
                "pet-1" => Ok(vec![booking("sb-1", "pet-1", 3)]),
                "pet-2" => Err(service_error("Failed to fetch service bookings for pet")),
                _ => Ok(vec![booking("sb-3", "pet-3", 20), booking("sb-4", "pet-3", 1)]),
            });
        source
            .expect_boarding_reservations_by_pet()
            .times(3)
            .returning(|pet_id| match pet_id {
                "pet-2" => Err(service_error("Failed to fetch boarding reservations for pet")),
                other => Ok(vec![reservation(&format!("br-{other}"), other, 4)]),
            });

        let summary = get_user_bookings(&source).await.unwrap();

        let booking_ids: Vec<&str> = summary.service_bookings.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(booking_ids, vec!["sb-3", "sb-1", "sb-4"]);
        assert_eq!(summary.boarding_reservations.len(), 2);
        assert!(summary.boarding_reservations.iter().all(|r| r.pet_id != "pet-2"));

        assert!(summary.has_failures());
        assert_eq!(
            summary.pet_outcomes[1],
            PetOutcome {
                pet_id: "pet-2".into(),
                service_bookings: FetchOutcome::Failed(
                    "Failed to fetch service bookings for pet".into()
                ),
                boarding_reservations: FetchOutcome::Failed(
                    "Failed to fetch boarding reservations for pet".into()
                ),
            }
        );
        assert_eq!(summary.pet_outcomes[2].service_bookings, FetchOutcome::Loaded(2));
    }

    #[ntex::test]
    async fn test_reservations_sorted_by_start_date_desc() {
        let mut source = MockBookingSource::new();
        source
            .expect_my_pets()
            .returning(|| Ok(vec![pet("pet-1"), pet("pet-2")]));
        source
            .expect_service_bookings_by_pet()
            .returning(|_| Ok(vec![]));
        source
            .expect_boarding_reservations_by_pet()
            .returning(|pet_id| match pet_id {
                "pet-1" => Ok(vec![reservation("br-early", "pet-1", 2)]),
                _ => Ok(vec![reservation("br-late", "pet-2", 15)]),
            });

        let summary = get_user_bookings(&source).await.unwrap();

        let ids: Vec<&str> = summary
            .boarding_reservations
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["br-late", "br-early"]);
        assert!(!summary.has_failures());
    }

    #[test]
    fn test_outcome_serialization() {
        assert_eq!(
            serde_json::to_value(FetchOutcome::Loaded(2)).unwrap(),
            serde_json::json!({ "status": "loaded", "detail": 2 })
        );
    }
}
