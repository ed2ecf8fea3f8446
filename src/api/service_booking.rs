//! # Service Booking API Module
//!
//! Appointments for a clinic service (grooming, check-up, vaccination, ...)
//! booked for one pet.
//!
//! Status changes follow `PENDING -> CONFIRMED -> COMPLETED | CANCELLED`.
//! Invalid transitions are logged as warnings but still written.

use crate::{metric, models, repo, utils};
use chrono::Utc;
use uuid::Uuid;

use super::{invalid, not_found};
use models::booking::BookingStatus;

const BOOKING_KIND: &str = "service_booking";

/// Logs a warning when `current -> next` is not a forward transition
pub(crate) fn assert_transition(kind: &str, id: &str, current: BookingStatus, next: BookingStatus) {
    if current != next && !current.can_transition_to(next) {
        log::warn!("{kind} {id}: unexpected status transition {current} -> {next}");
    }
}

pub async fn list_service_bookings(
    pagination: &models::pagination::Pagination,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::envelope::Page<models::service_booking::ServiceBooking>> {
    repo.list_service_bookings(pagination).await
}

pub async fn get_service_booking(
    booking_id: &str,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::service_booking::ServiceBooking> {
    repo.get_service_booking(booking_id)
        .await?
        .ok_or_else(|| not_found("service booking"))
}

/// Bookings of one pet, latest booking date first
pub async fn get_service_bookings_by_pet(
    pet_id: &str,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<Vec<models::service_booking::ServiceBooking>> {
    repo.get_service_bookings_by_pet(pet_id).await
}

/// Books a service for a pet. New bookings always start as `PENDING`.
///
/// # Arguments
/// * `payload` - Pet, service option, date and optional notes
/// * `repo` - Repository instance for database operations
///
/// # Errors
/// Returns an error if:
/// - The pet or the service option does not exist
/// - The database insert fails
pub async fn create_service_booking(
    payload: models::service_booking::ServiceBookingPayload,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::service_booking::ServiceBooking> {
    let _span = logfire::span!("create_service_booking").entered();

    if payload.pet_id.trim().is_empty() || payload.service_option_id.trim().is_empty() {
        return Err(invalid("pet and service option are required"));
    }

    let pet = repo
        .get_pet(&payload.pet_id)
        .await?
        .ok_or_else(|| not_found("pet"))?;
    let service_option = repo
        .get_service_option(&payload.service_option_id)
        .await?
        .ok_or_else(|| not_found("service option"))?;

    let now = Utc::now();
    let booking = models::service_booking::ServiceBooking {
        id: Uuid::new_v4().to_string(),
        pet_id: payload.pet_id,
        service_option_id: payload.service_option_id,
        booking_date: payload.booking_date,
        status: BookingStatus::Pending,
        notes: utils::clean_text(payload.notes),
        created_at: now,
        updated_at: now,
        pet: Some(models::pet::PetSummary {
            id: pet.id,
            owner_id: pet.owner_id,
            name: pet.name,
            species: pet.species,
        }),
        service_option: Some(service_option),
    };

    repo.insert_service_booking(&booking).await?;
    metric::incr_booking_status_statds(BOOKING_KIND, &booking.status.to_string());

    Ok(booking)
}

pub async fn update_service_booking(
    booking_id: &str,
    payload: models::service_booking::ServiceBookingUpdate,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::service_booking::ServiceBooking> {
    let current = get_service_booking(booking_id, repo).await?;

    let status = payload.status.unwrap_or(current.status);
    assert_transition(BOOKING_KIND, booking_id, current.status, status);

    let booking = models::service_booking::ServiceBooking {
        booking_date: payload.booking_date.unwrap_or(current.booking_date),
        status,
        notes: utils::clean_text(payload.notes).or(current.notes.clone()),
        updated_at: Utc::now(),
        ..current
    };

    if !repo.update_service_booking(&booking).await? {
        return Err(not_found("service booking"));
    }
    metric::incr_booking_status_statds(BOOKING_KIND, &booking.status.to_string());

    Ok(booking)
}

/// Moves a booking to `CANCELLED`.
///
/// Cancelling an already completed or cancelled booking is logged and
/// written anyway.
pub async fn cancel_service_booking(
    booking_id: &str,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::service_booking::ServiceBooking> {
    let _span = logfire::span!("cancel_service_booking").entered();

    let current = get_service_booking(booking_id, repo).await?;
    assert_transition(
        BOOKING_KIND,
        booking_id,
        current.status,
        BookingStatus::Cancelled,
    );

    let booking = models::service_booking::ServiceBooking {
        status: BookingStatus::Cancelled,
        updated_at: Utc::now(),
        ..current
    };

    if !repo.update_service_booking(&booking).await? {
        return Err(not_found("service booking"));
    }
    metric::incr_booking_status_statds(BOOKING_KIND, &booking.status.to_string());

    Ok(booking)
}

pub async fn delete_service_booking(
    booking_id: &str,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<()> {
    if !repo.delete_service_booking(booking_id).await? {
        return Err(not_found("service booking"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::{MockAppRepo, RepoError};
    use rust_decimal_macros::dec;

    fn create_test_booking(id: &str, status: BookingStatus) -> models::service_booking::ServiceBooking {
        models::service_booking::ServiceBooking {
            id: id.to_string(),
            pet_id: "pet-1".into(),
            service_option_id: "grooming".into(),
            status,
            ..Default::default()
        }
    }

    #[ntex::test]
    async fn test_create_booking_starts_pending() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo.expect_get_pet().times(1).returning(|id| {
            Ok(Some(models::pet::Pet {
                id: id.to_string(),
                owner_id: "owner-1".into(),
                name: "Milo".into(),
                species: "cat".into(),
                ..Default::default()
            }))
        });
        mock_repo.expect_get_service_option().times(1).returning(|id| {
            Ok(Some(models::booking::ServiceOption {
                id: id.to_string(),
                name: "Grooming".into(),
                price: dec!(20),
                duration_minutes: 60,
            }))
        });
        mock_repo
            .expect_insert_service_booking()
            .withf(|b| b.status == BookingStatus::Pending)
            .times(1)
            .returning(|_| Ok(()));
        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);

        let booking = create_service_booking(
            models::service_booking::ServiceBookingPayload {
                pet_id: "pet-1".into(),
                service_option_id: "grooming".into(),
                booking_date: Utc::now(),
                notes: None,
            },
            &mock_repo,
        )
        .await
        .unwrap();

        assert_eq!(booking.pet.map(|p| p.owner_id), Some("owner-1".into()));
    }

    #[ntex::test]
    async fn test_create_booking_unknown_pet() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo.expect_get_pet().times(1).returning(|_| Ok(None));
        mock_repo.expect_insert_service_booking().never();
        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);

        let err = create_service_booking(
            models::service_booking::ServiceBookingPayload {
                pet_id: "ghost".into(),
                service_option_id: "grooming".into(),
                ..Default::default()
            },
            &mock_repo,
        )
        .await
        .unwrap_err();

        assert_eq!(
            err.downcast_ref::<RepoError>(),
            Some(&RepoError::NotFound("pet".into()))
        );
    }

    #[ntex::test]
    async fn test_cancel_booking_writes_cancelled() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_service_booking()
            .times(1)
            .returning(|id| Ok(Some(create_test_booking(id, BookingStatus::Confirmed))));
        mock_repo
            .expect_update_service_booking()
            .withf(|b| b.status == BookingStatus::Cancelled)
            .times(1)
            .returning(|_| Ok(true));
        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);

        let booking = cancel_service_booking("sb-1", &mock_repo).await.unwrap();

        assert_eq!(booking.status, BookingStatus::Cancelled);
    }

    #[ntex::test]
    async fn test_cancel_completed_booking_still_writes() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_service_booking()
            .times(1)
            .returning(|id| Ok(Some(create_test_booking(id, BookingStatus::Completed))));
        mock_repo
            .expect_update_service_booking()
            .times(1)
            .returning(|_| Ok(true));
        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);

        assert!(cancel_service_booking("sb-1", &mock_repo).await.is_ok());
    }

    #[ntex::test]
    async fn test_cancel_missing_booking() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_service_booking()
            .times(1)
            .returning(|_| Ok(None));
        mock_repo.expect_update_service_booking().never();
        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);

        assert!(cancel_service_booking("missing", &mock_repo).await.is_err());
    }
}
