use crate::{metric, models, repo, utils};
use chrono::Utc;
use uuid::Uuid;

use super::{invalid, not_found, service_booking::assert_transition};
use models::booking::BookingStatus;

const RESERVATION_KIND: &str = "boarding_reservation";

pub async fn list_boarding_reservations(
    pagination: &models::pagination::Pagination,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::envelope::Page<models::boarding_reservation::BoardingReservation>> {
    repo.list_boarding_reservations(pagination).await
}

pub async fn get_boarding_reservation(
    reservation_id: &str,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::boarding_reservation::BoardingReservation> {
    repo.get_boarding_reservation(reservation_id)
        .await?
        .ok_or_else(|| not_found("boarding reservation"))
}

/// Reservations of one pet, latest start date first
pub async fn get_boarding_reservations_by_pet(
    pet_id: &str,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<Vec<models::boarding_reservation::BoardingReservation>> {
    repo.get_boarding_reservations_by_pet(pet_id).await
}

/// Reserves a room for a pet over `[start_date, end_date)`.
///
/// The room must exist; overlapping stays are not rejected here, callers
/// check `/rooms/available` first.
pub async fn create_boarding_reservation(
    payload: models::boarding_reservation::BoardingReservationPayload,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::boarding_reservation::BoardingReservation> {
    let _span = logfire::span!("create_boarding_reservation").entered();

    if !payload.dates_are_valid() {
        return Err(invalid("start_date must be before end_date"));
    }

    let pet = repo
        .get_pet(&payload.pet_id)
        .await?
        .ok_or_else(|| not_found("pet"))?;
    let room = repo
        .get_room(&payload.room_id)
        .await?
        .ok_or_else(|| not_found("room"))?;

    let now = Utc::now();
    let reservation = models::boarding_reservation::BoardingReservation {
        id: Uuid::new_v4().to_string(),
        pet_id: payload.pet_id,
        room_id: payload.room_id,
        start_date: payload.start_date,
        end_date: payload.end_date,
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
        room: Some(room),
    };

    repo.insert_boarding_reservation(&reservation).await?;
    metric::incr_booking_status_statds(RESERVATION_KIND, &reservation.status.to_string());

    Ok(reservation)
}

pub async fn update_boarding_reservation(
    reservation_id: &str,
    payload: models::boarding_reservation::BoardingReservationUpdate,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::boarding_reservation::BoardingReservation> {
    let current = get_boarding_reservation(reservation_id, repo).await?;

    let start_date = payload.start_date.unwrap_or(current.start_date);
    let end_date = payload.end_date.unwrap_or(current.end_date);
    if start_date >= end_date {
        return Err(invalid("start_date must be before end_date"));
    }

    let room = match payload.room_id {
        Some(room_id) if room_id != current.room_id => Some(
            repo.get_room(&room_id)
                .await?
                .ok_or_else(|| not_found("room"))?,
        ),
        _ => current.room.clone(),
    };

    let status = payload.status.unwrap_or(current.status);
    assert_transition(RESERVATION_KIND, reservation_id, current.status, status);

    let reservation = models::boarding_reservation::BoardingReservation {
        room_id: room
            .as_ref()
            .map(|r| r.id.clone())
            .unwrap_or(current.room_id.clone()),
        start_date,
        end_date,
        status,
        notes: utils::clean_text(payload.notes).or(current.notes.clone()),
        updated_at: Utc::now(),
        room,
        ..current
    };

    if !repo.update_boarding_reservation(&reservation).await? {
        return Err(not_found("boarding reservation"));
    }
    metric::incr_booking_status_statds(RESERVATION_KIND, &reservation.status.to_string());

    Ok(reservation)
}

pub async fn delete_boarding_reservation(
    reservation_id: &str,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<()> {
    if !repo.delete_boarding_reservation(reservation_id).await? {
        return Err(not_found("boarding reservation"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::MockAppRepo;
    use chrono::Duration;

    #[ntex::test]
    async fn test_create_reservation_rejects_inverted_dates() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo.expect_get_pet().never();
        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);

        let start = Utc::now();
        let payload = models::boarding_reservation::BoardingReservationPayload {
            pet_id: "pet-1".into(),
            room_id: "room-a".into(),
            start_date: start,
            end_date: start - Duration::days(1),
            notes: None,
        };

        assert!(
            create_boarding_reservation(payload, &mock_repo)
                .await
                .is_err()
        );
    }

    #[ntex::test]
    async fn test_update_reservation_switches_room() {
        let start = Utc::now();
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_boarding_reservation()
            .times(1)
            .returning(move |id| {
                Ok(Some(models::boarding_reservation::BoardingReservation {
                    id: id.to_string(),
                    pet_id: "pet-1".into(),
                    room_id: "room-a".into(),
                    start_date: start,
                    end_date: start + Duration::days(2),
                    ..Default::default()
                }))
            });
        mock_repo.expect_get_room().times(1).returning(|id| {
            Ok(Some(models::room::Room {
                id: id.to_string(),
                ..Default::default()
            }))
        });
        mock_repo
            .expect_update_boarding_reservation()
            .withf(|r| r.room_id == "room-b")
            .times(1)
            .returning(|_| Ok(true));
        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);

        let reservation = update_boarding_reservation(
            "br-1",
            models::boarding_reservation::BoardingReservationUpdate {
                room_id: Some("room-b".into()),
                status: Some(BookingStatus::Confirmed),
                ..Default::default()
            },
            &mock_repo,
        )
        .await
        .unwrap();

        assert_eq!(reservation.status, BookingStatus::Confirmed);
        assert_eq!(reservation.room.map(|r| r.id), Some("room-b".into()));
    }

    #[ntex::test]
    async fn test_update_reservation_validates_merged_dates() {
        let start = Utc::now();
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_boarding_reservation()
            .times(1)
            .returning(move |id| {
                Ok(Some(models::boarding_reservation::BoardingReservation {
                    id: id.to_string(),
                    start_date: start,
                    end_date: start + Duration::days(2),
                    ..Default::default()
                }))
            });
        mock_repo.expect_update_boarding_reservation().never();
        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);

        let result = update_boarding_reservation(
            "br-1",
            models::boarding_reservation::BoardingReservationUpdate {
                start_date: Some(start + Duration::days(3)),
                ..Default::default()
            },
            &mock_repo,
        )
        .await;

        assert!(result.is_err());
    }
}
