use crate::{models, repo, utils};
use chrono::Utc;
use uuid::Uuid;

use super::{invalid, not_found};

pub async fn list_rooms(
    pagination: &models::pagination::Pagination,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::envelope::Page<models::room::Room>> {
    repo.list_rooms(pagination).await
}

pub async fn get_room(room_id: &str, repo: &repo::ImplAppRepo) -> anyhow::Result<models::room::Room> {
    repo.get_room(room_id)
        .await?
        .ok_or_else(|| not_found("room"))
}

/// Rooms in `AVAILABLE` status. With a stay window, rooms holding a pending
/// or confirmed reservation that overlaps it are left out.
pub async fn get_available_rooms(
    window: &models::room::AvailabilityWindow,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<Vec<models::room::Room>> {
    if !window.is_valid() {
        return Err(invalid(
            "start_date and end_date must be given together and start before end",
        ));
    }

    repo.get_available_rooms(window).await
}

pub async fn create_room(
    payload: models::room::RoomPayload,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::room::Room> {
    if !payload.fields_are_valid() {
        return Err(invalid("room name, positive capacity and price are required"));
    }

    let now = Utc::now();
    let room = models::room::Room {
        id: Uuid::new_v4().to_string(),
        name: ammonia::clean(payload.name.trim()),
        room_type: payload.room_type,
        capacity: payload.capacity,
        price_per_day: payload.price_per_day,
        status: payload.status,
        description: utils::clean_text(payload.description),
        created_at: now,
        updated_at: now,
    };

    repo.insert_room(&room).await?;

    Ok(room)
}

pub async fn update_room(
    room_id: &str,
    payload: models::room::RoomPayload,
    repo: &repo::ImplAppRepo,
) -> anyhow::Result<models::room::Room> {
    if !payload.fields_are_valid() {
        return Err(invalid("room name, positive capacity and price are required"));
    }

    let current = get_room(room_id, repo).await?;
    let room = models::room::Room {
        name: ammonia::clean(payload.name.trim()),
        room_type: payload.room_type,
        capacity: payload.capacity,
        price_per_day: payload.price_per_day,
        status: payload.status,
        description: utils::clean_text(payload.description),
        updated_at: Utc::now(),
        ..current
    };

    if !repo.update_room(&room).await? {
        return Err(not_found("room"));
    }

    Ok(room)
}

pub async fn delete_room(room_id: &str, repo: &repo::ImplAppRepo) -> anyhow::Result<()> {
    if !repo.delete_room(room_id).await? {
        return Err(not_found("room"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::MockAppRepo;
    use chrono::Duration;
    use rust_decimal_macros::dec;

    #[ntex::test]
    async fn test_available_rooms_rejects_half_window() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo.expect_get_available_rooms().never();
        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);

        let window = models::room::AvailabilityWindow {
            start_date: Some(Utc::now()),
            end_date: None,
        };

        assert!(get_available_rooms(&window, &mock_repo).await.is_err());
    }

    #[ntex::test]
    async fn test_available_rooms_passes_window() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_available_rooms()
            .withf(|w| w.start_date.is_some() && w.end_date.is_some())
            .times(1)
            .returning(|_| Ok(vec![models::room::Room::default()]));
        let mock_repo: repo::ImplAppRepo = Box::new(mock_repo);

        let start = Utc::now();
        let window = models::room::AvailabilityWindow {
            start_date: Some(start),
            end_date: Some(start + Duration::days(2)),
        };

        assert_eq!(get_available_rooms(&window, &mock_repo).await.unwrap().len(), 1);
    }

    #[ntex::test]
    async fn test_create_room_validates_capacity() {
        let mock_repo: repo::ImplAppRepo = Box::new(MockAppRepo::new());

        let payload = models::room::RoomPayload {
            name: "A1".into(),
            capacity: 0,
            price_per_day: dec!(25),
            ..Default::default()
        };

        assert!(create_room(payload, &mock_repo).await.is_err());
    }
}
