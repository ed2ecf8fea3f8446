use chrono::{DateTime, Utc};

use super::{fail, page_query};
use crate::{
    client::{error::ServiceError, http::HttpClient},
    models,
};

use models::room::{Room, RoomPayload};

const PATH: &str = "/rooms";

pub async fn get_rooms(
    http: &HttpClient,
    page: Option<u32>,
    limit: Option<u32>,
) -> Result<models::envelope::Page<Room>, ServiceError> {
    http.request_page(PATH, &page_query(page, limit))
        .await
        .map_err(fail("Failed to fetch rooms"))
}

pub async fn get_room(http: &HttpClient, room_id: &str) -> Result<Room, ServiceError> {
    http.get(&format!("{PATH}/{room_id}"))
        .await
        .map_err(fail("Failed to fetch room"))
}

/// Rooms free for the whole window; either bound may be left open
pub async fn get_available_rooms(
    http: &HttpClient,
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
) -> Result<Vec<Room>, ServiceError> {
    let query: Vec<(&str, String)> = [("start_date", start_date), ("end_date", end_date)]
        .into_iter()
        .filter_map(|(key, date)| date.map(|d| (key, d.to_rfc3339())))
        .collect();

    http.get_with(&format!("{PATH}/available"), &query)
        .await
        .map_err(fail("Failed to fetch available rooms"))
}

pub async fn create_room(http: &HttpClient, payload: &RoomPayload) -> Result<Room, ServiceError> {
    http.post(PATH, payload)
        .await
        .map_err(fail("Failed to create room"))
}

pub async fn update_room(
    http: &HttpClient,
    room_id: &str,
    payload: &RoomPayload,
) -> Result<Room, ServiceError> {
    http.put(&format!("{PATH}/{room_id}"), payload)
        .await
        .map_err(fail("Failed to update room"))
}

pub async fn delete_room(http: &HttpClient, room_id: &str) -> Result<(), ServiceError> {
    http.delete(&format!("{PATH}/{room_id}"))
        .await
        .map_err(fail("Failed to delete room"))
}
