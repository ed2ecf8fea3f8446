use super::{fail, page_query};
use crate::{client::error::ServiceError, client::http::HttpClient, models};

use models::boarding_reservation::{
    BoardingReservation, BoardingReservationPayload, BoardingReservationUpdate,
};

const PATH: &str = "/boarding-reservations";

pub async fn get_boarding_reservations(
    http: &HttpClient,
    page: Option<u32>,
    limit: Option<u32>,
) -> Result<models::envelope::Page<BoardingReservation>, ServiceError> {
    http.request_page(PATH, &page_query(page, limit))
        .await
        .map_err(fail("Failed to fetch boarding reservations"))
}

pub async fn get_boarding_reservation(
    http: &HttpClient,
    reservation_id: &str,
) -> Result<BoardingReservation, ServiceError> {
    http.get(&format!("{PATH}/{reservation_id}"))
        .await
        .map_err(fail("Failed to fetch boarding reservation"))
}

pub async fn get_boarding_reservations_by_pet(
    http: &HttpClient,
    pet_id: &str,
) -> Result<Vec<BoardingReservation>, ServiceError> {
    http.get(&format!("{PATH}/pet/{pet_id}"))
        .await
        .map_err(fail("Failed to fetch boarding reservations for pet"))
}

pub async fn create_boarding_reservation(
    http: &HttpClient,
    payload: &BoardingReservationPayload,
) -> Result<BoardingReservation, ServiceError> {
    http.post(PATH, payload)
        .await
        .map_err(fail("Failed to create boarding reservation"))
}

pub async fn update_boarding_reservation(
    http: &HttpClient,
    reservation_id: &str,
    payload: &BoardingReservationUpdate,
) -> Result<BoardingReservation, ServiceError> {
    http.put(&format!("{PATH}/{reservation_id}"), payload)
        .await
        .map_err(fail("Failed to update boarding reservation"))
}

pub async fn delete_boarding_reservation(
    http: &HttpClient,
    reservation_id: &str,
) -> Result<(), ServiceError> {
    http.delete(&format!("{PATH}/{reservation_id}"))
        .await
        .map_err(fail("Failed to delete boarding reservation"))
}
