use super::{fail, page_query};
use crate::{client::error::ServiceError, client::http::HttpClient, models};

use models::service_booking::{ServiceBooking, ServiceBookingPayload, ServiceBookingUpdate};

const PATH: &str = "/service-bookings";

pub async fn get_service_bookings(
    http: &HttpClient,
    page: Option<u32>,
    limit: Option<u32>,
) -> Result<models::envelope::Page<ServiceBooking>, ServiceError> {
    http.request_page(PATH, &page_query(page, limit))
        .await
        .map_err(fail("Failed to fetch service bookings"))
}

pub async fn get_service_booking(
    http: &HttpClient,
    booking_id: &str,
) -> Result<ServiceBooking, ServiceError> {
    http.get(&format!("{PATH}/{booking_id}"))
        .await
        .map_err(fail("Failed to fetch service booking"))
}

pub async fn get_service_bookings_by_pet(
    http: &HttpClient,
    pet_id: &str,
) -> Result<Vec<ServiceBooking>, ServiceError> {
    http.get(&format!("{PATH}/pet/{pet_id}"))
        .await
        .map_err(fail("Failed to fetch service bookings for pet"))
}

pub async fn create_service_booking(
    http: &HttpClient,
    payload: &ServiceBookingPayload,
) -> Result<ServiceBooking, ServiceError> {
    http.post(PATH, payload)
        .await
        .map_err(fail("Failed to create service booking"))
}

pub async fn update_service_booking(
    http: &HttpClient,
    booking_id: &str,
    payload: &ServiceBookingUpdate,
) -> Result<ServiceBooking, ServiceError> {
    http.put(&format!("{PATH}/{booking_id}"), payload)
        .await
        .map_err(fail("Failed to update service booking"))
}

pub async fn cancel_service_booking(
    http: &HttpClient,
    booking_id: &str,
) -> Result<ServiceBooking, ServiceError> {
    http.patch(&format!("{PATH}/{booking_id}/cancel"))
        .await
        .map_err(fail("Failed to cancel service booking"))
}

pub async fn delete_service_booking(
    http: &HttpClient,
    booking_id: &str,
) -> Result<(), ServiceError> {
    http.delete(&format!("{PATH}/{booking_id}"))
        .await
        .map_err(fail("Failed to delete service booking"))
}
