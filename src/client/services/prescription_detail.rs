use super::fail;
use crate::{client::error::ServiceError, client::http::HttpClient, models};

use models::prescription::{PrescriptionDetail, PrescriptionDetailPayload, PrescriptionDetailUpdate};

const PATH: &str = "/prescription-details";

pub async fn get_prescription_details(
    http: &HttpClient,
    prescription_id: &str,
) -> Result<Vec<PrescriptionDetail>, ServiceError> {
    http.get(&format!("{PATH}/prescription/{prescription_id}"))
        .await
        .map_err(fail("Failed to fetch prescription details"))
}

pub async fn get_prescription_detail(
    http: &HttpClient,
    prescription_id: &str,
    package_id: &str,
) -> Result<PrescriptionDetail, ServiceError> {
    http.get(&format!("{PATH}/{prescription_id}/{package_id}"))
        .await
        .map_err(fail("Failed to fetch prescription detail"))
}

pub async fn create_prescription_detail(
    http: &HttpClient,
    payload: &PrescriptionDetailPayload,
) -> Result<PrescriptionDetail, ServiceError> {
    http.post(PATH, payload)
        .await
        .map_err(fail("Failed to create prescription detail"))
}

pub async fn update_prescription_detail(
    http: &HttpClient,
    prescription_id: &str,
    package_id: &str,
    payload: &PrescriptionDetailUpdate,
) -> Result<PrescriptionDetail, ServiceError> {
    http.put(&format!("{PATH}/{prescription_id}/{package_id}"), payload)
        .await
        .map_err(fail("Failed to update prescription detail"))
}

pub async fn delete_prescription_detail(
    http: &HttpClient,
    prescription_id: &str,
    package_id: &str,
) -> Result<(), ServiceError> {
    http.delete(&format!("{PATH}/{prescription_id}/{package_id}"))
        .await
        .map_err(fail("Failed to delete prescription detail"))
}
