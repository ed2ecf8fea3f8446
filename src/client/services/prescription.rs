use super::{fail, page_query};
use crate::{client::error::ServiceError, client::http::HttpClient, models};

use models::prescription::{Prescription, PrescriptionPayload};

const PATH: &str = "/prescriptions";

pub async fn get_prescriptions(
    http: &HttpClient,
    page: Option<u32>,
    limit: Option<u32>,
) -> Result<models::envelope::Page<Prescription>, ServiceError> {
    http.request_page(PATH, &page_query(page, limit))
        .await
        .map_err(fail("Failed to fetch prescriptions"))
}

pub async fn get_prescription(
    http: &HttpClient,
    prescription_id: &str,
) -> Result<Prescription, ServiceError> {
    http.get(&format!("{PATH}/{prescription_id}"))
        .await
        .map_err(fail("Failed to fetch prescription"))
}

pub async fn get_prescriptions_by_medical_record(
    http: &HttpClient,
    medical_record_id: &str,
) -> Result<Vec<Prescription>, ServiceError> {
    http.get(&format!("{PATH}/medical-record/{medical_record_id}"))
        .await
        .map_err(fail("Failed to fetch prescriptions for medical record"))
}

pub async fn create_prescription(
    http: &HttpClient,
    payload: &PrescriptionPayload,
) -> Result<Prescription, ServiceError> {
    http.post(PATH, payload)
        .await
        .map_err(fail("Failed to create prescription"))
}

pub async fn update_prescription(
    http: &HttpClient,
    prescription_id: &str,
    payload: &PrescriptionPayload,
) -> Result<Prescription, ServiceError> {
    http.put(&format!("{PATH}/{prescription_id}"), payload)
        .await
        .map_err(fail("Failed to update prescription"))
}

pub async fn delete_prescription(
    http: &HttpClient,
    prescription_id: &str,
) -> Result<(), ServiceError> {
    http.delete(&format!("{PATH}/{prescription_id}"))
        .await
        .map_err(fail("Failed to delete prescription"))
}
