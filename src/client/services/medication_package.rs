use super::{fail, page_query};
use crate::{client::error::ServiceError, client::http::HttpClient, models};

use models::medication_package::{MedicationPackage, MedicationPackagePayload};

const PATH: &str = "/medication-packages";

pub async fn get_medication_packages(
    http: &HttpClient,
    page: Option<u32>,
    limit: Option<u32>,
) -> Result<models::envelope::Page<MedicationPackage>, ServiceError> {
    http.request_page(PATH, &page_query(page, limit))
        .await
        .map_err(fail("Failed to fetch medication packages"))
}

pub async fn get_medication_package(
    http: &HttpClient,
    package_id: &str,
) -> Result<MedicationPackage, ServiceError> {
    http.get(&format!("{PATH}/{package_id}"))
        .await
        .map_err(fail("Failed to fetch medication package"))
}

pub async fn get_medication_packages_by_medicine(
    http: &HttpClient,
    medicine_id: &str,
) -> Result<Vec<MedicationPackage>, ServiceError> {
    http.get(&format!("{PATH}/medicine/{medicine_id}"))
        .await
        .map_err(fail("Failed to fetch medication packages for medicine"))
}

pub async fn create_medication_package(
    http: &HttpClient,
    payload: &MedicationPackagePayload,
) -> Result<MedicationPackage, ServiceError> {
    http.post(PATH, payload)
        .await
        .map_err(fail("Failed to create medication package"))
}

pub async fn update_medication_package(
    http: &HttpClient,
    package_id: &str,
    payload: &MedicationPackagePayload,
) -> Result<MedicationPackage, ServiceError> {
    http.put(&format!("{PATH}/{package_id}"), payload)
        .await
        .map_err(fail("Failed to update medication package"))
}

pub async fn delete_medication_package(
    http: &HttpClient,
    package_id: &str,
) -> Result<(), ServiceError> {
    http.delete(&format!("{PATH}/{package_id}"))
        .await
        .map_err(fail("Failed to delete medication package"))
}
