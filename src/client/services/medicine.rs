use super::{fail, page_query};
use crate::{client::error::ServiceError, client::http::HttpClient, models};

const PATH: &str = "/medicines";

pub async fn get_medicines(
    http: &HttpClient,
    page: Option<u32>,
    limit: Option<u32>,
) -> Result<models::envelope::Page<models::medicine::Medicine>, ServiceError> {
    http.request_page(PATH, &page_query(page, limit))
        .await
        .map_err(fail("Failed to fetch medicines"))
}

pub async fn get_medicine(
    http: &HttpClient,
    medicine_id: &str,
) -> Result<models::medicine::Medicine, ServiceError> {
    http.get(&format!("{PATH}/{medicine_id}"))
        .await
        .map_err(fail("Failed to fetch medicine"))
}

pub async fn create_medicine(
    http: &HttpClient,
    payload: &models::medicine::MedicinePayload,
) -> Result<models::medicine::Medicine, ServiceError> {
    http.post(PATH, payload)
        .await
        .map_err(fail("Failed to create medicine"))
}

pub async fn update_medicine(
    http: &HttpClient,
    medicine_id: &str,
    payload: &models::medicine::MedicinePayload,
) -> Result<models::medicine::Medicine, ServiceError> {
    http.put(&format!("{PATH}/{medicine_id}"), payload)
        .await
        .map_err(fail("Failed to update medicine"))
}

pub async fn delete_medicine(http: &HttpClient, medicine_id: &str) -> Result<(), ServiceError> {
    http.delete(&format!("{PATH}/{medicine_id}"))
        .await
        .map_err(fail("Failed to delete medicine"))
}

/// Display name: `"Amoxicillin (250mg) - viên"`, parts left out when empty
pub fn format_medicine_name(medicine: &models::medicine::Medicine) -> String {
    let mut name = medicine.name.clone();

    if let Some(concentration) = medicine.concentration.as_deref().filter(|c| !c.is_empty()) {
        name.push_str(&format!(" ({concentration})"));
    }
    if let Some(unit) = medicine.unit.as_deref().filter(|u| !u.is_empty()) {
        name.push_str(&format!(" - {unit}"));
    }

    name
}

#[cfg(test)]
mod tests {
    use super::*;

    fn medicine(concentration: Option<&str>, unit: Option<&str>) -> models::medicine::Medicine {
        models::medicine::Medicine {
            name: "Amoxicillin".into(),
            concentration: concentration.map(String::from),
            unit: unit.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_format_medicine_name() {
        assert_eq!(
            format_medicine_name(&medicine(Some("250mg"), Some("viên"))),
            "Amoxicillin (250mg) - viên"
        );
        assert_eq!(format_medicine_name(&medicine(None, None)), "Amoxicillin");
        assert_eq!(
            format_medicine_name(&medicine(Some("250mg"), None)),
            "Amoxicillin (250mg)"
        );
        assert_eq!(
            format_medicine_name(&medicine(None, Some("viên"))),
            "Amoxicillin - viên"
        );
        assert_eq!(format_medicine_name(&medicine(Some(""), Some(""))), "Amoxicillin");
    }
}
