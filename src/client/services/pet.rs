use super::fail;
use crate::{client::error::ServiceError, client::http::HttpClient, models};

pub async fn get_my_pets(http: &HttpClient) -> Result<Vec<models::pet::Pet>, ServiceError> {
    http.get("/pets/my")
        .await
        .map_err(fail("Failed to fetch pets"))
}

pub async fn get_pet(http: &HttpClient, pet_id: &str) -> Result<models::pet::Pet, ServiceError> {
    http.get(&format!("/pets/{pet_id}"))
        .await
        .map_err(fail("Failed to fetch pet"))
}
