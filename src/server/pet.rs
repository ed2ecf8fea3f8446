use ntex::web;

use crate::{
    api, models,
    server::{AppState, errors::ApiError, ok_json},
};

/// Pets owned by the caller
#[web::get("/my")]
async fn get_my_pets(
    user: models::user_app::AuthUser,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let pets = api::pet::get_my_pets(&user, &app_state.repo)
        .await
        .map_err(ApiError::from)?;

    Ok(ok_json(pets))
}

#[web::get("/{pet_id}")]
async fn get_pet(
    user: models::user_app::AuthUser,
    path: web::types::Path<(String,)>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let pet = api::pet::get_pet(&path.0, &app_state.repo)
        .await
        .map_err(ApiError::from)?;

    if !user.owns(&pet.owner_id) && !user.is_staff() {
        return Err(ApiError::Forbidden("pet belongs to another owner".into()).into());
    }

    Ok(ok_json(pet))
}
