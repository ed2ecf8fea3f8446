use ntex::web;

use crate::{
    api, models,
    server::{AppState, created_json, errors::ApiError, ok_json},
};

#[web::get("/prescription/{prescription_id}")]
async fn get_prescription_details(
    path: web::types::Path<(String,)>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let details = api::prescription_detail::get_prescription_details(&path.0, &app_state.repo)
        .await
        .map_err(ApiError::from)?;

    Ok(ok_json(details))
}

#[web::get("/{prescription_id}/{package_id}")]
async fn get_prescription_detail(
    path: web::types::Path<(String, String)>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let detail =
        api::prescription_detail::get_prescription_detail(&path.0, &path.1, &app_state.repo)
            .await
            .map_err(ApiError::from)?;

    Ok(ok_json(detail))
}

#[web::post("")]
async fn create_prescription_detail(
    payload: web::types::Json<models::prescription::PrescriptionDetailPayload>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let detail =
        api::prescription_detail::create_prescription_detail(payload.into_inner(), &app_state.repo)
            .await
            .map_err(ApiError::from)?;

    Ok(created_json(detail))
}

#[web::put("/{prescription_id}/{package_id}")]
async fn update_prescription_detail(
    path: web::types::Path<(String, String)>,
    payload: web::types::Json<models::prescription::PrescriptionDetailUpdate>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let detail = api::prescription_detail::update_prescription_detail(
        &path.0,
        &path.1,
        payload.into_inner(),
        &app_state.repo,
    )
    .await
    .map_err(ApiError::from)?;

    Ok(ok_json(detail))
}

#[web::delete("/{prescription_id}/{package_id}")]
async fn delete_prescription_detail(
    path: web::types::Path<(String, String)>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    api::prescription_detail::delete_prescription_detail(&path.0, &path.1, &app_state.repo)
        .await
        .map_err(ApiError::from)?;

    Ok(ok_json(serde_json::Value::Null))
}
