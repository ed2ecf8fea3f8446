use ntex::web;

use crate::{
    api, models,
    server::{AppState, created_json, errors::ApiError, ok_json, paginated_json},
};

#[web::get("")]
async fn list_prescriptions(
    query: web::types::Query<models::pagination::PageQuery>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let pagination = query.into_inner().into();
    let page = api::prescription::list_prescriptions(&pagination, &app_state.repo)
        .await
        .map_err(ApiError::from)?;

    Ok(paginated_json(page))
}

#[web::get("/medical-record/{medical_record_id}")]
async fn get_prescriptions_by_medical_record(
    path: web::types::Path<(String,)>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let prescriptions =
        api::prescription::get_prescriptions_by_medical_record(&path.0, &app_state.repo)
            .await
            .map_err(ApiError::from)?;

    Ok(ok_json(prescriptions))
}

#[web::get("/{prescription_id}")]
async fn get_prescription(
    path: web::types::Path<(String,)>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let prescription = api::prescription::get_prescription(&path.0, &app_state.repo)
        .await
        .map_err(ApiError::from)?;

    Ok(ok_json(prescription))
}

#[web::post("")]
async fn create_prescription(
    payload: web::types::Json<models::prescription::PrescriptionPayload>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let prescription = api::prescription::create_prescription(payload.into_inner(), &app_state.repo)
        .await
        .map_err(ApiError::from)?;

    Ok(created_json(prescription))
}

#[web::put("/{prescription_id}")]
async fn update_prescription(
    path: web::types::Path<(String,)>,
    payload: web::types::Json<models::prescription::PrescriptionPayload>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let prescription =
        api::prescription::update_prescription(&path.0, payload.into_inner(), &app_state.repo)
            .await
            .map_err(ApiError::from)?;

    Ok(ok_json(prescription))
}

#[web::delete("/{prescription_id}")]
async fn delete_prescription(
    path: web::types::Path<(String,)>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    api::prescription::delete_prescription(&path.0, &app_state.repo)
        .await
        .map_err(ApiError::from)?;

    Ok(ok_json(serde_json::Value::Null))
}
