use ntex::web;

use crate::{
    api, models,
    server::{AppState, created_json, errors::ApiError, ok_json, paginated_json},
};

#[web::get("")]
async fn list_medication_packages(
    query: web::types::Query<models::pagination::PageQuery>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let pagination = query.into_inner().into();
    let page = api::medication_package::list_medication_packages(&pagination, &app_state.repo)
        .await
        .map_err(ApiError::from)?;

    Ok(paginated_json(page))
}

#[web::get("/medicine/{medicine_id}")]
async fn get_medication_packages_by_medicine(
    path: web::types::Path<(String,)>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let packages =
        api::medication_package::get_medication_packages_by_medicine(&path.0, &app_state.repo)
            .await
            .map_err(ApiError::from)?;

    Ok(ok_json(packages))
}

#[web::get("/{package_id}")]
async fn get_medication_package(
    path: web::types::Path<(String,)>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let package = api::medication_package::get_medication_package(&path.0, &app_state.repo)
        .await
        .map_err(ApiError::from)?;

    Ok(ok_json(package))
}

#[web::post("")]
async fn create_medication_package(
    payload: web::types::Json<models::medication_package::MedicationPackagePayload>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let package =
        api::medication_package::create_medication_package(payload.into_inner(), &app_state.repo)
            .await
            .map_err(ApiError::from)?;

    Ok(created_json(package))
}

#[web::put("/{package_id}")]
async fn update_medication_package(
    path: web::types::Path<(String,)>,
    payload: web::types::Json<models::medication_package::MedicationPackagePayload>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let package = api::medication_package::update_medication_package(
        &path.0,
        payload.into_inner(),
        &app_state.repo,
    )
    .await
    .map_err(ApiError::from)?;

    Ok(ok_json(package))
}

#[web::delete("/{package_id}")]
async fn delete_medication_package(
    path: web::types::Path<(String,)>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    api::medication_package::delete_medication_package(&path.0, &app_state.repo)
        .await
        .map_err(ApiError::from)?;

    Ok(ok_json(serde_json::Value::Null))
}
