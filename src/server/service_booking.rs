use ntex::web;

use crate::{
    api, models,
    server::{AppState, created_json, errors::ApiError, ok_json, paginated_json},
};

#[web::get("")]
async fn list_service_bookings(
    query: web::types::Query<models::pagination::PageQuery>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let pagination = query.into_inner().into();
    let page = api::service_booking::list_service_bookings(&pagination, &app_state.repo)
        .await
        .map_err(ApiError::from)?;

    Ok(paginated_json(page))
}

#[web::get("/pet/{pet_id}")]
async fn get_service_bookings_by_pet(
    path: web::types::Path<(String,)>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let bookings = api::service_booking::get_service_bookings_by_pet(&path.0, &app_state.repo)
        .await
        .map_err(ApiError::from)?;

    Ok(ok_json(bookings))
}

#[web::get("/{booking_id}")]
async fn get_service_booking(
    path: web::types::Path<(String,)>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let booking = api::service_booking::get_service_booking(&path.0, &app_state.repo)
        .await
        .map_err(ApiError::from)?;

    Ok(ok_json(booking))
}

#[web::post("")]
async fn create_service_booking(
    payload: web::types::Json<models::service_booking::ServiceBookingPayload>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let booking =
        api::service_booking::create_service_booking(payload.into_inner(), &app_state.repo)
            .await
            .map_err(ApiError::from)?;

    Ok(created_json(booking))
}

#[web::put("/{booking_id}")]
async fn update_service_booking(
    path: web::types::Path<(String,)>,
    payload: web::types::Json<models::service_booking::ServiceBookingUpdate>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let booking = api::service_booking::update_service_booking(
        &path.0,
        payload.into_inner(),
        &app_state.repo,
    )
    .await
    .map_err(ApiError::from)?;

    Ok(ok_json(booking))
}

#[web::patch("/{booking_id}/cancel")]
async fn cancel_service_booking(
    path: web::types::Path<(String,)>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let booking = api::service_booking::cancel_service_booking(&path.0, &app_state.repo)
        .await
        .map_err(ApiError::from)?;

    Ok(ok_json(booking))
}

#[web::delete("/{booking_id}")]
async fn delete_service_booking(
    path: web::types::Path<(String,)>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    api::service_booking::delete_service_booking(&path.0, &app_state.repo)
        .await
        .map_err(ApiError::from)?;

    Ok(ok_json(serde_json::Value::Null))
}
