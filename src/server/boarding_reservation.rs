use ntex::web;

use crate::{
    api, models,
    server::{AppState, created_json, errors::ApiError, ok_json, paginated_json},
};

#[web::get("")]
async fn list_boarding_reservations(
    query: web::types::Query<models::pagination::PageQuery>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let pagination = query.into_inner().into();
    let page = api::boarding_reservation::list_boarding_reservations(&pagination, &app_state.repo)
        .await
        .map_err(ApiError::from)?;

    Ok(paginated_json(page))
}

#[web::get("/pet/{pet_id}")]
async fn get_boarding_reservations_by_pet(
    path: web::types::Path<(String,)>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let reservations =
        api::boarding_reservation::get_boarding_reservations_by_pet(&path.0, &app_state.repo)
            .await
            .map_err(ApiError::from)?;

    Ok(ok_json(reservations))
}

#[web::get("/{reservation_id}")]
async fn get_boarding_reservation(
    path: web::types::Path<(String,)>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let reservation =
        api::boarding_reservation::get_boarding_reservation(&path.0, &app_state.repo)
            .await
            .map_err(ApiError::from)?;

    Ok(ok_json(reservation))
}

#[web::post("")]
async fn create_boarding_reservation(
    payload: web::types::Json<models::boarding_reservation::BoardingReservationPayload>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let reservation = api::boarding_reservation::create_boarding_reservation(
        payload.into_inner(),
        &app_state.repo,
    )
    .await
    .map_err(ApiError::from)?;

    Ok(created_json(reservation))
}

#[web::put("/{reservation_id}")]
async fn update_boarding_reservation(
    path: web::types::Path<(String,)>,
    payload: web::types::Json<models::boarding_reservation::BoardingReservationUpdate>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let reservation = api::boarding_reservation::update_boarding_reservation(
        &path.0,
        payload.into_inner(),
        &app_state.repo,
    )
    .await
    .map_err(ApiError::from)?;

    Ok(ok_json(reservation))
}

#[web::delete("/{reservation_id}")]
async fn delete_boarding_reservation(
    path: web::types::Path<(String,)>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    api::boarding_reservation::delete_boarding_reservation(&path.0, &app_state.repo)
        .await
        .map_err(ApiError::from)?;

    Ok(ok_json(serde_json::Value::Null))
}
