use ntex::web;

use crate::{
    api, models,
    server::{
        AppState, created_json, errors::ApiError, middleware::auth_user::StaffUser, ok_json,
        paginated_json,
    },
};

/// Every notification, staff only
#[web::get("")]
async fn list_notifications(
    _: StaffUser,
    query: web::types::Query<models::pagination::PageQuery>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let pagination = query.into_inner().into();
    let page = api::notification::list_notifications(&pagination, &app_state.repo)
        .await
        .map_err(ApiError::from)?;

    Ok(paginated_json(page))
}

#[web::get("/my")]
async fn get_my_notifications(
    user: models::user_app::AuthUser,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let notifications = api::notification::get_my_notifications(&user, &app_state.repo)
        .await
        .map_err(ApiError::from)?;

    Ok(ok_json(notifications))
}

#[web::get("/unread-count")]
async fn get_unread_count(
    user: models::user_app::AuthUser,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let unread = api::notification::get_unread_count(&user, &app_state.repo)
        .await
        .map_err(ApiError::from)?;

    Ok(ok_json(unread))
}

#[web::patch("/mark-read/{notification_id}")]
async fn mark_as_read(
    user: models::user_app::AuthUser,
    path: web::types::Path<(String,)>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    api::notification::mark_as_read(&user, &path.0, &app_state.repo)
        .await
        .map_err(ApiError::from)?;

    Ok(ok_json(serde_json::Value::Null))
}

#[web::patch("/mark-all-read")]
async fn mark_all_as_read(
    user: models::user_app::AuthUser,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let updated = api::notification::mark_all_as_read(&user, &app_state.repo)
        .await
        .map_err(ApiError::from)?;

    Ok(ok_json(serde_json::json!({ "updated": updated })))
}

#[web::get("/{notification_id}")]
async fn get_notification(
    _: StaffUser,
    path: web::types::Path<(String,)>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let notification = api::notification::get_notification(&path.0, &app_state.repo)
        .await
        .map_err(ApiError::from)?;

    Ok(ok_json(notification))
}

#[web::post("")]
async fn create_notification(
    _: StaffUser,
    payload: web::types::Json<models::notification::NotificationPayload>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let notification =
        api::notification::create_notification(payload.into_inner(), &app_state.repo)
            .await
            .map_err(ApiError::from)?;

    Ok(created_json(notification))
}

#[web::put("/{notification_id}")]
async fn update_notification(
    _: StaffUser,
    path: web::types::Path<(String,)>,
    payload: web::types::Json<models::notification::NotificationPayload>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let notification =
        api::notification::update_notification(&path.0, payload.into_inner(), &app_state.repo)
            .await
            .map_err(ApiError::from)?;

    Ok(ok_json(notification))
}

#[web::delete("/{notification_id}")]
async fn delete_notification(
    _: StaffUser,
    path: web::types::Path<(String,)>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    api::notification::delete_notification(&path.0, &app_state.repo)
        .await
        .map_err(ApiError::from)?;

    Ok(ok_json(serde_json::Value::Null))
}
