use ntex::web;

use crate::{
    api, models,
    server::{AppState, created_json, errors::ApiError, ok_json, paginated_json},
};

#[web::get("")]
async fn list_rooms(
    query: web::types::Query<models::pagination::PageQuery>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let pagination = query.into_inner().into();
    let page = api::room::list_rooms(&pagination, &app_state.repo)
        .await
        .map_err(ApiError::from)?;

    Ok(paginated_json(page))
}

/// `GET /rooms/available?start_date=&end_date=`, both optional RFC 3339
#[web::get("/available")]
async fn get_available_rooms(
    query: web::types::Query<models::room::AvailabilityWindow>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let rooms = api::room::get_available_rooms(&query, &app_state.repo)
        .await
        .map_err(ApiError::from)?;

    Ok(ok_json(rooms))
}

#[web::get("/{room_id}")]
async fn get_room(
    path: web::types::Path<(String,)>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let room = api::room::get_room(&path.0, &app_state.repo)
        .await
        .map_err(ApiError::from)?;

    Ok(ok_json(room))
}

#[web::post("")]
async fn create_room(
    payload: web::types::Json<models::room::RoomPayload>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let room = api::room::create_room(payload.into_inner(), &app_state.repo)
        .await
        .map_err(ApiError::from)?;

    Ok(created_json(room))
}

#[web::put("/{room_id}")]
async fn update_room(
    path: web::types::Path<(String,)>,
    payload: web::types::Json<models::room::RoomPayload>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let room = api::room::update_room(&path.0, payload.into_inner(), &app_state.repo)
        .await
        .map_err(ApiError::from)?;

    Ok(ok_json(room))
}

#[web::delete("/{room_id}")]
async fn delete_room(
    path: web::types::Path<(String,)>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    api::room::delete_room(&path.0, &app_state.repo)
        .await
        .map_err(ApiError::from)?;

    Ok(ok_json(serde_json::Value::Null))
}

#[cfg(test)]
mod tests {
    use crate::{
        models,
        repo::MockAppRepo,
        server::{AppState, routes},
    };
    use ntex::{http, web};

    #[ntex::test]
    async fn test_available_route_is_not_shadowed_by_id() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo.expect_get_room().never();
        mock_repo
            .expect_get_available_rooms()
            .withf(|window| window.start_date.is_some() && window.end_date.is_some())
            .times(1)
            .returning(|_| Ok(vec![models::room::Room::default()]));

        let app = web::test::init_service(
            web::App::new()
                .state(AppState {
                    repo: Box::new(mock_repo),
                })
                .configure(routes::api),
        )
        .await;

        let req = web::test::TestRequest::get()
            .uri("/api/rooms/available?start_date=2026-05-01T00:00:00Z&end_date=2026-05-04T00:00:00Z")
            .to_request();
        let resp = web::test::call_service(&app, req).await;

        assert_eq!(resp.status(), http::StatusCode::OK);
    }

    #[ntex::test]
    async fn test_available_rejects_inverted_window() {
        let app = web::test::init_service(
            web::App::new()
                .state(AppState {
                    repo: Box::new(MockAppRepo::new()),
                })
                .configure(routes::api),
        )
        .await;

        let req = web::test::TestRequest::get()
            .uri("/api/rooms/available?start_date=2026-05-04T00:00:00Z&end_date=2026-05-01T00:00:00Z")
            .to_request();
        let resp = web::test::call_service(&app, req).await;

        assert_eq!(resp.status(), http::StatusCode::BAD_REQUEST);
    }
}
