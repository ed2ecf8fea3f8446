use ntex::web;

use crate::{
    api, models,
    server::{AppState, created_json, errors::ApiError, ok_json, paginated_json},
};

#[web::get("")]
async fn list_medicines(
    query: web::types::Query<models::pagination::PageQuery>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let pagination = query.into_inner().into();
    let page = api::medicine::list_medicines(&pagination, &app_state.repo)
        .await
        .map_err(ApiError::from)?;

    Ok(paginated_json(page))
}

#[web::get("/{medicine_id}")]
async fn get_medicine(
    path: web::types::Path<(String,)>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let medicine = api::medicine::get_medicine(&path.0, &app_state.repo)
        .await
        .map_err(ApiError::from)?;

    Ok(ok_json(medicine))
}

#[web::post("")]
async fn create_medicine(
    payload: web::types::Json<models::medicine::MedicinePayload>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let medicine = api::medicine::create_medicine(payload.into_inner(), &app_state.repo)
        .await
        .map_err(ApiError::from)?;

    Ok(created_json(medicine))
}

#[web::put("/{medicine_id}")]
async fn update_medicine(
    path: web::types::Path<(String,)>,
    payload: web::types::Json<models::medicine::MedicinePayload>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let medicine = api::medicine::update_medicine(&path.0, payload.into_inner(), &app_state.repo)
        .await
        .map_err(ApiError::from)?;

    Ok(ok_json(medicine))
}

#[web::delete("/{medicine_id}")]
async fn delete_medicine(
    path: web::types::Path<(String,)>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    api::medicine::delete_medicine(&path.0, &app_state.repo)
        .await
        .map_err(ApiError::from)?;

    Ok(ok_json(serde_json::Value::Null))
}

#[cfg(test)]
mod tests {
    use crate::{
        models::{self, envelope::Envelope, envelope::ErrorEnvelope},
        repo::{MockAppRepo, RepoError},
        server::{AppState, routes},
    };
    use ntex::{http, web};
    use rust_decimal_macros::dec;

    #[ntex::test]
    async fn test_get_medicine_wraps_envelope() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo.expect_get_medicine().times(1).returning(|id| {
            Ok(Some(models::medicine::Medicine {
                id: id.to_string(),
                name: "Amoxicillin".into(),
                price: dec!(12.5),
                ..Default::default()
            }))
        });

        let app = web::test::init_service(
            web::App::new()
                .state(AppState {
                    repo: Box::new(mock_repo),
                })
                .configure(routes::api),
        )
        .await;

        let req = web::test::TestRequest::get()
            .uri("/api/medicines/med-1")
            .to_request();
        let resp = web::test::call_service(&app, req).await;
        assert_eq!(resp.status(), http::StatusCode::OK);

        let body = web::test::read_body(resp).await;
        let envelope: Envelope<models::medicine::Medicine> = serde_json::from_slice(&body).unwrap();
        assert_eq!(envelope.code, 200);
        assert_eq!(envelope.data.id, "med-1");
    }

    #[ntex::test]
    async fn test_missing_medicine_is_404_envelope() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_medicine()
            .times(1)
            .returning(|_| Ok(None));

        let app = web::test::init_service(
            web::App::new()
                .state(AppState {
                    repo: Box::new(mock_repo),
                })
                .configure(routes::api),
        )
        .await;

        let req = web::test::TestRequest::get()
            .uri("/api/medicines/missing")
            .to_request();
        let resp = web::test::call_service(&app, req).await;
        assert_eq!(resp.status(), http::StatusCode::NOT_FOUND);

        let body = web::test::read_body(resp).await;
        let envelope: ErrorEnvelope = serde_json::from_slice(&body).unwrap();
        assert_eq!(envelope.code, 404);
        assert_eq!(envelope.msg, RepoError::NotFound("medicine".into()).to_string());
        assert!(envelope.data.is_none());
    }

    #[ntex::test]
    async fn test_create_medicine_returns_201() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_insert_medicine()
            .times(1)
            .returning(|_| Ok(()));

        let app = web::test::init_service(
            web::App::new()
                .state(AppState {
                    repo: Box::new(mock_repo),
                })
                .configure(routes::api),
        )
        .await;

        let req = web::test::TestRequest::post()
            .uri("/api/medicines")
            .set_json(&serde_json::json!({"name": "Amoxicillin", "price": 3.5}))
            .to_request();
        let resp = web::test::call_service(&app, req).await;

        assert_eq!(resp.status(), http::StatusCode::CREATED);
    }

    #[ntex::test]
    async fn test_list_medicines_includes_meta() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_list_medicines()
            .withf(|pagination| pagination.page == 2 && pagination.limit == 100)
            .times(1)
            .returning(|pagination| {
                Ok(models::envelope::Page {
                    items: vec![],
                    meta: models::envelope::PageMeta::new(150, pagination),
                })
            });

        let app = web::test::init_service(
            web::App::new()
                .state(AppState {
                    repo: Box::new(mock_repo),
                })
                .configure(routes::api),
        )
        .await;

        let req = web::test::TestRequest::get()
            .uri("/api/medicines?page=2&limit=500")
            .to_request();
        let resp = web::test::call_service(&app, req).await;
        assert_eq!(resp.status(), http::StatusCode::OK);

        let body = web::test::read_body(resp).await;
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["meta"]["totalPages"], 2);
        assert_eq!(value["meta"]["limit"], 100);
    }
}
