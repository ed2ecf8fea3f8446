use ntex::{util::Bytes, web};

use crate::{
    models, policy,
    server::{AppState, created_json, ok_json},
};

/// Catch-all for `/api/model/{model}/{operation}[/{id}]`, every method.
///
/// The request is handed to a policy-enhanced client built for the caller;
/// its data or its policy error is the response.
pub async fn handle_model_request(
    user: models::user_app::AuthUser,
    req: web::HttpRequest,
    query: web::types::Query<policy::FindManyArgs>,
    body: Bytes,
    app_state: web::types::State<AppState>,
) -> Result<web::HttpResponse, web::Error> {
    let body = if body.is_empty() {
        None
    } else {
        Some(
            serde_json::from_slice::<serde_json::Value>(&body)
                .map_err(|e| policy::PolicyError::InvalidInput(e.to_string()))?,
        )
    };

    let match_info = req.match_info();
    let request = policy::ModelRequest {
        method: req.method().clone(),
        model: match_info.get("model").unwrap_or_default().to_string(),
        operation: match_info.get("operation").unwrap_or_default().to_string(),
        id: match_info.get("id").map(str::to_string),
        args: query.into_inner(),
        body,
    };

    let client = policy::EnhancedClient::new(&app_state.repo, user);
    let response = client.handle(request).await?;

    if response.operation == policy::schema::Operation::Create {
        return Ok(created_json(response.data));
    }
    Ok(ok_json(response.data))
}

#[cfg(test)]
mod tests {
    use crate::{
        models::{self, envelope::Envelope},
        repo::MockAppRepo,
        server::{AppState, routes, test_utils},
    };
    use ntex::{http, web};

    #[ntex::test]
    async fn test_model_route_filters_bookings_for_customer() {
        test_utils::init_test_config();

        let mut mock_repo = MockAppRepo::new();
        mock_repo.expect_list_service_bookings().never();
        mock_repo
            .expect_get_pets_by_owner()
            .withf(|owner_id| owner_id == "mock-user")
            .returning(|owner_id| {
                Ok(vec![models::pet::Pet {
                    id: "pet-1".into(),
                    owner_id: owner_id.to_string(),
                    ..Default::default()
                }])
            });
        mock_repo
            .expect_get_service_bookings_by_pet()
            .withf(|pet_id| pet_id == "pet-1")
            .returning(|pet_id| {
                Ok(vec![models::service_booking::ServiceBooking {
                    id: "sb-1".into(),
                    pet_id: pet_id.to_string(),
                    ..Default::default()
                }])
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
            .uri("/api/model/serviceBooking/findMany?take=5")
            .to_request();
        let resp = web::test::call_service(&app, req).await;
        assert_eq!(resp.status(), http::StatusCode::OK);

        let body = web::test::read_body(resp).await;
        let envelope: Envelope<Vec<models::service_booking::ServiceBooking>> =
            serde_json::from_slice(&body).unwrap();
        assert_eq!(envelope.data.len(), 1);
        assert_eq!(envelope.data[0].id, "sb-1");
    }

    #[ntex::test]
    async fn test_model_route_rejects_customer_medicine_delete() {
        test_utils::init_test_config();

        let mut mock_repo = MockAppRepo::new();
        mock_repo.expect_delete_medicine().never();

        let app = web::test::init_service(
            web::App::new()
                .state(AppState {
                    repo: Box::new(mock_repo),
                })
                .configure(routes::api),
        )
        .await;

        let req = web::test::TestRequest::delete()
            .uri("/api/model/medicine/delete/med-1")
            .to_request();
        let resp = web::test::call_service(&app, req).await;

        assert_eq!(resp.status(), http::StatusCode::FORBIDDEN);
    }

    #[ntex::test]
    async fn test_model_route_unknown_model() {
        test_utils::init_test_config();

        let app = web::test::init_service(
            web::App::new()
                .state(AppState {
                    repo: Box::new(MockAppRepo::new()),
                })
                .configure(routes::api),
        )
        .await;

        let req = web::test::TestRequest::get()
            .uri("/api/model/invoice/findMany")
            .to_request();
        let resp = web::test::call_service(&app, req).await;

        assert_eq!(resp.status(), http::StatusCode::NOT_FOUND);
    }
}
