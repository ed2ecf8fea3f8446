use ntex::{
    http::{Payload, header},
    web::{Error, FromRequest, HttpRequest},
};

use crate::{config, models, server::errors};

fn has_bearer_token(req: &HttpRequest) -> bool {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("Bearer "))
}

/// Resolves the caller. Authentication is stubbed: the token is only checked
/// for presence and the configured mock user is returned either way.
fn get_auth_user(req: &HttpRequest) -> Result<models::user_app::AuthUser, Error> {
    if !has_bearer_token(req) {
        log::debug!("request to {} without bearer token", req.path());
    }

    config::app_config()
        .and_then(|app_config| app_config.mock_user())
        .map_err(|e| {
            log::error!("failed to build mock user: {e:#}");
            errors::ApiError::Unauthorized.into()
        })
}

impl<Err> FromRequest<Err> for models::user_app::AuthUser {
    type Error = Error;

    fn from_request(
        req: &HttpRequest,
        _: &mut Payload,
    ) -> impl std::future::Future<Output = Result<Self, Self::Error>> {
        futures::future::ready(get_auth_user(req))
    }
}

/// Extractor that only lets staff and admins through
pub struct StaffUser(pub models::user_app::AuthUser);

impl<Err> FromRequest<Err> for StaffUser {
    type Error = Error;

    fn from_request(
        req: &HttpRequest,
        _: &mut Payload,
    ) -> impl std::future::Future<Output = Result<Self, Self::Error>> {
        let result = get_auth_user(req).and_then(|user| {
            if user.is_staff() {
                Ok(StaffUser(user))
            } else {
                Err(errors::ApiError::Forbidden("staff only".into()).into())
            }
        });

        futures::future::ready(result)
    }
}
