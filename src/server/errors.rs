use derive_more::{Display, Error};
use log::error;
use ntex::{http, web};

use crate::{api, models, repo};

/// Errors rendered as the JSON envelope with `data: null`
#[derive(Debug, Display, Error)]
pub enum ApiError {
    NotFound(#[error(not(source))] String),
    BadRequest(#[error(not(source))] String),
    Unauthorized,
    Forbidden(#[error(not(source))] String),
    InternalServerError(#[error(not(source))] String),
}

impl ApiError {
    /// Message sent to the client; internal details stay in the logs
    fn public_message(&self) -> String {
        match self {
            ApiError::NotFound(msg) | ApiError::BadRequest(msg) | ApiError::Forbidden(msg) => {
                msg.clone()
            }
            ApiError::Unauthorized => "unauthorized".to_string(),
            ApiError::InternalServerError(_) => "internal server error".to_string(),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        if let Some(repo::RepoError::NotFound(_)) = err.downcast_ref::<repo::RepoError>() {
            return ApiError::NotFound(err.to_string());
        }
        if let Some(api::InputError::Invalid(_)) = err.downcast_ref::<api::InputError>() {
            return ApiError::BadRequest(err.to_string());
        }

        ApiError::InternalServerError(format!("{err:#}"))
    }
}

impl web::error::WebResponseError for ApiError {
    fn error_response(&self, _: &web::HttpRequest) -> web::HttpResponse {
        match self {
            ApiError::InternalServerError(msg) => error!("[InternalServerError] {msg}"),
            other => log::warn!("{other:?}"),
        }

        let status = self.status_code();
        web::HttpResponse::build(status).json(&models::envelope::ErrorEnvelope::new(
            status.as_u16(),
            self.public_message(),
        ))
    }

    fn status_code(&self) -> http::StatusCode {
        match *self {
            ApiError::NotFound(_) => http::StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => http::StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => http::StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => http::StatusCode::FORBIDDEN,
            ApiError::InternalServerError(_) => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_marker_maps_to_404() {
        let err: anyhow::Error = repo::RepoError::NotFound("room".into()).into();
        let api_err = ApiError::from(err);

        assert!(matches!(api_err, ApiError::NotFound(ref msg) if msg == "room not found"));
    }

    #[test]
    fn test_input_marker_maps_to_400() {
        let err: anyhow::Error = api::InputError::Invalid("bad dates".into()).into();

        assert!(matches!(ApiError::from(err), ApiError::BadRequest(_)));
    }

    #[test]
    fn test_other_errors_hide_details() {
        let api_err = ApiError::from(anyhow::anyhow!("disk I/O error"));

        assert_eq!(api_err.public_message(), "internal server error");
    }
}
