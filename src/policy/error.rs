use derive_more::{Display, Error};
use ntex::{http, web};

use crate::{api, models, repo};

/// Outcome of a rejected `/api/model/*` request
#[derive(Debug, Display, Error, PartialEq)]
pub enum PolicyError {
    #[display("forbidden: {_0}")]
    Forbidden(#[error(not(source))] String),
    #[display("unknown model: {_0}")]
    UnknownModel(#[error(not(source))] String),
    #[display("unknown operation: {_0}")]
    UnknownOperation(#[error(not(source))] String),
    #[display("invalid input: {_0}")]
    InvalidInput(#[error(not(source))] String),
    #[display("{_0} not found")]
    NotFound(#[error(not(source))] String),
    #[display("internal error: {_0}")]
    Internal(#[error(not(source))] String),
}

impl From<anyhow::Error> for PolicyError {
    fn from(err: anyhow::Error) -> Self {
        if let Some(repo::RepoError::NotFound(entity)) = err.downcast_ref::<repo::RepoError>() {
            return PolicyError::NotFound(entity.clone());
        }
        if let Some(api::InputError::Invalid(msg)) = err.downcast_ref::<api::InputError>() {
            return PolicyError::InvalidInput(msg.clone());
        }

        PolicyError::Internal(format!("{err:#}"))
    }
}

impl web::error::WebResponseError for PolicyError {
    fn error_response(&self, _: &web::HttpRequest) -> web::HttpResponse {
        let msg = match self {
            PolicyError::Internal(detail) => {
                log::error!("[PolicyError] {detail}");
                "internal server error".to_string()
            }
            other => {
                log::warn!("[PolicyError] {other}");
                other.to_string()
            }
        };

        let status = self.status_code();
        web::HttpResponse::build(status)
            .json(&models::envelope::ErrorEnvelope::new(status.as_u16(), msg))
    }

    fn status_code(&self) -> http::StatusCode {
        match *self {
            PolicyError::Forbidden(_) => http::StatusCode::FORBIDDEN,
            PolicyError::UnknownModel(_)
            | PolicyError::UnknownOperation(_)
            | PolicyError::NotFound(_) => http::StatusCode::NOT_FOUND,
            PolicyError::InvalidInput(_) => http::StatusCode::BAD_REQUEST,
            PolicyError::Internal(_) => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntex::web::error::WebResponseError;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            PolicyError::Forbidden("x".into()).status_code(),
            http::StatusCode::FORBIDDEN
        );
        assert_eq!(
            PolicyError::UnknownModel("x".into()).status_code(),
            http::StatusCode::NOT_FOUND
        );
        assert_eq!(
            PolicyError::InvalidInput("x".into()).status_code(),
            http::StatusCode::BAD_REQUEST
        );
        assert_eq!(
            PolicyError::Internal("x".into()).status_code(),
            http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_from_anyhow_markers() {
        let err: anyhow::Error = repo::RepoError::NotFound("pet".into()).into();
        assert_eq!(PolicyError::from(err), PolicyError::NotFound("pet".into()));

        let err: anyhow::Error = api::InputError::Invalid("bad".into()).into();
        assert_eq!(PolicyError::from(err), PolicyError::InvalidInput("bad".into()));

        assert!(matches!(
            PolicyError::from(anyhow::anyhow!("boom")),
            PolicyError::Internal(_)
        ));
    }
}
