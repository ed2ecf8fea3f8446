use derive_more::{Display, Error};

/// Failure of a single HTTP call
#[derive(Debug, Display, Error, Clone, PartialEq)]
pub enum ClientError {
    #[display("transport error: {_0}")]
    Transport(#[error(not(source))] String),
    #[display("unauthorized")]
    Unauthorized,
    #[display("api error {status}: {message}")]
    Api { status: u16, message: String },
    #[display("decode error: {_0}")]
    Decode(#[error(not(source))] String),
}

/// What a resource service reports to its caller
#[derive(Debug, Display, Error, Clone, PartialEq)]
#[display("{message}")]
pub struct ServiceError {
    pub message: String,
    pub status: Option<u16>,
}

impl ServiceError {
    /// Keeps the server message for expected (4xx) failures and falls back
    /// to `fallback` for everything else.
    pub fn from_client(err: ClientError, fallback: &str) -> Self {
        log::debug!("{fallback}: {err}");

        match err {
            ClientError::Api { status, message } if status < 500 && !message.is_empty() => Self {
                message,
                status: Some(status),
            },
            ClientError::Api { status, .. } => Self {
                message: fallback.to_string(),
                status: Some(status),
            },
            ClientError::Unauthorized => Self {
                message: fallback.to_string(),
                status: Some(401),
            },
            ClientError::Transport(_) | ClientError::Decode(_) => Self {
                message: fallback.to_string(),
                status: None,
            },
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status.is_some_and(|status| (400..500).contains(&status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_server_message_for_4xx() {
        let err = ServiceError::from_client(
            ClientError::Api {
                status: 404,
                message: "medicine not found".into(),
            },
            "Failed to fetch medicine",
        );

        assert_eq!(err.message, "medicine not found");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_falls_back_for_5xx_and_transport() {
        let err = ServiceError::from_client(
            ClientError::Api {
                status: 500,
                message: "internal server error".into(),
            },
            "Failed to fetch rooms",
        );
        assert_eq!(err.message, "Failed to fetch rooms");
        assert!(!err.is_client_error());

        let err = ServiceError::from_client(
            ClientError::Transport("connection refused".into()),
            "Failed to fetch rooms",
        );
        assert_eq!(err.message, "Failed to fetch rooms");
        assert_eq!(err.status, None);
    }
}
