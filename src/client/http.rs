//! One configured HTTP client for every resource service.
//!
//! Requests go to a fixed base url and carry the stored bearer token. A 401
//! wipes the stored credentials and sends the user to the login route, once
//! per response; every other response is passed through.

use reqwest::{Method, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;

use super::{
    error::ClientError,
    navigator::{LogNavigator, Navigator},
    storage::{FileTokenStorage, TokenStorage},
};
use crate::{config, consts, models, utils};

pub type Query = Vec<(&'static str, String)>;

#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
    client: reqwest::Client,
    storage: Arc<dyn TokenStorage>,
    navigator: Arc<dyn Navigator>,
}

impl HttpClient {
    pub fn new(
        base_url: &str,
        storage: Arc<dyn TokenStorage>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: utils::REQUEST_CLIENT.clone(),
            storage,
            navigator,
        }
    }

    /// Client for the CLI: token file and logging navigator from the config
    pub fn from_config(app_config: &config::AppConfig) -> Self {
        Self::new(
            &app_config.api_base_url,
            Arc::new(FileTokenStorage::new(&app_config.token_path)),
            Arc::new(LogNavigator),
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Builds the outgoing request, with the bearer token when one is stored
    fn build_request<B>(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<&B>,
    ) -> Result<reqwest::Request, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self.client.request(method, self.url(path));
        if let Some(token) = self.storage.token() {
            request = request.bearer_auth(token);
        }
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        request
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))
    }

    async fn send<B, E>(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<&B>,
    ) -> Result<E, ClientError>
    where
        B: Serialize + ?Sized,
        E: DeserializeOwned,
    {
        let request = self.build_request(method, path, query, body)?;
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        self.check_unauthorized(status)?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        self.read_response(status, &bytes)
    }

    /// On a 401 wipes the credentials and redirects to the login route.
    ///
    /// Runs before the body is read so a broken 401 body still logs out.
    fn check_unauthorized(&self, status: StatusCode) -> Result<(), ClientError> {
        if status == StatusCode::UNAUTHORIZED {
            self.storage.clear();
            self.navigator.redirect(consts::LOGIN_ROUTE);
            return Err(ClientError::Unauthorized);
        }
        Ok(())
    }

    /// Decodes a finished response
    fn read_response<E: DeserializeOwned>(
        &self,
        status: StatusCode,
        body: &[u8],
    ) -> Result<E, ClientError> {
        self.check_unauthorized(status)?;

        if !status.is_success() {
            let message = serde_json::from_slice::<models::envelope::ErrorEnvelope>(body)
                .map(|envelope| envelope.msg)
                .unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Sends the request and unwraps `data` from the envelope
    pub async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<&B>,
    ) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let envelope: models::envelope::Envelope<T> = self.send(method, path, query, body).await?;
        Ok(envelope.data)
    }

    /// Same as [`Self::request`] for paginated lists, keeping `meta`
    pub async fn request_page<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query,
    ) -> Result<models::envelope::Page<T>, ClientError> {
        let envelope: models::envelope::PaginatedEnvelope<T> = self
            .send::<(), _>(Method::GET, path, query, None)
            .await?;

        Ok(models::envelope::Page {
            items: envelope.data,
            meta: envelope.meta,
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.get_with(path, &Query::new()).await
    }

    pub async fn get_with<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query,
    ) -> Result<T, ClientError> {
        self.request::<(), T>(Method::GET, path, query, None).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.request(Method::POST, path, &Query::new(), Some(body)).await
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.request(Method::PUT, path, &Query::new(), Some(body)).await
    }

    pub async fn patch<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.request::<(), T>(Method::PATCH, path, &Query::new(), None).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        self.request::<(), serde_json::Value>(Method::DELETE, path, &Query::new(), None)
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{navigator::RecordingNavigator, storage::MemoryTokenStorage};

    fn client_with(
        storage: Arc<MemoryTokenStorage>,
        navigator: Arc<RecordingNavigator>,
    ) -> HttpClient {
        HttpClient::new("http://localhost:8080/api/", storage, navigator)
    }

    #[test]
    fn test_unauthorized_clears_storage_and_redirects_once() {
        let storage = Arc::new(MemoryTokenStorage::with_token("expired"));
        let navigator = Arc::new(RecordingNavigator::default());
        let client = client_with(storage.clone(), navigator.clone());

        let result: Result<models::envelope::Envelope<serde_json::Value>, _> =
            client.read_response(StatusCode::UNAUTHORIZED, br#"{"code":401,"msg":"unauthorized","data":null}"#);

        assert_eq!(result, Err(ClientError::Unauthorized));
        assert_eq!(storage.token(), None);
        assert_eq!(*navigator.visited.lock().unwrap(), vec!["/login".to_string()]);
    }

    #[test]
    fn test_error_envelope_message_is_kept() {
        let storage = Arc::new(MemoryTokenStorage::with_token("t"));
        let navigator = Arc::new(RecordingNavigator::default());
        let client = client_with(storage.clone(), navigator.clone());

        let result: Result<models::envelope::Envelope<serde_json::Value>, _> = client
            .read_response(
                StatusCode::NOT_FOUND,
                br#"{"code":404,"msg":"room not found","data":null}"#,
            );

        assert_eq!(
            result,
            Err(ClientError::Api {
                status: 404,
                message: "room not found".into()
            })
        );
        assert_eq!(storage.token().as_deref(), Some("t"));
        assert!(navigator.visited.lock().unwrap().is_empty());
    }

    #[test]
    fn test_success_body_is_decoded() {
        let client = client_with(
            Arc::new(MemoryTokenStorage::default()),
            Arc::new(RecordingNavigator::default()),
        );

        let envelope: models::envelope::Envelope<models::notification::UnreadCount> = client
            .read_response(StatusCode::OK, br#"{"code":200,"msg":"success","data":{"count":3}}"#)
            .unwrap();
        assert_eq!(envelope.data.count, 3);

        let bad: Result<models::envelope::Envelope<models::notification::UnreadCount>, _> =
            client.read_response(StatusCode::OK, b"<html>");
        assert!(matches!(bad, Err(ClientError::Decode(_))));
    }

    #[test]
    fn test_unauthorized_status_logs_out_without_body() {
        let storage = Arc::new(MemoryTokenStorage::with_token("expired"));
        let navigator = Arc::new(RecordingNavigator::default());
        let client = client_with(storage.clone(), navigator.clone());

        assert_eq!(client.check_unauthorized(StatusCode::OK), Ok(()));
        assert_eq!(storage.token().as_deref(), Some("expired"));

        assert_eq!(
            client.check_unauthorized(StatusCode::UNAUTHORIZED),
            Err(ClientError::Unauthorized)
        );
        assert_eq!(storage.token(), None);
        assert_eq!(*navigator.visited.lock().unwrap(), vec!["/login".to_string()]);
    }

    #[test]
    fn test_stored_token_is_sent_as_bearer() {
        let client = client_with(
            Arc::new(MemoryTokenStorage::with_token("abc123")),
            Arc::new(RecordingNavigator::default()),
        );

        let request = client
            .build_request::<()>(Method::GET, "/pets/my", &Query::new(), None)
            .unwrap();

        assert_eq!(
            request
                .headers()
                .get(reqwest::header::AUTHORIZATION)
                .and_then(|value| value.to_str().ok()),
            Some("Bearer abc123")
        );
        assert_eq!(request.url().as_str(), "http://localhost:8080/api/pets/my");
    }

    #[test]
    fn test_empty_storage_sends_no_authorization() {
        let client = client_with(
            Arc::new(MemoryTokenStorage::default()),
            Arc::new(RecordingNavigator::default()),
        );

        let query: Query = vec![("page", "2".into()), ("limit", "10".into())];
        let request = client
            .build_request(Method::POST, "/rooms", &query, Some(&serde_json::json!({ "name": "A1" })))
            .unwrap();

        assert!(request.headers().get(reqwest::header::AUTHORIZATION).is_none());
        assert_eq!(request.url().query(), Some("page=2&limit=10"));
        assert_eq!(
            request
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
            Some("application/json")
        );
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let client = client_with(
            Arc::new(MemoryTokenStorage::default()),
            Arc::new(RecordingNavigator::default()),
        );

        assert_eq!(client.url("/rooms/available"), "http://localhost:8080/api/rooms/available");
    }
}
