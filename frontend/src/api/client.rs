use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::types::ApiError;
use crate::config;

#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into().trim_end_matches('/').to_string()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.clone(),
            None => config::await_api_base_url().await,
        }
    }

    pub(crate) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Failed to build request: {}", e)))?;
        log::debug!("{} {}", request.method(), request.url());

        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(mocked) = mock::respond(&request) {
            return mocked;
        }

        self.client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    pub(crate) async fn map_json_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::decode(format!("Failed to parse response: {}", e)))
    }

    /// Mutation endpoints answer with an entity, an id, or nothing at all; only the
    /// status matters to callers.
    pub(crate) async fn map_empty_response(&self, response: Response) -> Result<(), ApiError> {
        Self::ensure_success(response).await.map(|_| ())
    }

    async fn ensure_success(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let error = ApiError::from_response_body(status.as_u16(), &body);
        log::error!("{} -> {}", status, error.error);
        Err(error)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) mod mock {
    use super::ApiError;
    use std::sync::{Arc, Mutex, OnceLock};

    pub(crate) trait TestResponder: Send + Sync {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError>;
    }

    #[derive(Clone, Debug)]
    pub(crate) struct MockResponse {
        pub status: u16,
        pub body: Vec<u8>,
    }

    impl MockResponse {
        pub fn json(status: u16, body: serde_json::Value) -> Self {
            Self {
                status,
                body: body.to_string().into_bytes(),
            }
        }

        pub fn empty(status: u16) -> Self {
            Self {
                status,
                body: Vec::new(),
            }
        }

        fn into_response(self) -> Result<reqwest::Response, ApiError> {
            let response = http::Response::builder()
                .status(self.status)
                .header("content-type", "application/json")
                .body(self.body)
                .map_err(|e| ApiError::unknown(e.to_string()))?;
            Ok(reqwest::Response::from(response))
        }
    }

    type Registry = Mutex<Vec<(String, Arc<dyn TestResponder>)>>;

    fn registry() -> &'static Registry {
        static MOCKS: OnceLock<Registry> = OnceLock::new();
        MOCKS.get_or_init(|| Mutex::new(Vec::new()))
    }

    pub(crate) fn register_mock(base_url: String, responder: Arc<dyn TestResponder>) {
        let prefix = format!("{}/", base_url.trim_end_matches('/'));
        if let Ok(mut mocks) = registry().lock() {
            mocks.retain(|(existing, _)| existing != &prefix);
            mocks.push((prefix, responder));
        }
    }

    pub(super) fn respond(
        request: &reqwest::Request,
    ) -> Option<Result<reqwest::Response, ApiError>> {
        let url = request.url().as_str();
        let responder = registry()
            .lock()
            .ok()?
            .iter()
            .rev()
            .find(|(prefix, _)| url.starts_with(prefix.as_str()))
            .map(|(_, responder)| responder.clone())?;
        Some(
            responder
                .respond(request)
                .and_then(MockResponse::into_response),
        )
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    #[tokio::test]
    async fn endpoint_joins_explicit_base_url() {
        let client = ApiClient::new_with_base_url("http://hr.local/api/");
        assert_eq!(client.endpoint("/Employee").await, "http://hr.local/api/Employee");
    }

    #[tokio::test]
    async fn map_json_response_reports_server_message() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/Projects/7");
            then.status(404).json_body(json!({ "message": "Project not found" }));
        });
        let client = ApiClient::new_with_base_url(server.url("/api"));

        let response = client
            .send(client.http_client().get(client.endpoint("/Projects/7").await))
            .await
            .unwrap();
        let err = client
            .map_json_response::<serde_json::Value>(response)
            .await
            .unwrap_err();
        assert_eq!(err.error, "Project not found");
        assert_eq!(err.code, "HTTP_404");
    }

    #[tokio::test]
    async fn map_json_response_flags_unparsable_bodies() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/Employee");
            then.status(200).json_body(json!({ "unexpected": true }));
        });
        let client = ApiClient::new_with_base_url(server.url("/api"));

        let response = client
            .send(client.http_client().get(client.endpoint("/Employee").await))
            .await
            .unwrap();
        let err = client
            .map_json_response::<Vec<serde_json::Value>>(response)
            .await
            .unwrap_err();
        assert_eq!(err.code, "DECODE_ERROR");
    }

    #[tokio::test]
    async fn map_empty_response_ignores_success_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(DELETE).path("/Employee/3");
            then.status(204);
        });
        let client = ApiClient::new_with_base_url(server.url("/api"));

        let response = client
            .send(client.http_client().delete(client.endpoint("/Employee/3").await))
            .await
            .unwrap();
        assert!(client.map_empty_response(response).await.is_ok());
    }
}
