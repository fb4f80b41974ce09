use reqwest::{Client, Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    api::types::{ApiError, ApiResponse},
    config,
    utils::storage::{self as storage_utils, SharedTokenStore},
};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    tokens: SharedTokenStore,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_token_store(storage_utils::default_token_store())
    }

    pub fn with_token_store(tokens: SharedTokenStore) -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            tokens,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self::new().with_base_url(base_url)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into().trim_end_matches('/').to_string());
        self
    }

    pub fn token_store(&self) -> SharedTokenStore {
        self.tokens.clone()
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(super) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    /// Reads the token from the durable slot at call time, never from a copy
    /// taken when the client was built.
    pub fn current_token(&self) -> Option<String> {
        match self.tokens.load() {
            Ok(token) => token.filter(|t| !t.trim().is_empty()),
            Err(err) => {
                log::warn!("Could not read session token: {}", err);
                None
            }
        }
    }

    /// Adds `Authorization: Bearer <token>` when a token is present and
    /// leaves the request untouched otherwise.
    pub fn authorize(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub(super) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let token = self.current_token();
        self.dispatch(Self::authorize(builder, token.as_deref()))
            .await
    }

    pub(super) async fn send_anonymous(
        &self,
        builder: RequestBuilder,
    ) -> Result<Response, ApiError> {
        self.dispatch(builder).await
    }

    async fn dispatch(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Invalid request: {}", e)))?;
        log::debug!("{} {}", request.method(), request.url());
        if let Some(mocked) = mocked_response(&request) {
            return mocked;
        }
        self.client.execute(request).await.map_err(|e| {
            log::error!("Request failed: {}", e);
            ApiError::request_failed(format!("Request failed: {}", e))
        })
    }

    pub(super) async fn parse_json<T>(response: Response, fallback: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from_response(response, fallback).await)
        }
    }

    /// For `{success, message}` endpoints a `success: false` body is a
    /// failure even on a 2xx status.
    pub(super) async fn parse_api_response(
        response: Response,
        fallback: &str,
    ) -> Result<ApiResponse, ApiError> {
        let status = response.status().as_u16();
        let body: ApiResponse = Self::parse_json(response, fallback).await?;
        if body.success {
            Ok(body)
        } else {
            let mut error =
                ApiError::validation(body.message.unwrap_or_else(|| fallback.to_string()));
            error.status = Some(status);
            Err(error)
        }
    }

    async fn error_from_response(response: Response, fallback: &str) -> ApiError {
        let status = response.status().as_u16();
        let body = response.json::<Value>().await.ok();
        let error = ApiError::from_response(status, body, fallback);
        log::warn!("API error {} ({}): {}", status, error.code, error.error);
        error
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(all(test, not(target_arch = "wasm32"))))]
fn mocked_response(_request: &Request) -> Option<Result<Response, ApiError>> {
    None
}

#[cfg(all(test, not(target_arch = "wasm32")))]
fn mocked_response(request: &Request) -> Option<Result<Response, ApiError>> {
    let url = request.url().as_str().to_string();
    let responder = MOCKS.with(|mocks| {
        mocks
            .borrow()
            .iter()
            .rev()
            .find(|(base, _)| url.starts_with(base.as_str()))
            .map(|(_, responder)| responder.clone())
    })?;
    Some(responder.respond(request).map(MockResponse::into_response))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
thread_local! {
    static MOCKS: std::cell::RefCell<Vec<(String, std::sync::Arc<dyn TestResponder>)>> =
        std::cell::RefCell::new(Vec::new());
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub trait TestResponder {
    fn respond(&self, request: &Request) -> Result<MockResponse, ApiError>;
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub fn register_mock(base_url: String, responder: std::sync::Arc<dyn TestResponder>) {
    MOCKS.with(|mocks| {
        let mut mocks = mocks.borrow_mut();
        mocks.retain(|(base, _)| base != &base_url);
        mocks.push((base_url, responder));
    });
}

#[cfg(all(test, not(target_arch = "wasm32")))]
#[derive(Clone, Debug)]
pub struct MockResponse {
    status: u16,
    body: Value,
}

#[cfg(all(test, not(target_arch = "wasm32")))]
impl MockResponse {
    pub fn json(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    fn into_response(self) -> Response {
        let response = http::Response::builder()
            .status(self.status)
            .header("content-type", "application/json")
            .body(self.body.to_string().into_bytes())
            .expect("valid mock response");
        Response::from(response)
    }
}
