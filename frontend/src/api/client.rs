use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config, state::session::SessionService};

/// Thin wrapper over the external booking API.
///
/// Every public call maps onto exactly one HTTP request. Failures are handed
/// back to the caller as [`ApiError`] without retry.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: Option<SessionService>,
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
            session: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            session: None,
        }
    }

    /// Attaches the bearer token of `session`, when one is held, to every request.
    pub fn with_session(mut self, session: SessionService) -> Self {
        self.session = Some(session);
        self
    }

    pub(super) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(super) async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let base_url = self.resolved_base_url().await;
        let url = format!("{}{}", base_url.trim_end_matches('/'), path);
        log::debug!("{} {}", method, url);
        let builder = self.client.request(method, url);
        match self.session.as_ref().and_then(SessionService::token) {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn execute(builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await.map_err(|e| {
            log::warn!("request failed: {}", e);
            ApiError::request_failed(format!("Request failed: {}", e))
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let details = response
            .text()
            .await
            .ok()
            .and_then(|body| serde_json::from_str(&body).ok());
        log::warn!("request answered with status {}", status);
        Err(ApiError::http(status.as_u16(), details))
    }

    pub(super) async fn send_json<T: DeserializeOwned>(
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        Self::execute(builder)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::parse_failed(format!("Failed to parse response: {}", e)))
    }

    /// Sends a request whose success carries no body worth decoding.
    pub(super) async fn send_empty(builder: RequestBuilder) -> Result<(), ApiError> {
        Self::execute(builder).await.map(|_| ())
    }
}
