use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, RegisterRequest, SessionInformation},
};

impl ApiClient {
    /// Exchanges credentials for a [`SessionInformation`].
    ///
    /// The session holder is left untouched; storing the identity is up to the caller.
    pub async fn login(&self, request: &LoginRequest) -> Result<SessionInformation, ApiError> {
        let builder = self.request(Method::POST, "/auth/login").await.json(request);
        Self::send_json(builder).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let builder = self
            .request(Method::POST, "/auth/register")
            .await
            .json(request);
        Self::send_empty(builder).await
    }
}
