use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, Session, SessionPayload},
};

impl ApiClient {
    pub async fn get_sessions(&self) -> Result<Vec<Session>, ApiError> {
        let builder = self.request(Method::GET, "/session").await;
        Self::send_json(builder).await
    }

    pub async fn get_session(&self, id: &str) -> Result<Session, ApiError> {
        let builder = self.request(Method::GET, &format!("/session/{}", id)).await;
        Self::send_json(builder).await
    }

    pub async fn create_session(&self, payload: &SessionPayload) -> Result<Session, ApiError> {
        let builder = self.request(Method::POST, "/session").await.json(payload);
        Self::send_json(builder).await
    }

    pub async fn update_session(
        &self,
        id: &str,
        payload: &SessionPayload,
    ) -> Result<Session, ApiError> {
        let builder = self
            .request(Method::PUT, &format!("/session/{}", id))
            .await
            .json(payload);
        Self::send_json(builder).await
    }

    pub async fn delete_session(&self, id: &str) -> Result<(), ApiError> {
        let builder = self
            .request(Method::DELETE, &format!("/session/{}", id))
            .await;
        Self::send_empty(builder).await
    }

    pub async fn participate(&self, session_id: &str, user_id: &str) -> Result<(), ApiError> {
        let builder = self
            .request(
                Method::POST,
                &format!("/session/{}/participate/{}", session_id, user_id),
            )
            .await;
        Self::send_empty(builder).await
    }

    pub async fn un_participate(&self, session_id: &str, user_id: &str) -> Result<(), ApiError> {
        let builder = self
            .request(
                Method::DELETE,
                &format!("/session/{}/participate/{}", session_id, user_id),
            )
            .await;
        Self::send_empty(builder).await
    }
}
