use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, User},
};

impl ApiClient {
    pub async fn get_user(&self, id: &str) -> Result<User, ApiError> {
        let builder = self.request(Method::GET, &format!("/user/{}", id)).await;
        Self::send_json(builder).await
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        let builder = self.request(Method::DELETE, &format!("/user/{}", id)).await;
        Self::send_empty(builder).await
    }
}
