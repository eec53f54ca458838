use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, Teacher},
};

impl ApiClient {
    pub async fn get_teachers(&self) -> Result<Vec<Teacher>, ApiError> {
        let builder = self.request(Method::GET, "/teacher").await;
        Self::send_json(builder).await
    }

    pub async fn get_teacher(&self, id: &str) -> Result<Teacher, ApiError> {
        let builder = self.request(Method::GET, &format!("/teacher/{}", id)).await;
        Self::send_json(builder).await
    }
}
