use crate::api::{ApiClient, ApiError, User};
use std::rc::Rc;

#[derive(Clone)]
pub struct MeRepository {
    client: Rc<ApiClient>,
}

impl MeRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_user(&self, id: i64) -> Result<User, ApiError> {
        self.client.get_user(&id.to_string()).await
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_user(&id.to_string()).await
    }
}
