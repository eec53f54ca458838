use crate::api::{ApiClient, ApiError, Session, SessionPayload, Teacher};
use std::rc::Rc;

/// Page-facing access to the session, teacher and participation endpoints.
#[derive(Clone)]
pub struct SessionsRepository {
    client: Rc<ApiClient>,
}

impl SessionsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_sessions(&self) -> Result<Vec<Session>, ApiError> {
        self.client.get_sessions().await
    }

    pub async fn fetch_session(&self, id: &str) -> Result<Session, ApiError> {
        self.client.get_session(id).await
    }

    pub async fn fetch_teachers(&self) -> Result<Vec<Teacher>, ApiError> {
        self.client.get_teachers().await
    }

    pub async fn fetch_teacher(&self, id: i64) -> Result<Teacher, ApiError> {
        self.client.get_teacher(&id.to_string()).await
    }

    pub async fn create(&self, payload: &SessionPayload) -> Result<Session, ApiError> {
        self.client.create_session(payload).await
    }

    pub async fn update(&self, id: &str, payload: &SessionPayload) -> Result<Session, ApiError> {
        self.client.update_session(id, payload).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_session(id).await
    }

    pub async fn participate(&self, session_id: &str, user_id: i64) -> Result<(), ApiError> {
        self.client
            .participate(session_id, &user_id.to_string())
            .await
    }

    pub async fn un_participate(&self, session_id: &str, user_id: i64) -> Result<(), ApiError> {
        self.client
            .un_participate(session_id, &user_id.to_string())
            .await
    }
}
