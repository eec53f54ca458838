use super::utils::LoginFormState;
use crate::api::{ApiError, LoginRequest, SessionInformation};
use crate::state::auth;
use crate::utils::navigation::{use_navigator, Navigator};
use leptos::*;

pub const AFTER_LOGIN_PATH: &str = "/sessions";

/// Reacts to the outcome of the login action.
pub fn finish_login(
    result: Result<SessionInformation, ApiError>,
    error: RwSignal<Option<ApiError>>,
    navigator: Navigator,
) {
    match result {
        Ok(_) => {
            error.set(None);
            navigator.go(AFTER_LOGIN_PATH);
        }
        Err(err) => error.set(Some(err)),
    }
}

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<SessionInformation, ApiError>>,
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match self.form.to_request() {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();
    let navigator = use_navigator();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            finish_login(result, error, navigator);
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn login_view_model_defaults_empty() {
        with_runtime(|| {
            let vm = use_login_view_model();
            assert!(vm.error.get().is_none());
            assert!(vm.form.email.get().is_empty());
            assert!(vm.form.password.get().is_empty());
        });
    }

    #[test]
    fn submit_with_invalid_form_reports_validation_error() {
        with_runtime(|| {
            let vm = use_login_view_model();
            vm.form.email.set("invalide".into());
            vm.submit();
            let err = vm.error.get().unwrap();
            assert_eq!(err.code, "VALIDATION_ERROR");
            assert!(vm.login_action.value().get().is_none());
        });
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod flow_tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::pages::login::repository::LoginRepository;
    use crate::state::{auth::login_request, session::SessionService};
    use crate::test_support::helpers::record_navigation;
    use httpmock::prelude::*;
    use std::rc::Rc;

    fn request(password: &str) -> LoginRequest {
        LoginRequest {
            email: "yoga@studio.com".into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn successful_login_leads_to_sessions() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/auth/login");
                then.status(200).json_body(serde_json::json!({
                    "token": "jwt-token",
                    "type": "Bearer",
                    "id": 1,
                    "username": "yoga@studio.com",
                    "firstName": "Admin",
                    "lastName": "Admin",
                    "admin": true
                }));
            })
            .await;

        let runtime = create_runtime();
        let visited = record_navigation();
        let error = create_rw_signal(None::<ApiError>);
        let session = SessionService::new();
        let repo = LoginRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )));

        let result = login_request(request("test!1234"), &repo, &session).await;
        finish_login(result, error, use_navigator());

        assert!(session.is_logged());
        assert_eq!(visited.get(), vec![AFTER_LOGIN_PATH.to_string()]);
        assert!(error.get().is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_login_does_not_navigate() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/auth/login");
                then.status(401)
                    .json_body(serde_json::json!({ "message": "Bad credentials" }));
            })
            .await;

        let runtime = create_runtime();
        let visited = record_navigation();
        let error = create_rw_signal(None::<ApiError>);
        let session = SessionService::new();
        let repo = LoginRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )));

        let result = login_request(request("wrong"), &repo, &session).await;
        finish_login(result, error, use_navigator());

        assert!(!session.is_logged());
        assert!(visited.get().is_empty());
        assert_eq!(error.get().and_then(|err| err.status), Some(401));
        runtime.dispose();
    }
}
