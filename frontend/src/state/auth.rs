use crate::{
    api::{ApiClient, ApiError, LoginRequest, SessionInformation},
    pages::login::repository::LoginRepository,
    state::session::SessionService,
};
use futures::StreamExt;
use leptos::*;
use std::rc::Rc;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

/// Reactive mirror of the [`SessionService`] for views that re-render on change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub information: Option<SessionInformation>,
    pub is_logged: bool,
}

impl AuthState {
    fn snapshot(session: &SessionService) -> Self {
        Self {
            information: session.information(),
            is_logged: session.is_logged(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.information
            .as_ref()
            .map(|info| info.admin)
            .unwrap_or(false)
    }
}

fn create_auth_context(session: SessionService) -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState::snapshot(&session));

    let mut logged = session.is_logged_stream();
    spawn_local(async move {
        while let Some(is_logged) = logged.next().await {
            set_auth_state.set(AuthState {
                information: session.information().filter(|_| is_logged),
                is_logged,
            });
        }
    });

    (auth_state, set_auth_state)
}

/// Provides the session holder, the API client bound to it, and the reactive auth state.
#[component]
pub fn AuthProvider(session: SessionService, children: Children) -> impl IntoView {
    provide_context(session.clone());
    provide_context(ApiClient::new().with_session(session.clone()));
    let ctx = create_auth_context(session);
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionService {
    use_context::<SessionService>().unwrap_or_default()
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| ApiClient::new().with_session(use_session()))
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .unwrap_or_else(|| create_signal(AuthState::snapshot(&use_session())))
}

/// Calls the login endpoint and, only on success, hands the identity to the holder.
pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    session: &SessionService,
) -> Result<SessionInformation, ApiError> {
    let information = repo.login(request).await?;
    session.log_in(information.clone());
    Ok(information)
}

pub fn use_login_action() -> Action<LoginRequest, Result<SessionInformation, ApiError>> {
    let session = use_session();
    let repo = LoginRepository::new_with_client(Rc::new(use_api()));

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        let session = session.clone();
        async move { login_request(payload, &repo, &session).await }
    })
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::{helpers::user_info, ssr::with_runtime};

    #[test]
    fn use_auth_without_context_mirrors_an_empty_holder() {
        with_runtime(|| {
            let (state, _set_state) = use_auth();
            let snapshot = state.get();
            assert!(!snapshot.is_logged);
            assert!(snapshot.information.is_none());
        });
    }

    #[test]
    fn use_auth_without_provider_snapshots_the_context_holder() {
        with_runtime(|| {
            let session = SessionService::new();
            session.log_in(user_info(4));
            provide_context(session);
            let (state, _) = use_auth();
            assert!(state.get().is_logged);
            assert!(!state.get().is_admin());
        });
    }
}
