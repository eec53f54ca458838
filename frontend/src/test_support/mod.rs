#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{SessionInformation, Teacher};
    use crate::state::session::SessionService;
    use crate::utils::navigation::Navigator;
    use leptos::*;

    pub fn admin_info() -> SessionInformation {
        SessionInformation {
            token: "admin-token".into(),
            token_type: "Bearer".into(),
            id: 1,
            username: "yoga@studio.com".into(),
            first_name: "Admin".into(),
            last_name: "Admin".into(),
            admin: true,
        }
    }

    pub fn user_info(id: i64) -> SessionInformation {
        SessionInformation {
            token: "user-token".into(),
            token_type: "Bearer".into(),
            id,
            username: "test@test.fr".into(),
            first_name: "Jean".into(),
            last_name: "Dupont".into(),
            admin: false,
        }
    }

    pub fn teacher(id: i64, first_name: &str, last_name: &str) -> Teacher {
        Teacher {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Puts a holder in context, logged in as `information` when given.
    pub fn provide_session(information: Option<SessionInformation>) -> SessionService {
        let session = SessionService::new();
        if let Some(information) = information {
            session.log_in(information);
        }
        provide_context(session.clone());
        session
    }

    /// Puts a navigator in context that only records the paths it is sent to.
    pub fn record_navigation() -> RwSignal<Vec<String>> {
        let visited = create_rw_signal(Vec::<String>::new());
        provide_context(Navigator::new(Callback::new(move |path: String| {
            visited.update(|paths| paths.push(path));
        })));
        visited
    }
}
