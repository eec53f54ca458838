use crate::{state::auth::use_session, utils::navigation::use_navigator};
use leptos::*;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_FOR_LOGGED_IN: &str = "/sessions";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

/// Protected routes: only logged-in users pass.
pub fn guard_decision(is_logged: bool) -> GuardDecision {
    if is_logged {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(LOGIN_PATH)
    }
}

/// Guest routes (login, register): logged-in users are sent to their sessions.
pub fn guest_decision(is_logged: bool) -> GuardDecision {
    if is_logged {
        GuardDecision::Redirect(HOME_FOR_LOGGED_IN)
    } else {
        GuardDecision::Allow
    }
}

fn render_guarded(decision: GuardDecision, children: Children) -> View {
    match decision {
        GuardDecision::Allow => children().into_view(),
        GuardDecision::Redirect(path) => {
            log::debug!("route guard redirecting to {}", path);
            let navigator = use_navigator();
            create_effect(move |_| navigator.go(path));
            ().into_view()
        }
    }
}

/// Renders `children` only when the holder currently has an identity.
#[component]
pub fn RequireAuth(children: Children) -> impl IntoView {
    let decision = guard_decision(use_session().is_logged());
    render_guarded(decision, children)
}

#[component]
pub fn RequireGuest(children: Children) -> impl IntoView {
    let decision = guest_decision(use_session().is_logged());
    render_guarded(decision, children)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_guard_follows_login_state() {
        assert_eq!(guard_decision(true), GuardDecision::Allow);
        assert_eq!(guard_decision(false), GuardDecision::Redirect("/login"));
    }

    #[test]
    fn guest_guard_is_the_inverse() {
        assert_eq!(guest_decision(false), GuardDecision::Allow);
        assert_eq!(guest_decision(true), GuardDecision::Redirect("/sessions"));
    }
}
