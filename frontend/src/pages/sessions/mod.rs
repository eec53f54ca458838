use leptos::*;
use leptos_router::use_params_map;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::{SessionDetailPanel, SessionFormPanel, SessionsListPanel};
use utils::FormMode;

#[component]
pub fn SessionsPage() -> impl IntoView {
    view! { <SessionsListPanel /> }
}

#[component]
pub fn SessionDetailPage() -> impl IntoView {
    let params = use_params_map();
    let session_id =
        Signal::derive(move || params.with(|params| params.get("id").cloned().unwrap_or_default()));
    view! { <SessionDetailPanel session_id=session_id /> }
}

#[component]
pub fn SessionFormPage() -> impl IntoView {
    let params = use_params_map();
    let mode = FormMode::from_param(params.with_untracked(|params| params.get("id").cloned()));
    view! { <SessionFormPanel mode=mode /> }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{
        helpers::{admin_info, user_info},
        ssr::render_with_session,
    };

    #[test]
    fn form_panel_renders_nothing_for_non_admins() {
        let html = render_with_session(Some(user_info(2)), || {
            view! { <SessionFormPanel mode=FormMode::Create /> }
        });
        assert!(!html.contains("<form"));
    }

    #[test]
    fn form_panel_renders_for_admins() {
        let html = render_with_session(Some(admin_info()), || {
            view! { <SessionFormPanel mode=FormMode::Create /> }
        });
        assert!(html.contains("<form"));
        assert!(html.contains("Create session"));
    }
}
