use crate::{
    pages::sessions::{
        utils::{attendees_label, participation_label, teacher_display_name},
        view_model::SessionDetail,
    },
    utils::{
        navigation::history_back,
        time::{format_instant, format_timestamp},
    },
};
use leptos::*;

#[component]
pub fn SessionDetailCard(
    detail: SessionDetail,
    is_admin: bool,
    user_id: Option<i64>,
    pending: Signal<bool>,
    on_delete: Callback<()>,
    on_participation: Callback<bool>,
) -> impl IntoView {
    let SessionDetail { session, teacher } = detail;
    let is_participant = user_id
        .map(|id| session.has_participant(id))
        .unwrap_or(false);

    let actions = if is_admin {
        view! {
            <button
                type="button"
                class="button delete"
                disabled=move || pending.get()
                on:click=move |_| on_delete.call(())
            >
                "Delete"
            </button>
        }
        .into_view()
    } else {
        view! {
            <button
                type="button"
                class="button participation"
                disabled=move || pending.get()
                on:click=move |_| on_participation.call(!is_participant)
            >
                {participation_label(is_participant)}
            </button>
        }
        .into_view()
    };

    view! {
        <div class="detail rounded-lg shadow bg-surface-elevated p-6 space-y-4">
            <div class="flex items-center justify-between">
                <button type="button" class="back" aria-label="Back" on:click=move |_| history_back()>
                    "Back"
                </button>
                <h1 class="text-2xl font-semibold">{session.name.clone()}</h1>
                {actions}
            </div>
            <p class="teacher">{teacher_display_name(&teacher)}</p>
            <div class="flex gap-6 text-sm">
                <span class="attendees">{attendees_label(&session)}</span>
                <span class="date">{format_instant(&session.date)}</span>
            </div>
            <div class="description">
                <h3 class="font-medium">"Description:"</h3>
                <p>{session.description.clone()}</p>
            </div>
            <div class="flex gap-6 text-xs text-fg-muted">
                <span>"Create at: " {format_timestamp(session.created_at.as_ref())}</span>
                <span>"Last update: " {format_timestamp(session.updated_at.as_ref())}</span>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::Session;
    use crate::test_support::{helpers::teacher, ssr::render_to_string};

    fn detail(users: Vec<i64>) -> SessionDetail {
        SessionDetail {
            session: Session {
                id: Some(1),
                name: "Yoga Thursday".into(),
                date: "2025-11-13T00:00:00.000+00:00".parse().unwrap(),
                description: "Yoga Test 1".into(),
                teacher_id: 1,
                users,
                created_at: "2025-11-10T19:03:49".parse().ok(),
                updated_at: None,
            },
            teacher: teacher(1, "Margot", "Delahaye"),
        }
    }

    fn render(users: Vec<i64>, is_admin: bool, user_id: Option<i64>) -> String {
        render_to_string(move || {
            view! {
                <SessionDetailCard
                    detail=detail(users)
                    is_admin=is_admin
                    user_id=user_id
                    pending=Signal::derive(|| false)
                    on_delete=Callback::new(|_| {})
                    on_participation=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn shows_session_information() {
        let html = render(vec![2], false, Some(1));
        assert!(html.contains("Yoga Thursday"));
        assert!(html.contains("Margot DELAHAYE"));
        assert!(html.contains("1 attendees"));
        assert!(html.contains("November 13, 2025"));
        assert!(html.contains("November 10, 2025"));
        assert!(html.contains("Yoga Test 1"));
    }

    #[test]
    fn participation_button_follows_membership() {
        let outside = render(vec![2], false, Some(1));
        assert!(outside.contains("Participate"));
        assert!(!outside.contains("Do not participate"));
        assert!(!outside.contains("Delete"));

        let inside = render(vec![1, 2], false, Some(1));
        assert!(inside.contains("Do not participate"));
        assert!(!inside.contains("Participate"));
        assert!(inside.contains("2 attendees"));
    }

    #[test]
    fn admins_get_delete_instead_of_participation() {
        let html = render(vec![], true, Some(1));
        assert!(html.contains("Delete"));
        assert!(!html.contains("articipate"));
    }
}
