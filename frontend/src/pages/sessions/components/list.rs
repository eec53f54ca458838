use crate::{api::Session, pages::sessions::utils::session_subtitle};
use leptos::*;

#[component]
pub fn SessionCards(sessions: Vec<Session>, is_admin: bool) -> impl IntoView {
    view! {
        <div class="list">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold">"Rentals available"</h2>
                <Show when=move || is_admin fallback=|| ()>
                    <a href="/sessions/create" class="button create">"Create"</a>
                </Show>
            </div>
            <div class="items grid gap-4 md:grid-cols-2">
                {sessions
                    .into_iter()
                    .map(|session| view! { <SessionCard session=session is_admin=is_admin /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn SessionCard(session: Session, is_admin: bool) -> impl IntoView {
    let id = session.id.map(|id| id.to_string()).unwrap_or_default();
    let subtitle = session_subtitle(&session);
    let detail_href = format!("/sessions/detail/{}", id);
    let edit_href = format!("/sessions/update/{}", id);

    view! {
        <div class="item rounded-lg shadow bg-surface-elevated p-4 space-y-2">
            <h3 class="text-lg font-medium">{session.name}</h3>
            <p class="text-sm text-fg-muted">{subtitle}</p>
            <img class="picture" src="assets/sessions.png" alt="Yoga session" />
            <p>{session.description}</p>
            <div class="flex gap-2">
                <a href=detail_href class="button">"Detail"</a>
                <Show when=move || is_admin fallback=|| ()>
                    <a href=edit_href.clone() class="button">"Edit"</a>
                </Show>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn session(id: i64, name: &str) -> Session {
        Session {
            id: Some(id),
            name: name.into(),
            date: "2025-11-13T00:00:00.000+00:00".parse().unwrap(),
            description: format!("{} description", name),
            teacher_id: 1,
            users: vec![],
            created_at: None,
            updated_at: None,
        }
    }

    fn render(is_admin: bool) -> String {
        render_to_string(move || {
            let sessions = vec![session(1, "Yoga Thursday"), session(2, "Yoga Friday")];
            view! { <SessionCards sessions=sessions is_admin=is_admin /> }
        })
    }

    #[test]
    fn cards_show_name_subtitle_and_detail_link() {
        let html = render(false);
        assert_eq!(html.matches("class=\"item ").count(), 2);
        assert!(html.contains("Yoga Thursday"));
        assert!(html.contains("Session on November 13, 2025"));
        assert!(html.contains("/sessions/detail/2"));
        assert!(!html.contains("Create"));
        assert!(!html.contains("Edit"));
    }

    #[test]
    fn admins_see_create_and_edit() {
        let html = render(true);
        assert!(html.contains("Create"));
        assert!(html.contains("/sessions/update/1"));
        assert_eq!(html.matches("/sessions/update/").count(), 2);
    }
}
