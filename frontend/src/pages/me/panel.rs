use super::view_model::use_me_view_model;
use crate::{
    api::User,
    components::{error::ErrorNotice, layout::LoadingSpinner},
    utils::{navigation::history_back, time::format_timestamp},
};
use leptos::*;

#[component]
pub fn AccountCard(user: User, pending: Signal<bool>, on_delete: Callback<()>) -> impl IntoView {
    let full_name = format!("{} {}", user.first_name, user.last_name.to_uppercase());
    let admin_section = if user.admin {
        view! { <p class="admin">"You are admin"</p> }.into_view()
    } else {
        view! {
            <div class="delete-account space-y-2">
                <p>"Delete my account:"</p>
                <button
                    type="button"
                    class="button delete"
                    disabled=move || pending.get()
                    on:click=move |_| on_delete.call(())
                >
                    "Detail"
                </button>
            </div>
        }
        .into_view()
    };

    view! {
        <div class="me rounded-lg shadow bg-surface-elevated p-6 space-y-4">
            <div class="flex items-center gap-4">
                <button type="button" class="back" aria-label="Back" on:click=move |_| history_back()>
                    "Back"
                </button>
                <h1 class="text-2xl font-semibold">"User information"</h1>
            </div>
            <p>"Name: " {full_name}</p>
            <p>"Email: " {user.email.clone()}</p>
            {admin_section}
            <div class="flex gap-6 text-xs text-fg-muted">
                <span>"Create at: " {format_timestamp(user.created_at.as_ref())}</span>
                <span>"Last update: " {format_timestamp(user.updated_at.as_ref())}</span>
            </div>
        </div>
    }
}

#[component]
pub fn MePanel() -> impl IntoView {
    let vm = use_me_view_model();
    let pending: Signal<bool> = vm.delete_action.pending().into();
    let on_delete = Callback::new(move |_: ()| vm.delete_action.dispatch(()));

    view! {
        <Suspense fallback=|| view! { <LoadingSpinner /> }>
            {move || {
                vm.user
                    .get()
                    .map(|result| match result {
                        Ok(user) => {
                            view! { <AccountCard user=user pending=pending on_delete=on_delete /> }
                                .into_view()
                        }
                        Err(err) => {
                            view! { <ErrorNotice error=Signal::derive(move || Some(err.clone())) /> }
                                .into_view()
                        }
                    })
            }}
        </Suspense>
        <ErrorNotice error=vm.error />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn user(admin: bool) -> User {
        User {
            id: 1,
            email: "yoga@studio.com".into(),
            first_name: "Admin".into(),
            last_name: "Admin".into(),
            admin,
            password: None,
            created_at: "2025-11-07T15:46:58".parse().ok(),
            updated_at: None,
        }
    }

    fn render(admin: bool) -> String {
        render_to_string(move || {
            view! {
                <AccountCard
                    user=user(admin)
                    pending=Signal::derive(|| false)
                    on_delete=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn admin_sees_admin_notice_without_delete() {
        let html = render(true);
        assert!(html.contains("Name: "));
        assert!(html.contains("Admin ADMIN"));
        assert!(html.contains("yoga@studio.com"));
        assert!(html.contains("You are admin"));
        assert!(!html.contains("Delete my account"));
        assert!(html.contains("November 7, 2025"));
    }

    #[test]
    fn regular_user_can_delete_account() {
        let html = render(false);
        assert!(html.contains("Delete my account"));
        assert!(!html.contains("You are admin"));
    }
}
