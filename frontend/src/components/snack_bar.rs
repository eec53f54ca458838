use crate::state::notice::use_notice;
use leptos::*;

#[component]
pub fn SnackBar() -> impl IntoView {
    let notice = use_notice();
    view! {
        <Show when=move || notice.message.get().is_some() fallback=|| ()>
            <div
                class="snack-bar fixed bottom-4 left-1/2 -translate-x-1/2 flex items-center gap-4 px-4 py-3 rounded shadow-lg bg-surface-inverse text-text-inverse"
                role="status"
            >
                <span>{move || notice.message.get().unwrap_or_default()}</span>
                <button type="button" class="font-medium" on:click=move |_| notice.dismiss()>
                    "Close"
                </button>
            </div>
        </Show>
    }
}
