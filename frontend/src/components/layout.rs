use crate::{
    state::auth::{use_auth, use_session},
    utils::navigation::use_navigator,
};
use leptos::*;

const LINK_CLASS: &str =
    "link text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let session = use_session();
    let navigator = use_navigator();
    let is_logged = create_memo(move |_| auth.get().is_logged);

    let logout = Callback::new(move |_: ()| {
        session.log_out();
        navigator.go("/");
    });

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-fg">"Yoga app"</h1>
                    <nav class="flex space-x-4">
                        <Show
                            when=move || is_logged.get()
                            fallback=|| {
                                view! {
                                    <a href="/login" class=LINK_CLASS>"Login"</a>
                                    <a href="/register" class=LINK_CLASS>"Register"</a>
                                }
                            }
                        >
                            <a href="/sessions" class=LINK_CLASS>"Sessions"</a>
                            <a href="/me" class=LINK_CLASS>"Account"</a>
                            <button type="button" class=LINK_CLASS on:click=move |_| logout.call(())>
                                "Logout"
                            </button>
                        </Show>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">{children()}</main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}
