use crate::{api::ApiError, components::error::ErrorNotice, pages::login::utils::LoginFormState};
use leptos::{ev::SubmitEvent, *};
use web_sys::HtmlInputElement;

#[component]
pub fn LoginForm(
    form: LoginFormState,
    error: Signal<Option<ApiError>>,
    pending: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };
    let disabled = move || pending.get() || !form.is_valid();

    view! {
        <div class="login flex justify-center py-12 px-4">
            <div class="max-w-md w-full bg-surface-elevated rounded-lg shadow p-6 space-y-6">
                <h2 class="text-2xl font-bold text-center">"Login"</h2>
                <form class="space-y-4" on:submit=handle_submit>
                    <div>
                        <label for="email" class="block text-sm font-medium">"Email"</label>
                        <input
                            id="email"
                            name="email"
                            type="text"
                            autocomplete="email"
                            required
                            class="w-full border border-form-control-border rounded px-3 py-2"
                            prop:value=form.email
                            on:input=move |ev| {
                                let target = event_target::<HtmlInputElement>(&ev);
                                form.email.set(target.value());
                            }
                        />
                    </div>
                    <div>
                        <label for="password" class="block text-sm font-medium">"Password"</label>
                        <div class="flex gap-2">
                            <input
                                id="password"
                                name="password"
                                type=move || if form.hide_password.get() { "password" } else { "text" }
                                autocomplete="current-password"
                                required
                                class="flex-1 border border-form-control-border rounded px-3 py-2"
                                prop:value=form.password
                                on:input=move |ev| {
                                    let target = event_target::<HtmlInputElement>(&ev);
                                    form.password.set(target.value());
                                }
                            />
                            <button
                                type="button"
                                class="text-sm px-2"
                                aria-label="Hide password"
                                on:click=move |_| form.toggle_password_visibility()
                            >
                                {move || if form.hide_password.get() { "Show" } else { "Hide" }}
                            </button>
                        </div>
                    </div>
                    <button
                        type="submit"
                        disabled=disabled
                        class="w-full py-2 px-4 rounded text-white bg-action-primary-bg"
                    >
                        "Submit"
                    </button>
                    <ErrorNotice error=error />
                </form>
            </div>
        </div>
    }
}
