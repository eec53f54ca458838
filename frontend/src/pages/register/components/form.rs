use crate::{
    api::ApiError, components::error::ErrorNotice, pages::register::utils::RegisterFormState,
};
use leptos::{ev::SubmitEvent, *};
use web_sys::HtmlInputElement;

#[component]
fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="block text-sm font-medium">{label}</label>
            <input
                id=id
                name=id
                type=input_type
                required
                class="w-full border border-form-control-border rounded px-3 py-2"
                prop:value=value
                on:input=move |ev| {
                    let target = event_target::<HtmlInputElement>(&ev);
                    value.set(target.value());
                }
            />
        </div>
    }
}

#[component]
pub fn RegisterForm(
    form: RegisterFormState,
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
        <div class="register flex justify-center py-12 px-4">
            <div class="max-w-md w-full bg-surface-elevated rounded-lg shadow p-6 space-y-6">
                <h2 class="text-2xl font-bold text-center">"Register"</h2>
                <form class="space-y-4" on:submit=handle_submit>
                    <TextField id="firstName" label="First name" value=form.first_name />
                    <TextField id="lastName" label="Last name" value=form.last_name />
                    <TextField id="email" label="Email" value=form.email />
                    <TextField id="password" label="Password" input_type="password" value=form.password />
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

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::components::error::GENERIC_ERROR;
    use crate::test_support::ssr::render_to_string;

    fn render(complete: bool, error: Option<ApiError>) -> String {
        render_to_string(move || {
            let form = RegisterFormState::default();
            if complete {
                form.first_name.set("Jean".into());
                form.last_name.set("Dupont".into());
                form.email.set("test@test.fr".into());
                form.password.set("test!1234".into());
            }
            view! {
                <RegisterForm
                    form=form
                    error=Signal::derive(move || error.clone())
                    pending=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn renders_all_fields() {
        let html = render(false, None);
        for id in ["firstName", "lastName", "email", "password"] {
            assert!(html.contains(&format!("id=\"{}\"", id)), "missing {}", id);
        }
        assert!(html.contains("disabled"));
    }

    #[test]
    fn complete_form_enables_submit() {
        assert!(!render(true, None).contains("disabled"));
    }

    #[test]
    fn failure_shows_generic_error() {
        let html = render(true, Some(ApiError::http(400, None)));
        assert!(html.contains(GENERIC_ERROR));
    }
}
