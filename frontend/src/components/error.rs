use crate::api::ApiError;
use leptos::*;

/// Failures are reported without detail; the cause only goes to the log.
pub const GENERIC_ERROR: &str = "An error occurred";

#[component]
pub fn ErrorNotice(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    create_effect(move |_| {
        if let Some(err) = error.get() {
            log::warn!("action failed ({}): {}", err.code, err.error);
        }
    });

    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <p class="error text-sm text-status-error-text mt-2" role="alert">
                {GENERIC_ERROR}
            </p>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn error_notice_renders_generic_text_only() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::http(401, None)));
            view! { <ErrorNotice error=signal /> }
        });
        assert!(html.contains("class=\"error"));
        assert!(html.contains(GENERIC_ERROR));
        assert!(!html.contains("401"));
    }

    #[test]
    fn error_notice_is_empty_without_error() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<ApiError>);
            view! { <ErrorNotice error=signal /> }
        });
        assert!(!html.contains(GENERIC_ERROR));
    }
}
