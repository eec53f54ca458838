use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};

/// Client-side navigation handle shared through context.
///
/// Falls back to a full page load when no router has provided one.
#[derive(Clone, Copy)]
pub struct Navigator(Callback<String>);

impl Navigator {
    pub fn new(callback: Callback<String>) -> Self {
        Self(callback)
    }

    pub fn go(&self, path: &str) {
        self.0.call(path.to_string());
    }
}

/// Must run under a `<Router/>`.
pub fn provide_navigator() {
    let navigate = use_navigate();
    provide_context(Navigator(Callback::new(move |path: String| {
        navigate(&path, NavigateOptions::default());
    })));
}

pub fn use_navigator() -> Navigator {
    use_context::<Navigator>()
        .unwrap_or_else(|| Navigator(Callback::new(|path: String| hard_navigate(&path))))
}

fn hard_navigate(path: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.location().set_href(path);
    }
}

pub fn history_back() {
    if let Some(history) = web_sys::window().and_then(|win| win.history().ok()) {
        let _ = history.back();
    }
}
