use leptos::*;

pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

pub fn run() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
    }
    log::info!("starting Yoga app frontend");

    // Resolve the API base once up front; requests await the same cached value.
    spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}
