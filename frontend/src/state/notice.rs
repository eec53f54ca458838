use leptos::*;
use std::time::Duration;

pub const NOTICE_DURATION: Duration = Duration::from_millis(3000);

/// Transient confirmation shown after a successful action.
#[derive(Clone, Copy)]
pub struct NoticeContext {
    pub message: RwSignal<Option<String>>,
    generation: RwSignal<u32>,
}

impl NoticeContext {
    fn new() -> Self {
        Self {
            message: create_rw_signal(None),
            generation: create_rw_signal(0),
        }
    }

    pub fn show(&self, message: impl Into<String>) {
        let message = message.into();
        log::debug!("notice: {}", message);
        self.message.set(Some(message));
        self.generation.update(|value| *value = value.wrapping_add(1));
        self.schedule_expiry();
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_expiry(&self) {
        let shown = self.generation.get_untracked();
        let ctx = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(NOTICE_DURATION.as_millis() as u32).await;
            // A newer notice owns the slot now.
            if ctx.generation.get_untracked() == shown {
                ctx.message.set(None);
            }
        });
    }

    // Browser timers only exist on wasm; host renders keep the notice until dismissed.
    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_expiry(&self) {}

    pub fn dismiss(&self) {
        self.message.set(None);
    }
}

pub fn provide_notice() -> NoticeContext {
    let ctx = NoticeContext::new();
    provide_context(ctx);
    ctx
}

pub fn use_notice() -> NoticeContext {
    use_context::<NoticeContext>().unwrap_or_else(NoticeContext::new)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn notice_starts_empty_and_dismisses() {
        with_runtime(|| {
            let ctx = provide_notice();
            assert!(use_notice().message.get().is_none());
            ctx.message.set(Some("Session created !".into()));
            assert_eq!(use_notice().message.get().as_deref(), Some("Session created !"));
            ctx.dismiss();
            assert!(ctx.message.get().is_none());
        });
    }

    #[test]
    fn newer_notice_replaces_the_current_one() {
        with_runtime(|| {
            let ctx = provide_notice();
            ctx.show("Session created !");
            ctx.show("Session updated !");
            assert_eq!(ctx.message.get().as_deref(), Some("Session updated !"));
        });
    }
}
