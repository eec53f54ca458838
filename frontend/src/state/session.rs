//! Process-wide record of who is logged in.
//!
//! A [`SessionService`] is created once by the application root and handed to
//! every consumer through context. Handles are cheap clones of the same
//! underlying state. Readers either take a synchronous snapshot
//! ([`SessionService::is_logged`], [`SessionService::information`]) or subscribe
//! to [`SessionService::is_logged_stream`], which replays the current value and
//! then follows every `log_in` / `log_out` in call order.

use std::{cell::RefCell, rc::Rc};

use futures::{
    channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender},
    Stream,
};

use crate::api::SessionInformation;

#[derive(Default)]
struct Inner {
    information: Option<SessionInformation>,
    subscribers: Vec<UnboundedSender<bool>>,
}

impl Inner {
    fn is_logged(&self) -> bool {
        self.information.is_some()
    }

    fn emit(&mut self, value: bool) {
        self.subscribers
            .retain(|subscriber| subscriber.unbounded_send(value).is_ok());
    }
}

#[derive(Clone, Default)]
pub struct SessionService {
    inner: Rc<RefCell<Inner>>,
}

impl SessionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `information` as the current identity and emits `true`.
    ///
    /// Any previous identity is replaced as a whole, and the emission happens
    /// even when the holder was already logged in.
    pub fn log_in(&self, information: SessionInformation) {
        let mut inner = self.inner.borrow_mut();
        log::info!("session opened for user {}", information.id);
        inner.information = Some(information);
        inner.emit(true);
    }

    /// Clears the identity and emits `false`. Safe to call repeatedly.
    pub fn log_out(&self) {
        let mut inner = self.inner.borrow_mut();
        if let Some(previous) = inner.information.take() {
            log::info!("session closed for user {}", previous.id);
        } else {
            log::debug!("log out requested without an open session");
        }
        inner.emit(false);
    }

    pub fn is_logged(&self) -> bool {
        self.inner.borrow().is_logged()
    }

    pub fn information(&self) -> Option<SessionInformation> {
        self.inner.borrow().information.clone()
    }

    pub fn user_id(&self) -> Option<i64> {
        self.inner.borrow().information.as_ref().map(|info| info.id)
    }

    pub fn is_admin(&self) -> bool {
        self.inner
            .borrow()
            .information
            .as_ref()
            .map(|info| info.admin)
            .unwrap_or(false)
    }

    pub(crate) fn token(&self) -> Option<String> {
        self.inner
            .borrow()
            .information
            .as_ref()
            .map(|info| info.token.clone())
            .filter(|token| !token.is_empty())
    }

    /// Subscribes to the login state.
    ///
    /// The returned stream yields the current value first. It ends only once
    /// every handle to this service has been dropped.
    pub fn is_logged_stream(&self) -> impl Stream<Item = bool> + Unpin + 'static {
        let (sender, receiver): (UnboundedSender<bool>, UnboundedReceiver<bool>) = unbounded();
        let mut inner = self.inner.borrow_mut();
        // Replay into the fresh channel before it can observe later emissions.
        let _ = sender.unbounded_send(inner.is_logged());
        inner.subscribers.push(sender);
        receiver
    }

    #[cfg(test)]
    pub(crate) fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}
