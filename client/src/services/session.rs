//! Session context: the app's local mirror of the identity provider.
//!
//! ARCHITECTURE
//! ============
//! One `SessionContext` exists per mounted app. `init` opens the single
//! auth-state subscription, every report is folded into a `SessionState`,
//! and each change is pushed to the registered listeners (the Leptos app
//! registers one that writes an `RwSignal`).
//!
//! Sign-in and sign-out never touch the state directly. The provider's next
//! auth-state report is what updates `user`, so callers must treat the
//! session as eventually consistent after either call resolves.
//!
//! LIFECYCLE
//! =========
//! `dispose` releases the subscription. Dropping the last handle releases it
//! as well, so an early unmount cannot leak the provider observer.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::net::error::AuthError;
use crate::net::identity::{IdentityProvider, Subscription};
use crate::net::types::{Credential, Identity};
use crate::state::session::SessionState;

/// Handle returned by [`SessionContext::watch`].
pub type ListenerId = u64;

type Listener = Rc<dyn Fn(&SessionState)>;

struct Inner {
    state: SessionState,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: ListenerId,
    /// Whether auth-state reports are currently accepted.
    active: bool,
    subscription: Option<Subscription>,
}

/// Cheaply clonable handle to the shared session.
#[derive(Clone)]
pub struct SessionContext {
    provider: Rc<dyn IdentityProvider>,
    inner: Rc<RefCell<Inner>>,
}

impl SessionContext {
    pub fn new(provider: Rc<dyn IdentityProvider>) -> Self {
        let inner = Inner {
            state: SessionState::default(),
            listeners: Vec::new(),
            next_listener: 0,
            active: false,
            subscription: None,
        };
        Self { provider, inner: Rc::new(RefCell::new(inner)) }
    }

    /// Snapshot of the current session.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.inner.borrow().state.clone()
    }

    /// Whether the auth-state subscription is open.
    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.inner.borrow().active
    }

    /// Subscribe to the provider's auth-state stream. No-op if already open.
    pub fn init(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.active {
                return;
            }
            inner.active = true;
        }

        let weak = Rc::downgrade(&self.inner);
        let subscription = self.provider.subscribe(Box::new(move |user| {
            if let Some(inner) = weak.upgrade() {
                apply_report(&inner, user);
            }
        }));

        let mut inner = self.inner.borrow_mut();
        if inner.active {
            inner.subscription = Some(subscription);
        } else {
            // Disposed from inside the first report.
            drop(inner);
            subscription.release();
        }
    }

    /// Release the auth-state subscription. Later reports are ignored.
    pub fn dispose(&self) {
        let subscription = {
            let mut inner = self.inner.borrow_mut();
            inner.active = false;
            inner.subscription.take()
        };
        if let Some(subscription) = subscription {
            subscription.release();
        }
    }

    /// Register a listener called with the new state after every change.
    pub fn watch(&self, listener: impl Fn(&SessionState) + 'static) -> ListenerId {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_listener;
        inner.next_listener += 1;
        inner.listeners.push((id, Rc::new(listener)));
        id
    }

    pub fn unwatch(&self, id: ListenerId) {
        self.inner.borrow_mut().listeners.retain(|(other, _)| *other != id);
    }

    /// Run the interactive sign-in flow.
    ///
    /// # Errors
    ///
    /// Propagates the provider's [`AuthError`] unchanged; nothing is retried.
    pub async fn sign_in(&self) -> Result<Credential, AuthError> {
        let provider = self.provider.clone();
        provider.sign_in().await
    }

    /// Ask the provider to end the session without waiting for it.
    ///
    /// Failures are logged and otherwise dropped; the user is cleared by the
    /// provider's following auth-state report.
    pub fn sign_out(&self) {
        let provider = self.provider.clone();
        crate::util::task::spawn_detached(async move {
            if let Err(e) = provider.sign_out().await {
                leptos::logging::warn!("sign-out failed: {e}");
            }
        });
    }
}

fn apply_report(inner: &RefCell<Inner>, user: Option<Identity>) {
    let (snapshot, listeners) = {
        let mut inner = inner.borrow_mut();
        if !inner.active || !inner.state.apply(user) {
            return;
        }
        let listeners: Vec<Listener> = inner.listeners.iter().map(|(_, l)| l.clone()).collect();
        (inner.state.clone(), listeners)
    };
    for listener in listeners {
        listener(&snapshot);
    }
}
