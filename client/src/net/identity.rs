//! Identity-provider capability consumed by the session context.
//!
//! ARCHITECTURE
//! ============
//! The session only needs three things from an identity platform: a stream of
//! auth-state changes, an interactive sign-in, and a sign-out. Keeping those
//! behind `IdentityProvider` lets the browser build talk to Firebase while
//! server rendering and tests plug in their own implementations.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use super::error::AuthError;
use super::types::{Credential, Identity};

/// Callback invoked with the current identity on every auth-state change.
pub type AuthStateCallback = Box<dyn Fn(Option<Identity>)>;

/// Handle to an open auth-state subscription.
///
/// The subscription is released exactly once, either by [`Subscription::release`]
/// or when the handle is dropped.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    /// Subscription with nothing to release.
    #[must_use]
    pub fn noop() -> Self {
        Self { release: None }
    }

    /// Unsubscribe now.
    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("active", &self.release.is_some()).finish()
    }
}

/// External identity platform with a single OAuth provider.
#[async_trait::async_trait(?Send)]
pub trait IdentityProvider {
    /// Start delivering auth-state changes to `callback`.
    ///
    /// The provider reports the current state asynchronously after
    /// subscribing, then again on every sign-in and sign-out.
    fn subscribe(&self, callback: AuthStateCallback) -> Subscription;

    /// Run the interactive popup sign-in flow.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if the popup is closed or blocked, the network
    /// fails, or the provider rejects the attempt.
    async fn sign_in(&self) -> Result<Credential, AuthError>;

    /// End the current provider session.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if the provider could not be reached.
    async fn sign_out(&self) -> Result<(), AuthError>;
}

/// Provider used where no identity platform is reachable (server rendering,
/// missing build configuration). It never reports an auth state, so views
/// stay on their loading placeholder.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableIdentityProvider;

pub(crate) const UNAVAILABLE_MESSAGE: &str = "sign-in is not available right now";

#[async_trait::async_trait(?Send)]
impl IdentityProvider for UnavailableIdentityProvider {
    fn subscribe(&self, _callback: AuthStateCallback) -> Subscription {
        Subscription::noop()
    }

    async fn sign_in(&self) -> Result<Credential, AuthError> {
        Err(AuthError::Other(UNAVAILABLE_MESSAGE.to_owned()))
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        Ok(())
    }
}
