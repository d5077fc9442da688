//! Session snapshot shared with every view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written only by the session context when the identity provider reports an
//! auth-state change; read by route guards and user-aware components.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::Identity;

/// Current user plus whether the first auth-state report is still pending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<Identity>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl SessionState {
    /// Record an auth-state report. Returns whether anything changed.
    ///
    /// `loading` clears on the first report and never comes back.
    pub fn apply(&mut self, user: Option<Identity>) -> bool {
        let changed = self.loading || self.user != user;
        self.user = user;
        self.loading = false;
        changed
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Email of the signed-in user, empty when unknown.
    #[must_use]
    pub fn email(&self) -> &str {
        self.user.as_ref().and_then(|u| u.email.as_deref()).unwrap_or_default()
    }
}
