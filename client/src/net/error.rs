//! Errors raised at the identity-provider and profile-store boundaries.
//!
//! ERROR HANDLING
//! ==============
//! `PopupClosedByUser` is a user cancellation rather than a failure: callers
//! drop it silently. Every other `AuthError` is shown to the user and logged.
//! `ProfileWriteError` is only ever logged.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Provider error code for a popup dismissed before sign-in completed.
pub const CODE_POPUP_CLOSED: &str = "auth/popup-closed-by-user";
/// Provider error code for a popup suppressed by the browser.
pub const CODE_POPUP_BLOCKED: &str = "auth/popup-blocked";
/// Provider error code for a failed network round trip.
pub const CODE_NETWORK_FAILED: &str = "auth/network-request-failed";

/// Failure of an identity-provider operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("the sign-in popup was closed before completing")]
    PopupClosedByUser,

    #[error("the sign-in popup was blocked by the browser")]
    PopupBlocked,

    #[error("a network error occurred while contacting the identity provider")]
    NetworkError,

    #[error("{0}")]
    Other(String),
}

impl AuthError {
    /// Classify a provider error by its code, keeping the provider's message
    /// for anything unrecognised.
    #[must_use]
    pub fn from_code(code: &str, message: &str) -> Self {
        match code {
            CODE_POPUP_CLOSED => Self::PopupClosedByUser,
            CODE_POPUP_BLOCKED => Self::PopupBlocked,
            CODE_NETWORK_FAILED => Self::NetworkError,
            _ if message.is_empty() => Self::Other(code.to_owned()),
            _ => Self::Other(message.to_owned()),
        }
    }

    /// Whether the error is a user cancellation that must stay invisible.
    #[must_use]
    pub fn is_benign(&self) -> bool {
        matches!(self, Self::PopupClosedByUser)
    }
}

/// Failure of the best-effort profile write.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("profile write failed: {0}")]
pub struct ProfileWriteError(pub String);
