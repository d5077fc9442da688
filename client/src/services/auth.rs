//! Sign-in and sign-up submissions.
//!
//! ERROR HANDLING
//! ==============
//! A popup closed by the user ends the flow silently. Other provider errors
//! come back as a visible message and are logged. At sign-up the profile
//! write is attempted once; its failure is logged and the user still lands on
//! the dashboard.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::logging::{error, log};

use super::session::SessionContext;
use crate::net::error::AuthError;
use crate::net::profile::ProfileStore;
use crate::state::signup::{SignUpForm, ValidationError};
use crate::util::route::Route;

/// Result of pressing "Sign in with Google".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignInOutcome {
    /// The provider accepted the user; its next auth-state report drives the
    /// redirect.
    SignedIn,
    Cancelled,
    Failed(AuthError),
}

impl SignInOutcome {
    /// Text for the page's error area.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Failed(err) => Some(err.to_string()),
            Self::SignedIn | Self::Cancelled => None,
        }
    }
}

/// Result of submitting the sign-up form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// A field was missing; sign-in was never attempted.
    Invalid(ValidationError),
    Cancelled,
    Failed(AuthError),
    /// Signed in. `profile_saved` reports the best-effort write.
    Completed { profile_saved: bool },
}

impl SignUpOutcome {
    /// Text for the form's error area.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Invalid(err) => Some(err.message().to_owned()),
            Self::Failed(err) => Some(err.to_string()),
            Self::Cancelled | Self::Completed { .. } => None,
        }
    }

    /// Where the page navigates once the submission settles.
    #[must_use]
    pub fn destination(&self) -> Option<Route> {
        match self {
            Self::Completed { .. } => Some(Route::Dashboard),
            _ => None,
        }
    }
}

fn reject(err: &AuthError, flow: &str) -> bool {
    if err.is_benign() {
        return false;
    }
    error!("{flow} failed: {err}");
    true
}

pub async fn submit_sign_in(session: &SessionContext) -> SignInOutcome {
    match session.sign_in().await {
        Ok(_) => SignInOutcome::SignedIn,
        Err(err) if reject(&err, "sign-in") => SignInOutcome::Failed(err),
        Err(_) => SignInOutcome::Cancelled,
    }
}

/// Validate, sign in, then write the profile once.
pub async fn submit_sign_up(session: &SessionContext, store: &dyn ProfileStore, form: &SignUpForm) -> SignUpOutcome {
    let details = match form.validate() {
        Ok(details) => details,
        Err(err) => return SignUpOutcome::Invalid(err),
    };

    let credential = match session.sign_in().await {
        Ok(credential) => credential,
        Err(err) if reject(&err, "sign-up") => return SignUpOutcome::Failed(err),
        Err(_) => return SignUpOutcome::Cancelled,
    };

    let uid = &credential.user.uid;
    let record = details.to_record(&credential.user);
    let profile_saved = match store.write(&credential, &record).await {
        Ok(()) => {
            log!("User profile for {uid} successfully written to Realtime Database.");
            true
        }
        Err(err) => {
            error!("Failed to write user profile for {uid}: {err}");
            false
        }
    };

    SignUpOutcome::Completed { profile_saved }
}
