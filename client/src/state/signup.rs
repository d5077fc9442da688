//! Sign-up form fields and their validation.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use crate::net::types::{HostEnv, Identity, ProfileRecord, ServerTimestamp};

/// Message shown inline when a required field is empty.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill out all fields.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("missing required field")]
pub struct ValidationError;

impl ValidationError {
    #[must_use]
    pub fn message(self) -> &'static str {
        MISSING_FIELDS_MESSAGE
    }
}

/// Raw form input as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    /// Selected `<option>` value; empty until the user picks one.
    pub host_env: String,
}

/// Form input that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignUpDetails {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub host_env: HostEnv,
}

impl SignUpForm {
    /// Require every field to be non-empty. Values are kept exactly as typed.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if any field is empty or the host
    /// environment is not one of the offered options.
    pub fn validate(&self) -> Result<SignUpDetails, ValidationError> {
        let required = |raw: &str| Some(raw.to_owned()).filter(|v| !v.is_empty()).ok_or(ValidationError);
        Ok(SignUpDetails {
            username: required(&self.username)?,
            first_name: required(&self.first_name)?,
            last_name: required(&self.last_name)?,
            host_env: HostEnv::parse(&self.host_env).ok_or(ValidationError)?,
        })
    }
}

impl SignUpDetails {
    /// Profile for `user`, with the creation time left to the server.
    #[must_use]
    pub fn to_record(&self, user: &Identity) -> ProfileRecord {
        ProfileRecord {
            email: user.email.clone(),
            display_name: user.display_name.clone(),
            photo_url: user.photo_url.clone(),
            created_at: ServerTimestamp,
            username: self.username.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            host_env: self.host_env,
        }
    }
}
