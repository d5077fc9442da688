//! Profile store: the single best-effort write issued at sign-up.
//!
//! Client-side (hydrate): a Realtime Database REST `PUT` via `gloo-net`,
//! authorized with the caller's ID token.
//! Server-side (SSR): the write always fails since it is only meaningful in
//! the browser.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use super::error::ProfileWriteError;
use super::types::{Credential, ProfileRecord, profile_path};

/// External store holding application profiles keyed by user id.
#[async_trait::async_trait(?Send)]
pub trait ProfileStore {
    /// Write `record` to `users/{uid}` for the credential's user, replacing
    /// any record already stored there.
    ///
    /// # Errors
    ///
    /// Returns a [`ProfileWriteError`] if the request could not be sent or
    /// the store rejected it.
    async fn write(&self, credential: &Credential, record: &ProfileRecord) -> Result<(), ProfileWriteError>;
}

/// Store used where no database is reachable.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableProfileStore;

#[async_trait::async_trait(?Send)]
impl ProfileStore for UnavailableProfileStore {
    async fn write(&self, _credential: &Credential, _record: &ProfileRecord) -> Result<(), ProfileWriteError> {
        Err(ProfileWriteError("profile store not configured".to_owned()))
    }
}

/// Firebase Realtime Database accessed through its REST API.
#[derive(Clone, Debug)]
pub struct RealtimeDbProfileStore {
    database_url: String,
}

impl RealtimeDbProfileStore {
    #[must_use]
    pub fn new(database_url: &str) -> Self {
        Self { database_url: database_url.trim_end_matches('/').to_owned() }
    }

    /// REST endpoint for the profile of `uid`.
    #[must_use]
    pub fn record_url(&self, uid: &str, id_token: Option<&str>) -> String {
        let mut url = format!("{}/{}.json", self.database_url, profile_path(uid));
        if let Some(token) = id_token {
            url.push_str("?auth=");
            url.push_str(token);
        }
        url
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn write_failed_message(status: u16) -> String {
    format!("database rejected write: {status}")
}

#[async_trait::async_trait(?Send)]
impl ProfileStore for RealtimeDbProfileStore {
    async fn write(&self, credential: &Credential, record: &ProfileRecord) -> Result<(), ProfileWriteError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.record_url(&credential.user.uid, credential.id_token.as_deref());
            let resp = gloo_net::http::Request::put(&url)
                .json(record)
                .map_err(|e| ProfileWriteError(e.to_string()))?
                .send()
                .await
                .map_err(|e| ProfileWriteError(e.to_string()))?;
            if !resp.ok() {
                return Err(ProfileWriteError(write_failed_message(resp.status())));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credential, record);
            Err(ProfileWriteError("not available on server".to_owned()))
        }
    }
}
