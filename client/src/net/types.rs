//! Identity and profile DTOs shared by the provider and store boundaries.
//!
//! DESIGN
//! ======
//! Field names on `ProfileRecord` mirror the keys already stored under
//! `users/{uid}` so records written by this client stay readable by every
//! other consumer of the database.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Serialize;

/// Authenticated user as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    /// Provider-assigned unique user id.
    pub uid: String,
    /// Primary email address, if the provider shared one.
    pub email: Option<String>,
    /// Human-readable display name.
    pub display_name: Option<String>,
    /// Avatar image URL.
    pub photo_url: Option<String>,
}

impl Identity {
    /// Identity carrying only an id and email; the remaining fields are unset.
    #[must_use]
    pub fn with_email(uid: &str, email: &str) -> Self {
        Self { uid: uid.to_owned(), email: Some(email.to_owned()), display_name: None, photo_url: None }
    }
}

/// Result of a completed interactive sign-in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credential {
    pub user: Identity,
    /// Short-lived ID token authorizing database writes as `user`.
    pub id_token: Option<String>,
}

/// Where the user intends to run the agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HostEnv {
    Local,
    DedicatedVm,
    SharedVm,
}

impl HostEnv {
    pub const ALL: [Self; 3] = [Self::Local, Self::DedicatedVm, Self::SharedVm];

    /// Stored value, also used as the `<option>` value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::DedicatedVm => "dedicated_vm",
            Self::SharedVm => "shared_vm",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Local => "Local Machine",
            Self::DedicatedVm => "Virtual Machine - Dedicate",
            Self::SharedVm => "Virtual Machine - Shared",
        }
    }

    /// Parse a stored value. Unknown and empty strings yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|env| env.as_str() == raw)
    }
}

/// Realtime Database server-value placeholder resolved to the write time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ServerTimestamp;

impl Serialize for ServerTimestamp {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(".sv", "timestamp")?;
        map.end()
    }
}

/// Application profile stored at `users/{uid}`, written once at sign-up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProfileRecord {
    pub email: Option<String>,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: ServerTimestamp,
    pub username: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "hostEnv")]
    pub host_env: HostEnv,
}

/// Database path of the profile owned by `uid`.
#[must_use]
pub fn profile_path(uid: &str) -> String {
    format!("users/{uid}")
}
