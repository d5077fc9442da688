//! Firebase web configuration embedded at build time.
//!
//! The web config is public by design (it ships inside the WASM bundle), so
//! it is read with `option_env!` when the client is compiled rather than
//! fetched at runtime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Serialize;

pub const API_KEY_VAR: &str = "FIREBASE_API_KEY";
pub const AUTH_DOMAIN_VAR: &str = "FIREBASE_AUTH_DOMAIN";
pub const PROJECT_ID_VAR: &str = "FIREBASE_PROJECT_ID";
pub const DATABASE_URL_VAR: &str = "FIREBASE_DATABASE_URL";
pub const APP_ID_VAR: &str = "FIREBASE_APP_ID";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing firebase config: {var} not set at build time")]
    Missing { var: &'static str },
}

/// Options passed to `initializeApp`, serialized with the SDK's key names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    #[serde(rename = "databaseURL")]
    pub database_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
}

impl FirebaseConfig {
    /// Build the config from variables captured when the crate was compiled.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming the first required variable
    /// that was unset or empty.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                API_KEY_VAR => option_env!("FIREBASE_API_KEY"),
                AUTH_DOMAIN_VAR => option_env!("FIREBASE_AUTH_DOMAIN"),
                PROJECT_ID_VAR => option_env!("FIREBASE_PROJECT_ID"),
                DATABASE_URL_VAR => option_env!("FIREBASE_DATABASE_URL"),
                APP_ID_VAR => option_env!("FIREBASE_APP_ID"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    /// Build the config from an arbitrary variable source.
    ///
    /// Required: `FIREBASE_API_KEY`, `FIREBASE_AUTH_DOMAIN`,
    /// `FIREBASE_PROJECT_ID`, `FIREBASE_DATABASE_URL`.
    /// Optional: `FIREBASE_APP_ID`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming the first required variable
    /// that was unset or empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |var: &str| lookup(var).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let required = |var: &'static str| value(var).ok_or(ConfigError::Missing { var });

        Ok(Self {
            api_key: required(API_KEY_VAR)?,
            auth_domain: required(AUTH_DOMAIN_VAR)?,
            project_id: required(PROJECT_ID_VAR)?,
            database_url: required(DATABASE_URL_VAR)?.trim_end_matches('/').to_owned(),
            app_id: value(APP_ID_VAR),
        })
    }
}
