//! Boundaries to the external identity and data platform.
//!
//! SYSTEM CONTEXT
//! ==============
//! `identity` and `profile` define the capabilities the app consumes,
//! `firebase` implements identity in the browser, `error` holds the failure
//! taxonomy, and `types` the shared DTOs.

pub mod error;
#[cfg(feature = "hydrate")]
pub mod firebase;
pub mod identity;
pub mod profile;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
