//! Client services.
//!
//! ARCHITECTURE
//! ============
//! `session` mirrors the identity provider's auth state for the whole app;
//! `auth` runs the sign-in and sign-up submissions on top of it.

pub mod auth;
pub mod session;
