//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Plain data only: the session snapshot every view reads, and the sign-up
//! form owned by its page.

pub mod session;
pub mod signup;
