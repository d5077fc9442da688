//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Presentation pieces shared by the pages. Components take signals and
//! callbacks as props and never read the session themselves.

pub mod auth_card;
pub mod error_banner;
pub mod google_button;
pub mod loading;
