//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page reads the session signal, installs its redirect rule, and
//! renders a placeholder, nothing, or its content accordingly. Submission
//! logic lives in `services::auth`.

pub mod dashboard;
pub mod home;
pub mod signin;
pub mod signup;
