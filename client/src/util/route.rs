//! Application routes and their paths.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

/// Every navigable view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    SignIn,
    SignUp,
    Dashboard,
}

impl Route {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::SignIn => "/signin",
            Self::SignUp => "/signup",
            Self::Dashboard => "/dashboard",
        }
    }

    /// Views that require a signed-in user to stay displayed.
    #[must_use]
    pub fn is_gated(self) -> bool {
        matches!(self, Self::Dashboard)
    }

    /// Views that only make sense while signed out.
    #[must_use]
    pub fn is_auth_entry(self) -> bool {
        matches!(self, Self::SignIn | Self::SignUp)
    }
}
