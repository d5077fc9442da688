//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page applies the same redirect rules: a gated view sends signed-out
//! users to `/signin`, and the sign-in/sign-up views send signed-in users to
//! `/dashboard`. Nothing is decided until the first auth-state report.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use super::route::Route;
use crate::state::session::SessionState;

/// Where `current` must redirect to for `state`, if anywhere.
#[must_use]
pub fn decide_navigation(state: &SessionState, current: Route) -> Option<Route> {
    if state.loading {
        return None;
    }
    match (state.is_signed_in(), current) {
        (false, route) if route.is_gated() => Some(Route::SignIn),
        (true, route) if route.is_auth_entry() => Some(Route::Dashboard),
        _ => None,
    }
}

/// Suppresses repeated redirects while the decision is unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RedirectGuard {
    issued: Option<Route>,
}

impl RedirectGuard {
    /// Decide for `state` and return the target only on a new transition.
    pub fn observe(&mut self, state: &SessionState, current: Route) -> Option<Route> {
        let decision = decide_navigation(state, current);
        if decision == self.issued {
            return None;
        }
        self.issued = decision;
        decision
    }
}

/// What a view renders for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    /// First auth-state report still pending.
    Placeholder,
    /// A redirect is underway; render nothing to avoid a flash.
    Hidden,
    Content,
}

#[must_use]
pub fn gate(state: &SessionState, current: Route) -> Gate {
    if state.loading {
        Gate::Placeholder
    } else if decide_navigation(state, current).is_some() {
        Gate::Hidden
    } else {
        Gate::Content
    }
}

/// Navigate away from `current` whenever the session calls for it.
pub fn install_redirect<F>(session: RwSignal<SessionState>, current: Route, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move |guard: Option<RedirectGuard>| {
        let mut guard = guard.unwrap_or_default();
        if let Some(target) = session.with(|state| guard.observe(state, current)) {
            navigate(target.path(), NavigateOptions::default());
        }
        guard
    });
}
