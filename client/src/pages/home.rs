//! Landing page linking to sign-in/sign-up, or to the dashboard when signed in.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::auth_card::AuthCard;
use crate::components::loading::LoadingPlaceholder;
use crate::state::session::SessionState;
use crate::util::auth::{Gate, gate};
use crate::util::route::Route;

fn logged_in_label(state: &SessionState) -> String {
    format!("Logged in as {}", state.email())
}

/// Home page. Never redirects; only switches its links on the session.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    move || {
        let state = session.get();
        if gate(&state, Route::Home) == Gate::Placeholder {
            return view! { <LoadingPlaceholder/> }.into_any();
        }

        let actions = if state.is_signed_in() {
            let label = logged_in_label(&state);
            view! {
                <div class="home-actions home-actions--signed-in">
                    <div class="home-actions__status">
                        <p>{label}</p>
                    </div>
                    <a href=Route::Dashboard.path() class="btn btn--primary">"Go to Dashboard"</a>
                </div>
            }
            .into_any()
        } else {
            view! {
                <div class="home-actions">
                    <a href=Route::SignIn.path() class="btn btn--primary">"Sign In"</a>
                    <a href=Route::SignUp.path() class="btn">"Sign Up"</a>
                </div>
            }
            .into_any()
        };

        view! {
            <AuthCard
                title="座標 (The Coordinate)"
                subtitle="A Computer Use Agent"
                footer="Join thousands of users worldwide"
            >
                {actions}
            </AuthCard>
        }
        .into_any()
    }
}
