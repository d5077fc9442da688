//! Dashboard page: the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only gated view. Signed-out users are redirected to `/signin` once per
//! transition; while that redirect is underway nothing is rendered.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::loading::LoadingPlaceholder;
use crate::state::session::SessionState;
use crate::util::auth::{Gate, gate, install_redirect};
use crate::util::route::Route;

fn greeting(state: &SessionState) -> String {
    format!("Hello, {}", state.email())
}

/// Dashboard page: greets the user and offers sign-out.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_redirect(session, Route::Dashboard, use_navigate());

    #[cfg(feature = "hydrate")]
    let services = expect_context::<crate::app::AppServices>();

    // Fire-and-forget; the provider's report clears the user and the
    // redirect effect takes over.
    let on_sign_out = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        services.session().sign_out();
    };

    move || {
        let state = session.get();
        match gate(&state, Route::Dashboard) {
            Gate::Placeholder => view! { <LoadingPlaceholder/> }.into_any(),
            Gate::Hidden => ().into_any(),
            Gate::Content => view! {
                <main class="dashboard-page">
                    <h1 class="dashboard-page__title">"Welcome to your Dashboard"</h1>
                    <p class="dashboard-page__greeting">{greeting(&state)}</p>
                    <button class="btn btn--danger" on:click=on_sign_out>
                        "Sign Out"
                    </button>
                </main>
            }
            .into_any(),
        }
    }
}
