//! Sign-in page with the Google popup button.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::auth_card::AuthCard;
use crate::components::error_banner::ErrorBanner;
use crate::components::google_button::GoogleButton;
use crate::components::loading::LoadingPlaceholder;
use crate::state::session::SessionState;
use crate::util::auth::{Gate, gate, install_redirect};
use crate::util::route::Route;

/// Sign-in page. Signed-in users are sent on to `/dashboard`.
#[component]
pub fn SignInPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_redirect(session, Route::SignIn, use_navigate());

    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let services = expect_context::<crate::app::AppServices>();

    // The redirect effect reacts to the provider's next report; nothing to do
    // here on success.
    let on_sign_in = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            busy.set(true);
            let session = services.session();
            leptos::task::spawn_local(async move {
                let outcome = crate::services::auth::submit_sign_in(&session).await;
                error.set(outcome.message().unwrap_or_default());
                busy.set(false);
            });
        }
    });

    move || match gate(&session.get(), Route::SignIn) {
        Gate::Placeholder => view! { <LoadingPlaceholder/> }.into_any(),
        Gate::Hidden => ().into_any(),
        Gate::Content => view! {
            <AuthCard
                title="Welcome Back"
                subtitle="Please sign in to continue"
                footer="Secure authentication powered by Google"
            >
                <ErrorBanner message=error/>
                <GoogleButton label="Sign in with Google" busy=busy on_press=on_sign_in/>
                <div class="auth-card__divider">
                    <span>"or"</span>
                </div>
                <a href=Route::SignUp.path() class="auth-card__link">
                    "Don't have an account? Sign up"
                </a>
            </AuthCard>
        }
        .into_any(),
    }
}
