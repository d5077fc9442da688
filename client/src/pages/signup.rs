//! Sign-up page: profile details, then Google sign-in, then one profile write.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::auth_card::AuthCard;
use crate::components::error_banner::ErrorBanner;
use crate::components::google_button::GoogleButton;
use crate::components::loading::LoadingPlaceholder;
use crate::net::types::HostEnv;
use crate::state::session::SessionState;
use crate::state::signup::SignUpForm;
use crate::util::auth::{Gate, gate, install_redirect};
use crate::util::route::Route;

/// Sign-up page. Signed-in users are sent on to `/dashboard`.
#[component]
pub fn SignUpPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_redirect(session, Route::SignUp, navigate.clone());

    let username = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let host_env = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let destination = RwSignal::new(None::<Route>);
    #[cfg(feature = "hydrate")]
    let services = expect_context::<crate::app::AppServices>();

    Effect::new(move || {
        if let Some(target) = destination.get() {
            destination.set(None);
            navigate(target.path(), NavigateOptions::default());
        }
    });

    let on_submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        error.set(String::new());

        let form = SignUpForm {
            username: username.get_untracked(),
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            host_env: host_env.get_untracked(),
        };
        if let Err(err) = form.validate() {
            error.set(err.message().to_owned());
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            busy.set(true);
            let session = services.session();
            let profiles = services.profiles();
            leptos::task::spawn_local(async move {
                let outcome = crate::services::auth::submit_sign_up(&session, profiles.as_ref(), &form).await;
                error.set(outcome.message().unwrap_or_default());
                busy.set(false);
                destination.set(outcome.destination());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (form, destination);
    });

    let text_input = move |placeholder: &'static str, value: RwSignal<String>| {
        view! {
            <input
                class="auth-input"
                type="text"
                placeholder=placeholder
                required=true
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
    };

    move || match gate(&session.get(), Route::SignUp) {
        Gate::Placeholder => view! { <LoadingPlaceholder/> }.into_any(),
        Gate::Hidden => ().into_any(),
        Gate::Content => view! {
            <AuthCard
                title="Create Account"
                subtitle="Let's get some details to get started"
                footer="By signing up, you agree to our terms and privacy policy"
            >
                <div class="signup-form">
                    <ErrorBanner message=error/>
                    {text_input("Username", username)}
                    <div class="signup-form__row">
                        {text_input("First Name", first_name)}
                        {text_input("Last Name", last_name)}
                    </div>
                    <select
                        class="auth-input"
                        required=true
                        prop:value=move || host_env.get()
                        on:change=move |ev| host_env.set(event_target_value(&ev))
                    >
                        <option value="" disabled=true>"Host Environment"</option>
                        {HostEnv::ALL
                            .into_iter()
                            .map(|env| view! { <option value=env.as_str()>{env.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <GoogleButton label="Continue with Google" busy=busy on_press=on_submit primary=true/>
                </div>
                <a href=Route::SignIn.path() class="auth-card__link">
                    "Already have an account? Sign in"
                </a>
            </AuthCard>
        }
        .into_any(),
    }
}
