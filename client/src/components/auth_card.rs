//! Centered card shell shared by the home, sign-in and sign-up screens.

use leptos::prelude::*;

/// Card with the app mark, a heading, the page body, and a footer line.
#[component]
pub fn AuthCard(
    title: &'static str,
    subtitle: &'static str,
    footer: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="auth-page">
            <main class="auth-page__main">
                <div class="auth-card">
                    <div class="auth-card__header">
                        <div class="auth-card__mark">
                            <div class="auth-card__mark-inner"></div>
                        </div>
                        <h1 class="auth-card__title">{title}</h1>
                        <p class="auth-card__subtitle">{subtitle}</p>
                    </div>
                    {children()}
                </div>
                <p class="auth-page__footer">{footer}</p>
            </main>
        </div>
    }
}
