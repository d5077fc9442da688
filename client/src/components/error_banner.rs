//! Inline error message area.

use leptos::prelude::*;

/// Renders `message` in a banner; renders nothing while it is empty.
#[component]
pub fn ErrorBanner(message: RwSignal<String>) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <div class="error-banner" role="alert">
                <p class="error-banner__text">{move || message.get()}</p>
            </div>
        </Show>
    }
}
