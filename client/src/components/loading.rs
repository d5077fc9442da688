use leptos::prelude::*;

/// Shown until the first auth-state report arrives.
#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    view! { <p class="loading">"Loading..."</p> }
}
