//! Full-page loading screen shown while session hydration is in flight.

use leptos::prelude::*;

/// Centered spinner, also mounted directly at `/loading`.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-screen__spinner" aria-label="Loading"></div>
            <p class="loading-screen__label">"Loading..."</p>
        </div>
    }
}
