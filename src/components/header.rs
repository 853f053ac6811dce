//! Top navigation bar for authenticated pages.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::storage::SessionStore;

/// Header with the signed-in email and a logout button.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.update(|s| s.logout(&store));
        navigate("/auth", NavigateOptions::default());
    };

    view! {
        <header class="app-header">
            <span class="app-header__brand">"Salesdash"</span>
            <span class="app-header__spacer"></span>
            <span class="app-header__email">{move || session.get().user_email}</span>
            <button class="btn btn--ghost" on:click=on_logout>
                "Log out"
            </button>
        </header>
    }
}
