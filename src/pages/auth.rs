//! Auth page: credential form and the post-login landing decision.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::api;
use crate::state::access::post_auth_landing;
use crate::state::session::SessionState;
use crate::util::storage::SessionStore;

/// Email/password form.
///
/// On success the session becomes authenticated and navigation resolves via
/// [`post_auth_landing`]: an unpaid account goes to the subscription page,
/// a paid one back to where it came from (or the dashboard).
#[component]
pub fn AuthPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get();
        let password_value = password.get();
        let from = query.get().get("from");
        let store = store.clone();
        let navigate = navigate.clone();
        error.set(None);
        leptos::task::spawn_local(async move {
            match api::login(&email_value, &password_value).await {
                Ok(token) => {
                    session.update(|s| s.set_authenticated(&store, &token, &email_value));
                    let has_paid = session.with_untracked(|s| s.has_paid);
                    let target = post_auth_landing(from.as_deref(), has_paid);
                    navigate(&target, NavigateOptions::default());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-page__form" on:submit=on_submit>
                <h1>"Sign in"</h1>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=email
                    on:input=move |ev| email.set(event_target_value(&ev))
                    required
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=password
                    on:input=move |ev| password.set(event_target_value(&ev))
                    required
                />
                {move || {
                    error
                        .get()
                        .map(|msg| view! { <p class="auth-page__error">{msg}</p> })
                }}
                <button type="submit" class="btn btn--primary">
                    "Continue"
                </button>
            </form>
        </div>
    }
}
