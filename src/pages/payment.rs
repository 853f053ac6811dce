//! Payment page: confirms the selected plan and marks the session paid.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::access::post_auth_landing;
use crate::state::session::SessionState;
use crate::util::storage::SessionStore;

/// Confirmation step. The actual charge happens at the payment provider;
/// this page records the outcome on the session and resumes the originally
/// requested route, falling back to the dashboard.
#[component]
pub fn PaymentPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let query = use_query_map();

    let plan_label = move || {
        session
            .get()
            .selected_plan
            .map_or_else(|| "No plan selected".to_owned(), |plan| {
                format!("{} — ${:.0}/mo", plan.name, plan.price)
            })
    };

    let on_confirm = move |_| {
        session.update(|s| s.set_paid(&store, true));
        let from = query.get().get("from");
        navigate(
            &post_auth_landing(from.as_deref(), true),
            NavigateOptions::default(),
        );
    };

    view! {
        <div class="payment-page">
            <h1>"Payment"</h1>
            <p class="payment-page__plan">{plan_label}</p>
            <button class="btn btn--primary" on:click=on_confirm>
                "Confirm payment"
            </button>
            <a href="/subscription" class="payment-page__back">
                "Back to plans"
            </a>
        </div>
    }
}
