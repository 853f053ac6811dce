//! Subscription page: plan catalog and selection.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::types::Plan;
use crate::state::access::redirect_with_from;
use crate::state::session::SessionState;
use crate::util::storage::SessionStore;

/// Plans on offer. Static catalog; pricing lives with the payment backend.
fn plan_catalog() -> Vec<Plan> {
    vec![
        Plan {
            id: "basic".to_owned(),
            name: "Basic".to_owned(),
            price: 9.0,
            features: vec!["Sales list".to_owned(), "CSV export".to_owned()],
        },
        Plan {
            id: "pro".to_owned(),
            name: "Pro".to_owned(),
            price: 29.0,
            features: vec![
                "Everything in Basic".to_owned(),
                "Analytics".to_owned(),
                "Status tracking".to_owned(),
            ],
        },
        Plan {
            id: "enterprise".to_owned(),
            name: "Enterprise".to_owned(),
            price: 99.0,
            features: vec!["Everything in Pro".to_owned(), "Priority support".to_owned()],
        },
    ]
}

/// Plan picker. Selecting a plan stores it on the session (persisted, so a
/// payment step started now can resume in a later visit) and moves on to
/// the payment page, forwarding any remembered origin.
#[component]
pub fn SubscriptionPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let query = use_query_map();

    view! {
        <div class="subscription-page">
            <h1>"Choose a plan"</h1>
            <div class="subscription-page__grid">
                {plan_catalog()
                    .into_iter()
                    .map(|plan| {
                        let name = plan.name.clone();
                        let price = plan.price;
                        let features = plan.features.clone();
                        let store = store.clone();
                        let navigate = navigate.clone();
                        let on_select = move |_| {
                            let plan = plan.clone();
                            session.update(|s| s.set_plan(&store, Some(plan)));
                            let from = query.get().get("from").unwrap_or_default();
                            navigate(
                                &redirect_with_from("/payment", &from),
                                NavigateOptions::default(),
                            );
                        };
                        view! {
                            <div class="plan-card">
                                <h2>{name}</h2>
                                <p class="plan-card__price">{format!("${price:.0}/mo")}</p>
                                <ul>
                                    {features
                                        .into_iter()
                                        .map(|feature| view! { <li>{feature}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                                <button class="btn btn--primary" on:click=on_select>
                                    "Choose"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
