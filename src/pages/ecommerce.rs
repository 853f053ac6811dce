//! E-commerce dashboard: sales list, analytics strip, and row actions.

use leptos::prelude::*;

use crate::net::api::SalesClient;
use crate::net::types::{Sale, SaleDraft};

/// Dashboard behind the full auth + payment gate.
///
/// Fetches the sales list and the aggregate analytics on mount; row actions
/// (status advance, delete) refetch the list on success. Failures show up
/// inline — callers of the API client own user-facing messaging.
#[component]
pub fn EcommerceDashboard() -> impl IntoView {
    let client = expect_context::<SalesClient>();

    let sales = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.list_sales().await }
        }
    });
    let analytics = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.fetch_analytics().await }
        }
    });

    let action_error = RwSignal::new(Option::<String>::None);

    let advance = {
        let client = client.clone();
        move |id: String| {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                match client.advance_dec_status(&id).await {
                    Ok(_) => sales.refetch(),
                    Err(err) => action_error.set(Some(err.to_string())),
                }
            });
        }
    };
    let remove = {
        let client = client.clone();
        move |id: String| {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                match client.delete_sale(&id).await {
                    Ok(()) => sales.refetch(),
                    Err(err) => action_error.set(Some(err.to_string())),
                }
            });
        }
    };

    // Quick-add form state.
    let product = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let on_create = {
        let client = client.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let draft = SaleDraft {
                product: product.get(),
                amount: amount.get().parse().unwrap_or(0.0),
                quantity: 1,
                customer_email: None,
            };
            let client = client.clone();
            leptos::task::spawn_local(async move {
                match client.create_sale(&draft).await {
                    Ok(_) => {
                        product.set(String::new());
                        amount.set(String::new());
                        sales.refetch();
                    }
                    Err(err) => action_error.set(Some(err.to_string())),
                }
            });
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Sales"</h1>
            </header>

            <div class="dashboard-page__metrics">
                <Suspense fallback=move || view! { <p>"Loading analytics..."</p> }>
                    {move || {
                        analytics
                            .get()
                            .map(|result| match result {
                                Ok(report) => {
                                    view! {
                                        <div class="metric-cards">
                                            <Metric
                                                label="Revenue"
                                                value=report.number("totalRevenue")
                                            />
                                            <Metric label="Orders" value=report.number("totalSales")/>
                                            <Metric
                                                label="Avg. order"
                                                value=report.number("averageOrder")
                                            />
                                        </div>
                                    }
                                        .into_any()
                                }
                                Err(err) => {
                                    view! { <p class="dashboard-page__error">{err.to_string()}</p> }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>

            <form class="dashboard-page__quick-add" on:submit=on_create>
                <input
                    type="text"
                    placeholder="Product"
                    prop:value=product
                    on:input=move |ev| product.set(event_target_value(&ev))
                    required
                />
                <input
                    type="number"
                    placeholder="Amount"
                    prop:value=amount
                    on:input=move |ev| amount.set(event_target_value(&ev))
                    required
                />
                <button type="submit" class="btn btn--primary">
                    "Add sale"
                </button>
            </form>

            {move || action_error.get().map(|msg| view! { <p class="dashboard-page__error">{msg}</p> })}

            <Suspense fallback=move || view! { <p>"Loading sales..."</p> }>
                {move || {
                    let advance = advance.clone();
                    let remove = remove.clone();
                    sales
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <table class="sales-table">
                                        <thead>
                                            <tr>
                                                <th>"Product"</th>
                                                <th>"Amount"</th>
                                                <th>"Qty"</th>
                                                <th>"Status"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|sale| {
                                                    view! {
                                                        <SaleRow
                                                            sale=sale
                                                            advance=advance.clone()
                                                            remove=remove.clone()
                                                        />
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! { <p class="dashboard-page__error">{err.to_string()}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn Metric(label: &'static str, value: Option<f64>) -> impl IntoView {
    view! {
        <div class="metric-card">
            <span class="metric-card__label">{label}</span>
            <span class="metric-card__value">
                {value.map_or_else(|| "—".to_owned(), |v| format!("{v:.2}"))}
            </span>
        </div>
    }
}

#[component]
fn SaleRow(
    sale: Sale,
    advance: impl Fn(String) + Clone + Send + Sync + 'static,
    remove: impl Fn(String) + Clone + Send + Sync + 'static,
) -> impl IntoView {
    let id = sale.id.clone();
    let advance_id = id.clone();
    let remove_id = id;
    let advanced = sale.dec_status >= 2;

    view! {
        <tr>
            <td>{sale.product}</td>
            <td>{format!("${:.2}", sale.amount)}</td>
            <td>{sale.quantity}</td>
            <td>{if advanced { "Shipped" } else { "Processing" }}</td>
            <td>
                <button
                    class="btn btn--small"
                    disabled=advanced
                    on:click=move |_| advance(advance_id.clone())
                >
                    "Advance"
                </button>
                <button class="btn btn--small btn--danger" on:click=move |_| remove(remove_id.clone())>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
