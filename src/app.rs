//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::hooks::use_location;

use crate::components::header::Header;
use crate::components::loading_screen::LoadingScreen;
use crate::components::protected_route::ProtectedRoute;
use crate::net::api::SalesClient;
use crate::pages::auth::AuthPage;
use crate::pages::ecommerce::EcommerceDashboard;
use crate::pages::payment::PaymentPage;
use crate::pages::subscription::SubscriptionPage;
use crate::state::session::SessionState;
use crate::util::storage::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session store, provides the session signal and the sales client
/// as contexts, and kicks off the one-time hydration read. Hydration runs
/// in an effect (browser only); until it completes every guarded route sits
/// behind the loading gate.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::new();
    let session = RwSignal::new(SessionState::default());
    provide_context(session);
    provide_context(store.clone());

    // 401 reaction: transport code stays navigation-free; the host decides
    // where a dead session goes.
    let client = SalesClient::new(
        store.clone(),
        Arc::new(|| {
            #[cfg(feature = "hydrate")]
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/auth");
            }
        }),
    );
    provide_context(client);

    // One-time hydration. Effects only run in the browser, and the guard on
    // `is_loading` keeps a re-run from ever re-entering the loading state.
    Effect::new({
        let store = store.clone();
        move || {
            if session.with_untracked(|s| s.is_loading) {
                session.update(|s| s.hydrate(&store));
            }
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/salesdash.css"/>
        <Title text="Salesdash"/>

        <Router>
            <MainLayout/>
        </Router>
    }
}

/// Public pages that render without the header chrome.
const PUBLIC_PATHS: [&str; 4] = ["/auth", "/subscription", "/payment", "/loading"];

/// Layout inside the router: header on authenticated non-public pages, then
/// the route table.
#[component]
fn MainLayout() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();

    let show_header = move || {
        session.get().is_authenticated
            && !PUBLIC_PATHS.contains(&location.pathname.get().as_str())
    };

    view! {
        <div class="app-shell">
            <Show when=show_header>
                <Header/>
            </Show>
            <main class="app-shell__main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomeRedirect/>
                    <Route path=StaticSegment("auth") view=AuthPage/>
                    <Route path=StaticSegment("loading") view=LoadingScreen/>
                    <Route
                        path=StaticSegment("subscription")
                        view=|| {
                            view! {
                                <ProtectedRoute require_payment=false>
                                    <SubscriptionPage/>
                                </ProtectedRoute>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("payment")
                        view=|| {
                            view! {
                                <ProtectedRoute require_payment=false>
                                    <PaymentPage/>
                                </ProtectedRoute>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("ecommerce")
                        view=|| {
                            view! {
                                <ProtectedRoute>
                                    <EcommerceDashboard/>
                                </ProtectedRoute>
                            }
                        }
                    />
                </Routes>
            </main>
        </div>
    }
}

/// `/` resolves by auth state: dashboard when signed in, auth page
/// otherwise. Waits out hydration so the redirect never flashes wrong.
#[component]
fn HomeRedirect() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    move || {
        let state = session.get();
        if state.is_loading {
            view! { <LoadingScreen/> }.into_any()
        } else if state.is_authenticated {
            view! { <Redirect path="/ecommerce"/> }.into_any()
        } else {
            view! { <Redirect path="/auth"/> }.into_any()
        }
    }
}
