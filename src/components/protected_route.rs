//! Route guard wrapping the access decision layer.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::components::loading_screen::LoadingScreen;
use crate::state::access::{AccessDecision, RouteRequirements, evaluate, redirect_with_from};
use crate::state::session::SessionState;

/// Gates its children behind authentication and, by default, payment.
///
/// Re-evaluates on every session change: shows the loading screen while
/// hydration is in flight, bounces to `/auth` or `/subscription` (carrying
/// the requested location as `from`) when a gate fails, and renders the
/// children once every gate passes.
#[component]
pub fn ProtectedRoute(
    /// Whether an active paid subscription is required. The subscription
    /// and payment pages set this to false so an unpaid account can reach
    /// them.
    #[prop(default = true)]
    require_payment: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();

    move || {
        let requirements = RouteRequirements {
            requires_auth: true,
            requires_payment: require_payment,
        };
        match evaluate(&session.get(), requirements) {
            AccessDecision::ShowLoading => view! { <LoadingScreen/> }.into_any(),
            AccessDecision::RedirectToAuth => {
                let target = redirect_with_from("/auth", &location.pathname.get());
                view! { <Redirect path=target/> }.into_any()
            }
            AccessDecision::RedirectToSubscription => {
                let target = redirect_with_from("/subscription", &location.pathname.get());
                view! { <Redirect path=target/> }.into_any()
            }
            AccessDecision::Render => children().into_any(),
        }
    }
}
