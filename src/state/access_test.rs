use super::*;

fn session(is_loading: bool, is_authenticated: bool, has_paid: bool) -> SessionState {
    SessionState {
        is_authenticated,
        has_paid,
        is_loading,
        ..SessionState::default()
    }
}

// =============================================================
// Decision ordering
// =============================================================

#[test]
fn loading_short_circuits_everything() {
    for &(authed, paid) in &[(false, false), (false, true), (true, false), (true, true)] {
        let s = session(true, authed, paid);
        assert_eq!(
            evaluate(&s, RouteRequirements::default()),
            AccessDecision::ShowLoading
        );
        assert_eq!(
            evaluate(&s, RouteRequirements::auth_only()),
            AccessDecision::ShowLoading
        );
    }
}

#[test]
fn unauthenticated_redirects_to_auth_regardless_of_payment() {
    for &paid in &[false, true] {
        let s = session(false, false, paid);
        assert_eq!(
            evaluate(&s, RouteRequirements::default()),
            AccessDecision::RedirectToAuth
        );
    }
}

#[test]
fn unpaid_redirects_to_subscription_on_payment_gated_routes() {
    let s = session(false, true, false);
    assert_eq!(
        evaluate(&s, RouteRequirements::default()),
        AccessDecision::RedirectToSubscription
    );
}

#[test]
fn unpaid_renders_when_payment_is_not_required() {
    let s = session(false, true, false);
    assert_eq!(
        evaluate(&s, RouteRequirements::auth_only()),
        AccessDecision::Render
    );
}

#[test]
fn paid_and_authenticated_renders() {
    let s = session(false, true, true);
    assert_eq!(
        evaluate(&s, RouteRequirements::default()),
        AccessDecision::Render
    );
}

// =============================================================
// Post-auth landing
// =============================================================

#[test]
fn unpaid_lands_on_subscription_even_with_an_origin() {
    // The remembered origin is honored only once payment is satisfied.
    assert_eq!(post_auth_landing(Some("/ecommerce"), false), "/subscription");
    assert_eq!(post_auth_landing(None, false), "/subscription");
}

#[test]
fn paid_lands_on_origin_or_dashboard() {
    assert_eq!(post_auth_landing(Some("/ecommerce"), true), "/ecommerce");
    assert_eq!(post_auth_landing(None, true), "/ecommerce");
    assert_eq!(post_auth_landing(Some("/reports"), true), "/reports");
}

// =============================================================
// Redirect targets
// =============================================================

#[test]
fn redirect_carries_the_requested_location() {
    assert_eq!(
        redirect_with_from("/auth", "/ecommerce"),
        "/auth?from=/ecommerce"
    );
}

#[test]
fn redirect_omits_empty_or_self_origins() {
    assert_eq!(redirect_with_from("/auth", ""), "/auth");
    assert_eq!(redirect_with_from("/subscription", "/subscription"), "/subscription");
}
