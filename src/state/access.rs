//! Route access decisions.
//!
//! A pure function from session state plus per-route requirements to a
//! navigation outcome. Gating results (unauthenticated, unpaid) are
//! first-class outcomes here, never errors.
//!
//! ORDERING
//! ========
//! Loading short-circuits before any auth/payment decision so a redirect
//! never flashes while hydration is still in flight; auth is checked
//! strictly before payment because payment status is meaningless without an
//! identity.

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use crate::state::session::SessionState;

/// Per-route gating requirements. Both default to true; the subscription
/// and payment pages relax the payment requirement so an unpaid account can
/// reach them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteRequirements {
    pub requires_auth: bool,
    pub requires_payment: bool,
}

impl Default for RouteRequirements {
    fn default() -> Self {
        Self {
            requires_auth: true,
            requires_payment: true,
        }
    }
}

impl RouteRequirements {
    /// Authentication required, payment not.
    #[must_use]
    pub fn auth_only() -> Self {
        Self {
            requires_payment: false,
            ..Self::default()
        }
    }
}

/// Outcome of evaluating a navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    /// Hydration has not finished; show the loading screen and re-evaluate
    /// once it completes.
    ShowLoading,
    /// Not authenticated; send to the auth page, carrying the requested
    /// location for resumption.
    RedirectToAuth,
    /// Authenticated but unpaid on a payment-gated route; send to the
    /// subscription page, carrying the requested location.
    RedirectToSubscription,
    /// All gates passed; render the requested route.
    Render,
}

/// Evaluate one navigation attempt against the current session.
#[must_use]
pub fn evaluate(session: &SessionState, requirements: RouteRequirements) -> AccessDecision {
    if session.is_loading {
        return AccessDecision::ShowLoading;
    }
    if requirements.requires_auth && !session.is_authenticated {
        return AccessDecision::RedirectToAuth;
    }
    if requirements.requires_payment && !session.has_paid {
        return AccessDecision::RedirectToSubscription;
    }
    AccessDecision::Render
}

/// Landing target for a freshly authenticated session.
///
/// The payment check comes strictly before the origin fallback: an unpaid
/// session always lands on the subscription page, and the remembered origin
/// is honored only once payment is satisfied. With payment satisfied and no
/// origin remembered, the dashboard is the default.
#[must_use]
pub fn post_auth_landing(from: Option<&str>, has_paid: bool) -> String {
    if !has_paid {
        return "/subscription".to_owned();
    }
    from.map_or_else(|| "/ecommerce".to_owned(), ToOwned::to_owned)
}

/// Build a redirect target that carries the originally requested location
/// as a `from` query parameter.
#[must_use]
pub fn redirect_with_from(target: &str, from: &str) -> String {
    if from.is_empty() || from == target {
        return target.to_owned();
    }
    format!("{target}?from={from}")
}
