//! Session state: the single in-memory source of truth for authentication
//! and payment status.
//!
//! Held app-wide as an `RwSignal<SessionState>` provided via context. The
//! credential itself lives only in the [`SessionStore`]; `is_authenticated`
//! is its in-memory derivation. Every mutator takes the store explicitly so
//! the write-through policy has no ambient global to reach for.
//!
//! WRITE-THROUGH
//! =============
//! While authenticated, every mutation of email/paid/plan is mirrored into
//! durable storage immediately, so a page reload re-hydrates the same state.
//! While unauthenticated, nothing is persisted — no partial state is written
//! before a token exists.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::Plan;
use crate::util::storage::SessionStore;

/// In-memory session fields.
///
/// `is_loading` is true for exactly the interval between process start and
/// the completion of the first hydration read; once false it never becomes
/// true again.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub is_authenticated: bool,
    pub user_email: String,
    pub has_paid: bool,
    pub selected_plan: Option<Plan>,
    pub is_loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            is_authenticated: false,
            user_email: String::new(),
            has_paid: false,
            selected_plan: None,
            is_loading: true,
        }
    }
}

impl SessionState {
    /// One-time read of durable storage into memory.
    ///
    /// A stored token makes the session authenticated and copies the
    /// profile fields from the snapshot; otherwise the defaults stand.
    /// `is_loading` drops to false unconditionally, whichever branch ran.
    pub fn hydrate(&mut self, store: &SessionStore) {
        let snapshot = store.read();
        if snapshot.token.is_some() {
            self.is_authenticated = true;
            self.user_email = snapshot.user_email;
            self.has_paid = snapshot.has_paid;
            self.selected_plan = snapshot.selected_plan;
        }
        self.is_loading = false;
    }

    /// Record a successful login.
    ///
    /// Payment status is deliberately untouched: payment is a separate step
    /// sequenced after authentication.
    pub fn set_authenticated(&mut self, store: &SessionStore, token: &str, email: &str) {
        store.write_token(token);
        self.is_authenticated = true;
        self.user_email = email.to_owned();
        self.persist(store);
    }

    pub fn set_paid(&mut self, store: &SessionStore, value: bool) {
        self.has_paid = value;
        self.persist(store);
    }

    pub fn set_plan(&mut self, store: &SessionStore, plan: Option<Plan>) {
        self.selected_plan = plan;
        self.persist(store);
    }

    /// Clear durable storage and reset every in-memory field in one step.
    ///
    /// Readers never observe a half-cleared session: the whole struct is
    /// replaced under the single `&mut self`.
    pub fn logout(&mut self, store: &SessionStore) {
        store.clear();
        *self = Self {
            is_loading: false,
            ..Self::default()
        };
    }

    fn persist(&self, store: &SessionStore) {
        if self.is_authenticated {
            store.persist_profile(&self.user_email, self.has_paid, self.selected_plan.as_ref());
        }
    }
}
