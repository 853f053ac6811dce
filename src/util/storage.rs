//! Durable session storage.
//!
//! In the browser (hydrate) this wraps `localStorage`; on the server and in
//! native unit tests it falls back to an in-memory map so reads and writes
//! stay deterministic. The store is an owned value handed to whoever needs
//! it rather than ambient global state, so tests can run against private
//! instances.
//!
//! Absence of the `token` key is the sole authoritative signal of "not
//! authenticated": the other three keys may hold stale values from a prior
//! session and are only trusted when a token is present at read time.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

#[cfg(not(feature = "hydrate"))]
use std::collections::HashMap;
#[cfg(not(feature = "hydrate"))]
use std::sync::{Arc, Mutex, PoisonError};

use crate::net::types::Plan;

pub const TOKEN_KEY: &str = "token";
pub const USER_EMAIL_KEY: &str = "userEmail";
pub const HAS_PAID_KEY: &str = "hasPaid";
pub const SELECTED_PLAN_KEY: &str = "selectedPlan";

/// Best-effort parse of the four durable entries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionSnapshot {
    pub token: Option<String>,
    pub user_email: String,
    pub has_paid: bool,
    pub selected_plan: Option<Plan>,
}

/// Handle to the durable key/value store backing the session.
///
/// Cloning yields a handle to the same underlying storage.
#[derive(Clone, Default)]
pub struct SessionStore {
    #[cfg(not(feature = "hydrate"))]
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the full session snapshot.
    ///
    /// If no token is stored, the snapshot is all defaults regardless of
    /// what the other keys hold. A malformed persisted plan is discarded,
    /// never surfaced as an error; durable storage is not schema-validated.
    #[must_use]
    pub fn read(&self) -> SessionSnapshot {
        let Some(token) = self.get_item(TOKEN_KEY) else {
            return SessionSnapshot::default();
        };
        SessionSnapshot {
            token: Some(token),
            user_email: self.get_item(USER_EMAIL_KEY).unwrap_or_default(),
            has_paid: self.get_item(HAS_PAID_KEY).is_some_and(|v| v == "true"),
            selected_plan: self
                .get_item(SELECTED_PLAN_KEY)
                .and_then(|raw| serde_json::from_str(&raw).ok()),
        }
    }

    /// Read just the stored credential.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.get_item(TOKEN_KEY)
    }

    /// Persist the credential issued at login.
    pub fn write_token(&self, token: &str) {
        self.set_item(TOKEN_KEY, token);
    }

    /// Mirror the mutable profile fields into storage (write-through).
    ///
    /// The plan entry is only written when a plan is present; clearing it is
    /// the job of [`SessionStore::clear`].
    pub fn persist_profile(&self, email: &str, has_paid: bool, plan: Option<&Plan>) {
        self.set_item(USER_EMAIL_KEY, email);
        self.set_item(HAS_PAID_KEY, if has_paid { "true" } else { "false" });
        if let Some(plan) = plan {
            if let Ok(raw) = serde_json::to_string(plan) {
                self.set_item(SELECTED_PLAN_KEY, &raw);
            }
        }
    }

    /// Remove all four session keys.
    ///
    /// Returns whether a token was actually present, so a concurrent second
    /// invalidation can tell it has nothing left to do.
    pub fn clear(&self) -> bool {
        let had_token = self.get_item(TOKEN_KEY).is_some();
        self.remove_item(TOKEN_KEY);
        self.remove_item(USER_EMAIL_KEY);
        self.remove_item(HAS_PAID_KEY);
        self.remove_item(SELECTED_PLAN_KEY);
        had_token
    }

    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window()?;
            let storage = window.local_storage().ok().flatten()?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            self.lock().get(key).cloned()
        }
    }

    fn set_item(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(key, value);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            self.lock().insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove_item(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.remove_item(key);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            self.lock().remove(key);
        }
    }

    #[cfg(not(feature = "hydrate"))]
    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
