use super::*;

fn plan() -> Plan {
    Plan {
        id: "basic".to_owned(),
        name: "Basic".to_owned(),
        price: 9.0,
        features: Vec::new(),
    }
}

// =============================================================
// Defaults and hydration
// =============================================================

#[test]
fn default_session_is_loading_and_unauthenticated() {
    let state = SessionState::default();
    assert!(state.is_loading);
    assert!(!state.is_authenticated);
    assert!(!state.has_paid);
    assert!(state.selected_plan.is_none());
}

#[test]
fn hydrate_from_empty_storage_yields_signed_out_defaults() {
    let store = SessionStore::new();
    let mut state = SessionState::default();
    state.hydrate(&store);
    assert!(!state.is_authenticated);
    assert!(!state.has_paid);
    assert!(state.selected_plan.is_none());
    assert!(!state.is_loading);
}

#[test]
fn hydrate_round_trips_a_persisted_session() {
    let store = SessionStore::new();
    let mut state = SessionState::default();
    state.hydrate(&store);
    state.set_authenticated(&store, "tok", "a@b.com");
    state.set_paid(&store, true);
    state.set_plan(&store, Some(plan()));

    // A reload re-hydrates the same state from the shared storage.
    let mut reloaded = SessionState::default();
    reloaded.hydrate(&store);
    assert!(reloaded.is_authenticated);
    assert_eq!(reloaded.user_email, "a@b.com");
    assert!(reloaded.has_paid);
    assert_eq!(reloaded.selected_plan, Some(plan()));
    assert!(!reloaded.is_loading);
}

// =============================================================
// Mutators
// =============================================================

#[test]
fn set_authenticated_does_not_grant_payment() {
    let store = SessionStore::new();
    let mut state = SessionState::default();
    state.hydrate(&store);
    state.set_authenticated(&store, "tok", "a@b.com");
    assert!(state.is_authenticated);
    assert!(!state.has_paid);
}

#[test]
fn unauthenticated_mutations_are_not_persisted() {
    let store = SessionStore::new();
    let mut state = SessionState::default();
    state.hydrate(&store);
    state.set_paid(&store, true);
    state.set_plan(&store, Some(plan()));

    let mut reloaded = SessionState::default();
    reloaded.hydrate(&store);
    assert!(!reloaded.is_authenticated);
    assert!(!reloaded.has_paid);
    assert!(reloaded.selected_plan.is_none());
}

#[test]
fn plan_selected_before_payment_survives_a_reload() {
    let store = SessionStore::new();
    let mut state = SessionState::default();
    state.hydrate(&store);
    state.set_authenticated(&store, "tok", "a@b.com");
    state.set_plan(&store, Some(plan()));

    let mut reloaded = SessionState::default();
    reloaded.hydrate(&store);
    assert_eq!(reloaded.selected_plan, Some(plan()));
    assert!(!reloaded.has_paid);
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_resets_memory_and_storage_atomically() {
    let store = SessionStore::new();
    let mut state = SessionState::default();
    state.hydrate(&store);
    state.set_authenticated(&store, "tok", "a@b.com");
    state.set_paid(&store, true);
    state.set_plan(&store, Some(plan()));

    state.logout(&store);
    assert!(!state.is_authenticated);
    assert!(state.user_email.is_empty());
    assert!(!state.has_paid);
    assert!(state.selected_plan.is_none());
    // Logout never re-enters the loading gate.
    assert!(!state.is_loading);
    assert_eq!(store.read(), crate::util::storage::SessionSnapshot::default());
    assert!(store.token().is_none());
}

#[test]
fn storage_cleared_by_logout_stays_cleared_after_reload() {
    let store = SessionStore::new();
    let mut state = SessionState::default();
    state.hydrate(&store);
    state.set_authenticated(&store, "tok", "a@b.com");
    state.logout(&store);

    let mut reloaded = SessionState::default();
    reloaded.hydrate(&store);
    assert!(!reloaded.is_authenticated);
    assert!(reloaded.user_email.is_empty());
}
