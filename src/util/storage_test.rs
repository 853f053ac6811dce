use super::*;

fn plan() -> Plan {
    Plan {
        id: "pro".to_owned(),
        name: "Pro".to_owned(),
        price: 29.0,
        features: vec!["analytics".to_owned()],
    }
}

// =============================================================
// Reads
// =============================================================

#[test]
fn read_empty_store_is_default_snapshot() {
    let store = SessionStore::new();
    assert_eq!(store.read(), SessionSnapshot::default());
}

#[test]
fn read_ignores_profile_keys_without_token() {
    // Stale values from a prior session must not leak into a fresh
    // unauthenticated load.
    let store = SessionStore::new();
    store.persist_profile("old@user.com", true, Some(&plan()));
    let snap = store.read();
    assert_eq!(snap, SessionSnapshot::default());
    assert!(snap.token.is_none());
    assert!(!snap.has_paid);
}

#[test]
fn read_round_trips_authenticated_session() {
    let store = SessionStore::new();
    store.write_token("tok-1");
    store.persist_profile("a@b.com", true, Some(&plan()));
    let snap = store.read();
    assert_eq!(snap.token.as_deref(), Some("tok-1"));
    assert_eq!(snap.user_email, "a@b.com");
    assert!(snap.has_paid);
    assert_eq!(snap.selected_plan, Some(plan()));
}

#[test]
fn read_discards_malformed_plan() {
    let store = SessionStore::new();
    store.write_token("tok-1");
    store.set_item(SELECTED_PLAN_KEY, "{not json");
    let snap = store.read();
    assert_eq!(snap.token.as_deref(), Some("tok-1"));
    assert!(snap.selected_plan.is_none());
}

#[test]
fn read_treats_non_true_paid_flag_as_false() {
    let store = SessionStore::new();
    store.write_token("tok-1");
    store.set_item(HAS_PAID_KEY, "yes");
    assert!(!store.read().has_paid);
}

// =============================================================
// Writes
// =============================================================

#[test]
fn persist_profile_without_plan_keeps_existing_entry() {
    let store = SessionStore::new();
    store.write_token("tok-1");
    store.persist_profile("a@b.com", false, Some(&plan()));
    store.persist_profile("a@b.com", true, None);
    assert_eq!(store.read().selected_plan, Some(plan()));
}

#[test]
fn clear_removes_every_key() {
    let store = SessionStore::new();
    store.write_token("tok-1");
    store.persist_profile("a@b.com", true, Some(&plan()));
    assert!(store.clear());
    assert!(store.token().is_none());
    assert!(store.get_item(USER_EMAIL_KEY).is_none());
    assert!(store.get_item(HAS_PAID_KEY).is_none());
    assert!(store.get_item(SELECTED_PLAN_KEY).is_none());
}

#[test]
fn clear_reports_whether_a_token_was_present() {
    let store = SessionStore::new();
    assert!(!store.clear());
    store.write_token("tok-1");
    assert!(store.clear());
    assert!(!store.clear());
}

#[test]
fn clones_share_the_same_backing_storage() {
    let store = SessionStore::new();
    let handle = store.clone();
    store.write_token("tok-1");
    assert_eq!(handle.token().as_deref(), Some("tok-1"));
}
