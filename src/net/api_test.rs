use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

fn client_with_counter(store: SessionStore) -> (SalesClient, Arc<AtomicUsize>) {
    let redirects = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&redirects);
    let client = SalesClient::new(
        store,
        Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }),
    );
    (client, redirects)
}

// =============================================================
// Endpoints and credentials
// =============================================================

#[test]
fn endpoints_join_base_and_path() {
    let (client, _) = client_with_counter(SessionStore::new());
    assert_eq!(client.endpoint(""), "/api/sales");
    assert_eq!(client.endpoint("/analytics"), "/api/sales/analytics");
    assert_eq!(client.endpoint("/42/decstatus"), "/api/sales/42/decstatus");
}

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let client = SalesClient::with_base_url(
        "http://localhost:3000/api/sales/",
        SessionStore::new(),
        Arc::new(|| {}),
    );
    assert_eq!(client.endpoint("/7"), "http://localhost:3000/api/sales/7");
}

#[test]
fn bearer_reflects_the_stored_token() {
    let store = SessionStore::new();
    let (client, _) = client_with_counter(store.clone());
    assert!(client.bearer().is_none());
    store.write_token("tok-42");
    assert_eq!(client.bearer().as_deref(), Some("Bearer tok-42"));
}

// =============================================================
// Status-advance body
// =============================================================

#[test]
fn dec_status_body_is_exactly_the_fixed_payload() {
    assert_eq!(dec_status_body().to_string(), r#"{"decStatus":2}"#);
}

#[test]
fn sale_update_omits_absent_fields() {
    let patch = SaleUpdate {
        amount: Some(19.5),
        ..SaleUpdate::default()
    };
    let body = serde_json::to_value(&patch).expect("serializable patch");
    assert_eq!(body.to_string(), r#"{"amount":19.5}"#);
}

// =============================================================
// Authentication-rejection reaction
// =============================================================

#[test]
fn unauthorized_reaction_clears_token_and_redirects_once() {
    let store = SessionStore::new();
    store.write_token("expired");
    let (client, redirects) = client_with_counter(store.clone());

    client.handle_unauthorized();
    assert!(store.token().is_none());
    assert_eq!(redirects.load(Ordering::SeqCst), 1);
}

#[test]
fn concurrent_rejections_invalidate_like_a_single_one() {
    let store = SessionStore::new();
    store.write_token("expired");
    let (client, redirects) = client_with_counter(store.clone());

    // Two in-flight requests both came back 401.
    client.handle_unauthorized();
    client.handle_unauthorized();
    assert!(store.token().is_none());
    assert_eq!(redirects.load(Ordering::SeqCst), 1);
}

#[test]
fn rejection_with_no_session_is_a_no_op() {
    let (client, redirects) = client_with_counter(SessionStore::new());
    client.handle_unauthorized();
    assert_eq!(redirects.load(Ordering::SeqCst), 0);
}
