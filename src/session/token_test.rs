use super::*;

fn store() -> TokenStore<MemoryVault> {
    TokenStore::new(MemoryVault::default())
}

// =============================================================
// Round trips
// =============================================================

#[test]
fn set_then_get_returns_the_token() {
    let s = store();
    s.set("tok-1");
    assert_eq!(s.get().as_deref(), Some("tok-1"));
}

#[test]
fn set_overwrites_previous_token() {
    let s = store();
    s.set("old");
    s.set("new");
    assert_eq!(s.get().as_deref(), Some("new"));
}

#[test]
fn remove_then_get_returns_absent() {
    let s = store();
    s.set("tok");
    s.remove();
    assert!(s.get().is_none());
}

#[test]
fn remove_on_empty_store_is_a_noop() {
    let s = store();
    s.remove();
    assert!(s.get().is_none());
}

// =============================================================
// is_authenticated tracks presence
// =============================================================

#[test]
fn authentication_follows_presence_over_any_sequence() {
    let s = store();
    assert!(!s.is_authenticated());
    s.set("a");
    assert!(s.is_authenticated());
    s.set("b");
    assert!(s.is_authenticated());
    s.remove();
    assert!(!s.is_authenticated());
    s.set("c");
    assert!(s.is_authenticated());
}

#[test]
fn native_helpers_report_no_session() {
    // Without a browser there is no storage, so the helpers fail closed.
    assert!(access_token().is_none());
    assert!(!is_authenticated());
}
