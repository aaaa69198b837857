use super::*;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

fn token_for(email: &str) -> String {
    let payload = serde_json::json!({"sub": email, "user_id": 4});
    format!("hdr.{}.sig", URL_SAFE_NO_PAD.encode(payload.to_string()))
}

#[test]
fn default_is_unauthenticated() {
    let s = SessionState::default();
    assert!(!s.authenticated);
    assert!(s.user.is_none());
}

#[test]
fn absent_token_means_no_session() {
    assert_eq!(SessionState::from_token(None), SessionState::default());
}

#[test]
fn decodable_token_yields_user_claims() {
    let s = SessionState::from_token(Some(&token_for("me@example.com")));
    assert!(s.authenticated);
    assert_eq!(s.user.expect("claims").email, "me@example.com");
}

#[test]
fn undecodable_token_still_authenticates() {
    // Routing trusts presence; the claims are just unavailable.
    let s = SessionState::from_token(Some("garbage"));
    assert!(s.authenticated);
    assert!(s.user.is_none());
}

#[test]
fn clear_resets_everything() {
    let mut s = SessionState::from_token(Some(&token_for("me@example.com")));
    s.clear();
    assert_eq!(s, SessionState::default());
}
