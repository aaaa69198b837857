use super::*;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

fn token_with_payload(payload: &serde_json::Value) -> String {
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("hdr.{body}.sig")
}

// =============================================================
// Well-formed tokens
// =============================================================

#[test]
fn decodes_email_and_user_id() {
    let token = token_with_payload(&serde_json::json!({"sub": "me@example.com", "user_id": 7}));
    let claims = decode_claims(&token).expect("claims should decode");
    assert_eq!(claims.email, "me@example.com");
    assert_eq!(claims.user_id, Some(7));
}

#[test]
fn user_id_is_optional() {
    let token = token_with_payload(&serde_json::json!({"sub": "me@example.com"}));
    let claims = decode_claims(&token).expect("claims should decode");
    assert!(claims.user_id.is_none());
}

#[test]
fn extra_claims_are_ignored() {
    let token = token_with_payload(&serde_json::json!({
        "sub": "me@example.com",
        "exp": 1_900_000_000,
        "iat": 1_899_999_100
    }));
    assert!(decode_claims(&token).is_ok());
}

// =============================================================
// Malformed tokens fail closed
// =============================================================

#[test]
fn token_without_separator_is_rejected() {
    assert!(matches!(decode_claims("justonepiece"), Err(ClientError::Decode(_))));
}

#[test]
fn payload_with_invalid_base64_is_rejected() {
    assert!(matches!(decode_claims("hdr.@@not-base64@@.sig"), Err(ClientError::Decode(_))));
}

#[test]
fn payload_with_invalid_json_is_rejected() {
    let body = URL_SAFE_NO_PAD.encode("not json at all");
    let token = format!("hdr.{body}.sig");
    assert!(matches!(decode_claims(&token), Err(ClientError::Decode(_))));
}

#[test]
fn payload_missing_sub_is_rejected() {
    let token = token_with_payload(&serde_json::json!({"user_id": 1}));
    assert!(matches!(decode_claims(&token), Err(ClientError::Decode(_))));
}

#[test]
fn empty_token_is_rejected() {
    assert!(decode_claims("").is_err());
}

#[test]
fn current_user_is_absent_without_a_stored_token() {
    assert!(current_user().is_none());
}
