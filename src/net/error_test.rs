use super::*;

// =============================================================
// api_error
// =============================================================

#[test]
fn api_error_uses_server_detail() {
    let body = serde_json::json!({"detail": "Analysis not found"});
    let err = api_error(404, &body);
    assert_eq!(
        err,
        ClientError::Api { status: 404, detail: "Analysis not found".to_owned() }
    );
}

#[test]
fn api_error_falls_back_to_generic_without_detail() {
    let err = api_error(500, &serde_json::json!({"error": "boom"}));
    let ClientError::Api { status, detail } = err else {
        panic!("expected Api variant");
    };
    assert_eq!(status, 500);
    assert_eq!(detail, GENERIC_DETAIL);
}

#[test]
fn api_error_falls_back_when_body_is_not_an_object() {
    let err = api_error(502, &serde_json::Value::Null);
    assert_eq!(err.to_string(), GENERIC_DETAIL);
}

#[test]
fn api_error_ignores_non_string_detail() {
    let err = api_error(400, &serde_json::json!({"detail": 42}));
    assert_eq!(err.to_string(), GENERIC_DETAIL);
}

// =============================================================
// Display
// =============================================================

#[test]
fn api_display_is_the_detail_alone() {
    let err = ClientError::Api { status: 400, detail: "File too large".to_owned() };
    assert_eq!(err.to_string(), "File too large");
}

#[test]
fn network_display_is_prefixed() {
    let err = ClientError::Network("connection refused".to_owned());
    assert_eq!(err.to_string(), "network error: connection refused");
}

#[test]
fn validation_display_is_the_message_alone() {
    let err = ClientError::Validation("Unsupported file type".to_owned());
    assert_eq!(err.to_string(), "Unsupported file type");
}

#[test]
fn decode_display_names_the_token() {
    let err = ClientError::Decode("bad segment".to_owned());
    assert_eq!(err.to_string(), "invalid token payload: bad segment");
}
