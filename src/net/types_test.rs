use super::*;

fn record() -> AnalysisRecord {
    serde_json::from_value(serde_json::json!({
        "id": 12,
        "user_id": 3,
        "image_filename": "garden.jpg",
        "image_path": "uploads/ab12.jpg",
        "soil_type": "Chernozem",
        "confidence": 0.9372,
        "description": "Dark fertile soil",
        "characteristics": "High humus content",
        "recommended_crops": "Wheat, corn",
        "recommendations": "Minimal fertilization needed",
        "created_at": "2026-03-14T09:21:45.120000"
    }))
    .expect("record should deserialize")
}

// =============================================================
// AnalysisRecord
// =============================================================

#[test]
fn analysis_record_deserializes_backend_shape() {
    let r = record();
    assert_eq!(r.id, 12);
    assert_eq!(r.soil_type, "Chernozem");
    assert!((r.confidence - 0.9372).abs() < 1e-9);
}

#[test]
fn confidence_percent_has_two_decimals() {
    assert_eq!(record().confidence_percent(), "93.72");
}

#[test]
fn confidence_percent_short_has_one_decimal() {
    assert_eq!(record().confidence_percent_short(), "93.7");
}

#[test]
fn created_at_display_drops_subseconds() {
    assert_eq!(record().created_at_display(), "2026-03-14 09:21:45");
}

#[test]
fn created_at_display_handles_short_values() {
    let mut r = record();
    r.created_at = "2026-03-14".to_owned();
    assert_eq!(r.created_at_display(), "2026-03-14");
}

// =============================================================
// List and auth responses
// =============================================================

#[test]
fn history_response_allows_empty_page() {
    let page: HistoryResponse =
        serde_json::from_value(serde_json::json!({"analyses": [], "total": 0}))
            .expect("empty page");
    assert!(page.analyses.is_empty());
    assert_eq!(page.total, 0);
}

#[test]
fn login_response_tolerates_missing_optional_fields() {
    let resp: LoginResponse =
        serde_json::from_value(serde_json::json!({"access_token": "abc"}))
            .expect("minimal login response");
    assert_eq!(resp.access_token, "abc");
    assert!(resp.refresh_token.is_none());
    assert!(resp.token_type.is_none());
}

#[test]
fn login_response_keeps_full_backend_shape() {
    let resp: LoginResponse = serde_json::from_value(serde_json::json!({
        "access_token": "a",
        "refresh_token": "r",
        "token_type": "bearer"
    }))
    .expect("full login response");
    assert_eq!(resp.token_type.as_deref(), Some("bearer"));
}

#[test]
fn stats_response_allows_empty_account() {
    let stats: StatsResponse = serde_json::from_value(serde_json::json!({
        "total_analyses": 0,
        "soil_types_breakdown": [],
        "most_common_type": null,
        "latest_analysis_date": null
    }))
    .expect("empty stats");
    assert_eq!(stats.total_analyses, 0);
    assert!(stats.most_common_type.is_none());
}
