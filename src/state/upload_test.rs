use super::*;

const MIB: u64 = 1024 * 1024;

fn selection(name: &str, mime: &str, size: u64) -> SelectedFile {
    SelectedFile { name: name.to_owned(), mime: mime.to_owned(), size }
}

fn record() -> AnalysisRecord {
    AnalysisRecord {
        id: 1,
        user_id: 1,
        image_filename: "a.jpg".to_owned(),
        image_path: "uploads/a.jpg".to_owned(),
        soil_type: "Loam".to_owned(),
        confidence: 0.5,
        description: String::new(),
        characteristics: String::new(),
        recommended_crops: String::new(),
        recommendations: String::new(),
        created_at: "2026-01-01T00:00:00".to_owned(),
    }
}

// =============================================================
// Validation
// =============================================================

#[test]
fn bmp_is_rejected() {
    assert!(matches!(
        validate_selection("image/bmp", MIB),
        Err(ClientError::Validation(_))
    ));
}

#[test]
fn oversized_jpeg_is_rejected() {
    assert!(matches!(
        validate_selection("image/jpeg", 10 * MIB + 1),
        Err(ClientError::Validation(_))
    ));
}

#[test]
fn five_mib_png_is_accepted() {
    assert!(validate_selection("image/png", 5 * MIB).is_ok());
}

#[test]
fn exactly_ten_mib_is_accepted() {
    assert!(validate_selection("image/jpeg", 10 * MIB).is_ok());
}

#[test]
fn jpg_alias_is_accepted() {
    assert!(validate_selection("image/jpg", MIB).is_ok());
}

#[test]
fn empty_mime_is_rejected() {
    assert!(validate_selection("", MIB).is_err());
}

// =============================================================
// UploadState
// =============================================================

#[test]
fn default_state_has_nothing_selected() {
    let s = UploadState::default();
    assert!(s.selected.is_none());
    assert!(!s.analyzing);
    assert!(s.result.is_none());
}

#[test]
fn select_replaces_the_previous_selection() {
    let mut s = UploadState::default();
    s.select(selection("first.png", "image/png", MIB));
    s.select(selection("second.jpg", "image/jpeg", MIB));
    assert_eq!(s.selected.expect("selection").name, "second.jpg");
}

#[test]
fn select_clears_a_displayed_result() {
    let mut s = UploadState { result: Some(record()), ..UploadState::default() };
    s.select(selection("a.png", "image/png", MIB));
    assert!(s.result.is_none());
}
