use super::*;

// =============================================================
// Classification
// =============================================================

#[test]
fn protected_paths_classify_as_protected() {
    for path in PROTECTED_PATHS {
        assert_eq!(classify(path), RouteClass::Protected, "path {path}");
    }
}

#[test]
fn public_only_paths_classify_as_public_only() {
    for path in PUBLIC_ONLY_PATHS {
        assert_eq!(classify(path), RouteClass::PublicOnly, "path {path}");
    }
}

#[test]
fn verify_and_about_are_neutral() {
    assert_eq!(classify("/verify"), RouteClass::Neutral);
    assert_eq!(classify("/about"), RouteClass::Neutral);
}

#[test]
fn unknown_paths_are_neutral() {
    assert_eq!(classify("/other"), RouteClass::Neutral);
    assert_eq!(classify("/dashboard/extra"), RouteClass::Neutral);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn unauthenticated_on_protected_redirects_to_login() {
    assert_eq!(decide("/dashboard", false), GuardAction::RedirectToLogin);
    assert_eq!(decide("/history", false), GuardAction::RedirectToLogin);
}

#[test]
fn authenticated_on_public_only_redirects_to_dashboard() {
    assert_eq!(decide("/login", true), GuardAction::RedirectToDashboard);
    assert_eq!(decide("/", true), GuardAction::RedirectToDashboard);
    assert_eq!(decide("/register", true), GuardAction::RedirectToDashboard);
}

#[test]
fn authenticated_on_protected_stays() {
    assert_eq!(decide("/dashboard", true), GuardAction::Stay);
    assert_eq!(decide("/profile", true), GuardAction::Stay);
}

#[test]
fn unauthenticated_on_public_only_stays() {
    assert_eq!(decide("/login", false), GuardAction::Stay);
    assert_eq!(decide("/", false), GuardAction::Stay);
}

#[test]
fn neutral_paths_never_redirect() {
    assert_eq!(decide("/other", false), GuardAction::Stay);
    assert_eq!(decide("/other", true), GuardAction::Stay);
    assert_eq!(decide("/verify", false), GuardAction::Stay);
    assert_eq!(decide("/verify", true), GuardAction::Stay);
}
