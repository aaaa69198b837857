//! Route guarding.
//!
//! Evaluated once per route change against local token presence only.
//! The guard never calls the backend, so a present-but-expired token
//! counts as authenticated until a real API call fails.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

/// Paths that require a present token.
pub const PROTECTED_PATHS: [&str; 4] = ["/dashboard", "/analyze", "/history", "/profile"];

/// Paths an authenticated user is bounced away from.
pub const PUBLIC_ONLY_PATHS: [&str; 3] = ["/", "/login", "/register"];

/// What kind of path the user is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteClass {
    Protected,
    PublicOnly,
    Neutral,
}

/// Classify a path against the fixed route sets.
pub fn classify(path: &str) -> RouteClass {
    if PROTECTED_PATHS.contains(&path) {
        RouteClass::Protected
    } else if PUBLIC_ONLY_PATHS.contains(&path) {
        RouteClass::PublicOnly
    } else {
        RouteClass::Neutral
    }
}

/// Outcome of a guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardAction {
    RedirectToLogin,
    RedirectToDashboard,
    Stay,
}

/// Decide whether the current page load needs a redirect.
pub fn decide(path: &str, authenticated: bool) -> GuardAction {
    match (classify(path), authenticated) {
        (RouteClass::Protected, false) => GuardAction::RedirectToLogin,
        (RouteClass::PublicOnly, true) => GuardAction::RedirectToDashboard,
        _ => GuardAction::Stay,
    }
}
