//! Background access-token renewal.
//!
//! A single repeating task renews the access token every 14 minutes,
//! one minute inside its 15-minute lifetime. A successful tick persists
//! the new token and continues; a failed tick logs the user out. The
//! handle is owned by the page that started the loop and stopped in its
//! cleanup, so no timer outlives its page.

#[cfg(test)]
#[path = "refresh_test.rs"]
mod refresh_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::net::error::ClientError;
use crate::net::types::TokenResponse;

/// What a refresh tick decided to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RefreshStep {
    /// Persist this token and keep the loop running.
    Persist(String),
    /// Clear the session and navigate to the login page.
    LogOut,
}

/// Map a refresh outcome to the loop's next step. Any failure ends the
/// session, whether the refresh cookie expired or the request itself failed.
pub fn step(outcome: Result<TokenResponse, ClientError>) -> RefreshStep {
    match outcome {
        Ok(resp) => RefreshStep::Persist(resp.access_token),
        Err(_) => RefreshStep::LogOut,
    }
}

/// Cancellation handle for a running refresh loop.
#[derive(Clone, Debug, Default)]
pub struct RefreshHandle {
    cancelled: Rc<Cell<bool>>,
}

impl RefreshHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the loop; the next wakeup exits without calling the backend.
    pub fn stop(&self) {
        self.cancelled.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.cancelled.get()
    }
}

/// Start the refresh loop. Returns a handle the caller must stop on
/// page cleanup.
#[cfg(feature = "hydrate")]
pub fn start(
    session: leptos::prelude::RwSignal<crate::state::session::SessionState>,
    on_logout: impl Fn() + 'static,
) -> RefreshHandle {
    use leptos::prelude::Update;

    let handle = RefreshHandle::new();
    let cancelled = handle.cancelled.clone();

    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::sleep(crate::config::REFRESH_PERIOD).await;
            if cancelled.get() {
                break;
            }
            match step(crate::net::api::refresh_token().await) {
                RefreshStep::Persist(token) => {
                    crate::session::token::store_access_token(&token);
                    leptos::logging::log!("access token refreshed");
                }
                RefreshStep::LogOut => {
                    leptos::logging::warn!("token refresh failed; ending session");
                    crate::session::token::clear_access_token();
                    session.update(crate::state::session::SessionState::clear);
                    on_logout();
                    break;
                }
            }
        }
    });

    handle
}
