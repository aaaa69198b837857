#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::session::claims::{self, UserClaims};

/// Reactive mirror of the persisted session: whether a token is present
/// and, when it decodes, who it belongs to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub authenticated: bool,
    pub user: Option<UserClaims>,
}

impl SessionState {
    /// Build from a token. A present token authenticates even when its
    /// payload will not decode; the claims are then simply absent.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some(t) => Self {
                authenticated: true,
                user: claims::decode_claims(t).ok(),
            },
            None => Self::default(),
        }
    }

    /// Drop the session (logout or failed refresh).
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
