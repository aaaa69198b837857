//! JWT claims decoding.
//!
//! The access token's middle segment carries the user's email (`sub`) and
//! id. Decoding never caches and fails closed: any malformed segment means
//! "no user", never a panic past the caller.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::net::error::ClientError;

/// Claims the client cares about. Extra claims (`exp`, `iat`, ...) are
/// ignored.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct UserClaims {
    /// The user's email, carried in the standard `sub` claim.
    #[serde(rename = "sub")]
    pub email: String,
    #[serde(default)]
    pub user_id: Option<i64>,
}

/// Decode the payload segment of a JWT.
///
/// # Errors
///
/// Returns [`ClientError::Decode`] if the token has no payload segment,
/// the segment is not URL-safe base64, or the payload is not the expected
/// JSON shape.
pub fn decode_claims(token: &str) -> Result<UserClaims, ClientError> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| ClientError::Decode("missing payload segment".to_owned()))?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| ClientError::Decode(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
}

/// Claims of the currently persisted token, or `None` when no token is
/// stored or it will not decode.
pub fn current_user() -> Option<UserClaims> {
    let token = super::token::access_token()?;
    decode_claims(&token).ok()
}
