//! Client-side error taxonomy.
//!
//! Every failure a flow can hit falls into one of four buckets: input
//! rejected before any network call, a non-2xx response from the backend,
//! a transport failure, or a token payload that would not decode. The
//! `Display` string of each variant is what the user sees.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Fallback shown when an error response carries no `detail` field.
pub const GENERIC_DETAIL: &str = "The request failed. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// Non-2xx response; `detail` is the server's explanation.
    #[error("{detail}")]
    Api { status: u16, detail: String },
    /// Transport-level failure before a response arrived.
    #[error("network error: {0}")]
    Network(String),
    /// Bad input caught before any network call.
    #[error("{0}")]
    Validation(String),
    /// Malformed token payload; callers treat the user as absent.
    #[error("invalid token payload: {0}")]
    Decode(String),
}

/// Build an [`ClientError::Api`] from a response status and JSON body,
/// preferring the backend's `detail` message over the generic fallback.
pub fn api_error(status: u16, body: &serde_json::Value) -> ClientError {
    let detail = body
        .get("detail")
        .and_then(|v| v.as_str())
        .unwrap_or(GENERIC_DETAIL)
        .to_owned();
    ClientError::Api { status, detail }
}
