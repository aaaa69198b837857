//! REST API calls to the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Native builds
//! get stubs returning a network error since the endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call funnels through one response reader: non-2xx becomes
//! `ClientError::Api` carrying the server's `detail` message, transport
//! failures become `ClientError::Network`. Callers surface the message
//! and leave their state unchanged.

#![allow(clippy::unused_async)]

use crate::net::error::ClientError;
use crate::net::types::{
    AnalysisRecord, HistoryResponse, LoginResponse, MessageResponse, RegisterResponse,
    StatsResponse, TokenResponse,
};
use crate::state::upload::SelectedFile;

#[cfg(feature = "hydrate")]
use crate::config;
#[cfg(feature = "hydrate")]
use crate::net::error;
#[cfg(feature = "hydrate")]
use crate::session::token;
#[cfg(feature = "hydrate")]
use gloo_net::http::{Method, RequestBuilder, Response};

#[cfg(not(feature = "hydrate"))]
fn browser_only() -> ClientError {
    ClientError::Network("not available outside the browser".to_owned())
}

/// Send a JSON request under the API base path, optionally attaching the
/// bearer token, and decode the JSON response.
#[cfg(feature = "hydrate")]
async fn send_json<T: serde::de::DeserializeOwned>(
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
    with_auth: bool,
) -> Result<T, ClientError> {
    let url = format!("{}{path}", config::API_BASE);
    let mut builder = RequestBuilder::new(&url)
        .method(method)
        // Pass cookies through so the refresh flow sees its session cookie.
        .credentials(web_sys::RequestCredentials::Include);

    if with_auth {
        if let Some(token) = token::access_token() {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }
    }

    let request = match body {
        Some(json) => builder
            .json(&json)
            .map_err(|e| ClientError::Network(e.to_string()))?,
        None => builder
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?,
    };

    let response = request
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;
    read_body(response).await
}

#[cfg(feature = "hydrate")]
async fn read_body<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    if !response.ok() {
        let body = response
            .json::<serde_json::Value>()
            .await
            .unwrap_or(serde_json::Value::Null);
        return Err(error::api_error(response.status(), &body));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))
}

/// Register a new account. The backend emails a verification code.
///
/// # Errors
///
/// Propagates the normalized [`ClientError`] from the call.
pub async fn register(
    username: &str,
    email: &str,
    password: &str,
) -> Result<RegisterResponse, ClientError> {
    #[cfg(feature = "hydrate")]
    {
        send_json(
            Method::POST,
            "/users/register",
            Some(serde_json::json!({
                "username": username,
                "email": email,
                "password": password,
            })),
            false,
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, email, password);
        Err(browser_only())
    }
}

/// Exchange credentials for tokens.
///
/// # Errors
///
/// Propagates the normalized [`ClientError`] from the call.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ClientError> {
    #[cfg(feature = "hydrate")]
    {
        send_json(
            Method::POST,
            "/users/login",
            Some(serde_json::json!({ "email": email, "password": password })),
            false,
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(browser_only())
    }
}

/// Confirm an emailed verification code.
///
/// # Errors
///
/// Propagates the normalized [`ClientError`] from the call.
pub async fn verify(email: &str, verify_code: &str) -> Result<MessageResponse, ClientError> {
    #[cfg(feature = "hydrate")]
    {
        send_json(
            Method::POST,
            "/users/verify",
            Some(serde_json::json!({ "email": email, "verify_code": verify_code })),
            false,
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, verify_code);
        Err(browser_only())
    }
}

/// Ask for a fresh verification code.
///
/// # Errors
///
/// Propagates the normalized [`ClientError`] from the call.
pub async fn resend_code(email: &str) -> Result<MessageResponse, ClientError> {
    #[cfg(feature = "hydrate")]
    {
        send_json(
            Method::POST,
            "/users/resend-code",
            Some(serde_json::json!({ "email": email })),
            false,
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(browser_only())
    }
}

/// Exchange the refresh cookie for a new access token. No bearer token
/// is attached; the cookie rides along via credential passthrough.
///
/// # Errors
///
/// Propagates the normalized [`ClientError`] from the call.
pub async fn refresh_token() -> Result<TokenResponse, ClientError> {
    #[cfg(feature = "hydrate")]
    {
        send_json(Method::POST, "/users/refresh", None, false).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(browser_only())
    }
}

/// Upload a soil image as multipart form data and return its analysis.
/// The content type is left to the browser so it can set the multipart
/// boundary.
///
/// # Errors
///
/// Propagates the normalized [`ClientError`] from the call.
pub async fn analyze_image(file: &SelectedFile) -> Result<AnalysisRecord, ClientError> {
    #[cfg(feature = "hydrate")]
    {
        let form = web_sys::FormData::new()
            .map_err(|_| ClientError::Network("failed to build form data".to_owned()))?;
        form.append_with_blob_and_filename("file", &file.handle, &file.name)
            .map_err(|_| ClientError::Network("failed to attach file".to_owned()))?;

        let mut builder = RequestBuilder::new(&format!("{}/soil/analyze", config::API_BASE))
            .method(Method::POST)
            .credentials(web_sys::RequestCredentials::Include);
        if let Some(token) = token::access_token() {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }

        let request = builder
            .body(form)
            .map_err(|e| ClientError::Network(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        read_body(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = file;
        Err(browser_only())
    }
}

/// Fetch one page of the current user's analysis history.
///
/// # Errors
///
/// Propagates the normalized [`ClientError`] from the call.
pub async fn fetch_history(limit: u32, offset: u32) -> Result<HistoryResponse, ClientError> {
    #[cfg(feature = "hydrate")]
    {
        send_json(
            Method::GET,
            &format!("/soil/history?limit={limit}&offset={offset}"),
            None,
            true,
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (limit, offset);
        Err(browser_only())
    }
}

/// Fetch a single analysis by id.
///
/// # Errors
///
/// Propagates the normalized [`ClientError`] from the call.
pub async fn fetch_analysis(id: i64) -> Result<AnalysisRecord, ClientError> {
    #[cfg(feature = "hydrate")]
    {
        send_json(Method::GET, &format!("/soil/analysis/{id}"), None, true).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(browser_only())
    }
}

/// Delete an analysis by id.
///
/// # Errors
///
/// Propagates the normalized [`ClientError`] from the call.
pub async fn delete_analysis(id: i64) -> Result<MessageResponse, ClientError> {
    #[cfg(feature = "hydrate")]
    {
        send_json(Method::DELETE, &format!("/soil/analysis/{id}"), None, true).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(browser_only())
    }
}

/// Fetch aggregate statistics for the current user's analyses.
///
/// # Errors
///
/// Propagates the normalized [`ClientError`] from the call.
pub async fn fetch_stats() -> Result<StatsResponse, ClientError> {
    #[cfg(feature = "hydrate")]
    {
        send_json(Method::GET, "/soil/stats", None, true).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(browser_only())
    }
}
