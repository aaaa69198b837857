//! Compile-time configuration shared across the client.

use std::time::Duration;

/// Base path for all backend API calls.
pub const API_BASE: &str = "/api/v1";

/// localStorage key holding the access token. Must match the key the
/// backend's served pages expect, so sessions survive a mixed deploy.
pub const TOKEN_STORAGE_KEY: &str = "access_token";

/// MIME types accepted for soil image uploads.
pub const ACCEPTED_IMAGE_TYPES: [&str; 3] = ["image/jpeg", "image/jpg", "image/png"];

/// Maximum accepted upload size in bytes (10 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// How often the background refresh task renews the access token.
/// One minute shorter than the 15-minute access-token lifetime.
pub const REFRESH_PERIOD: Duration = Duration::from_secs(14 * 60);

/// Default page size for analysis history listings.
pub const HISTORY_PAGE_SIZE: u32 = 10;

/// How long a flash notice stays on screen before auto-dismissing.
pub const NOTICE_TIMEOUT: Duration = Duration::from_secs(5);
