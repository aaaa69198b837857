//! Wire types for the backend REST API.
//!
//! Field names follow the backend's JSON exactly; timestamps stay as the
//! ISO-8601 strings the server sends since the client only displays them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// A completed soil analysis as stored server-side.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnalysisRecord {
    pub id: i64,
    pub user_id: i64,
    pub image_filename: String,
    pub image_path: String,
    pub soil_type: String,
    pub confidence: f64,
    pub description: String,
    pub characteristics: String,
    pub recommended_crops: String,
    pub recommendations: String,
    pub created_at: String,
}

impl AnalysisRecord {
    /// Confidence as a percentage with two decimals, for the result view.
    pub fn confidence_percent(&self) -> String {
        format!("{:.2}", self.confidence * 100.0)
    }

    /// Confidence as a percentage with one decimal, for history rows.
    pub fn confidence_percent_short(&self) -> String {
        format!("{:.1}", self.confidence * 100.0)
    }

    /// `created_at` trimmed to a readable `YYYY-MM-DD HH:MM:SS`.
    pub fn created_at_display(&self) -> String {
        self.created_at.replace('T', " ").chars().take(19).collect()
    }
}

/// One page of a user's analysis history.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HistoryResponse {
    pub analyses: Vec<AnalysisRecord>,
    pub total: i64,
}

/// Login response. `refresh_token` and `token_type` ride along but the
/// client only persists the access token; the refresh credential lives in
/// an HTTP-only cookie.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Refresh response: a fresh access token.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Registration acknowledgement.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub email: String,
}

/// Generic `{"message": ...}` acknowledgement (verify, resend, delete).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Per-soil-type share of a user's analyses.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SoilTypeStat {
    pub soil_type: String,
    pub count: i64,
    pub percentage: f64,
}

/// Aggregate statistics for the profile page.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StatsResponse {
    pub total_analyses: i64,
    pub soil_types_breakdown: Vec<SoilTypeStat>,
    pub most_common_type: Option<String>,
    pub latest_analysis_date: Option<String>,
}
