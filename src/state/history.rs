#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::config;
use crate::net::error::ClientError;
use crate::net::types::{AnalysisRecord, HistoryResponse, MessageResponse};
use crate::state::notice::NoticeLevel;

/// The currently displayed page of the user's analysis history.
///
/// The list only ever changes by applying a freshly fetched page, so a
/// failed delete or load leaves it exactly as it was.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryState {
    pub items: Vec<AnalysisRecord>,
    pub total: i64,
    pub limit: u32,
    pub offset: u32,
    pub loading: bool,
    pub loaded: bool,
}

impl Default for HistoryState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            limit: config::HISTORY_PAGE_SIZE,
            offset: 0,
            loading: false,
            loaded: false,
        }
    }
}

impl HistoryState {
    /// Replace the displayed page with a fetched one.
    pub fn apply_page(&mut self, page: HistoryResponse) {
        self.items = page.analyses;
        self.total = page.total;
        self.loading = false;
        self.loaded = true;
    }

    /// True once a fetch completed with zero results; drives the
    /// explicit empty-state message instead of a bare empty list.
    pub fn is_empty_after_load(&self) -> bool {
        self.loaded && self.items.is_empty()
    }

    /// Whether a next page exists at the current limit/offset.
    pub fn has_next_page(&self) -> bool {
        i64::from(self.offset + self.limit) < self.total
    }

    pub fn has_previous_page(&self) -> bool {
        self.offset > 0
    }
}

/// Feedback for a finished delete call. Success notifies and is followed
/// by a reload; failure surfaces the server's detail (or the generic
/// fallback baked into [`ClientError::Api`]) and mutates nothing.
pub fn delete_feedback(result: &Result<MessageResponse, ClientError>) -> (NoticeLevel, String) {
    match result {
        Ok(resp) => (NoticeLevel::Success, resp.message.clone()),
        Err(err) => (NoticeLevel::Error, err.to_string()),
    }
}
