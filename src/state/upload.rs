#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::config;
use crate::net::error::ClientError;
use crate::net::types::AnalysisRecord;

/// The user's current image selection. Replaced wholesale by each new
/// selection; never persisted.
#[derive(Clone, Debug)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub size: u64,
    #[cfg(feature = "hydrate")]
    pub handle: web_sys::File,
}

/// Upload and analysis display state for the analyze flow.
#[derive(Clone, Debug, Default)]
pub struct UploadState {
    pub selected: Option<SelectedFile>,
    pub analyzing: bool,
    pub result: Option<AnalysisRecord>,
}

impl UploadState {
    /// Accept a validated selection, clearing any displayed result.
    pub fn select(&mut self, file: SelectedFile) {
        self.selected = Some(file);
        self.result = None;
    }
}

/// Check a candidate file before any network call.
///
/// # Errors
///
/// Returns [`ClientError::Validation`] with a user-facing message when
/// the MIME type is not an accepted image type or the file exceeds the
/// upload limit.
pub fn validate_selection(mime: &str, size: u64) -> Result<(), ClientError> {
    if !config::ACCEPTED_IMAGE_TYPES.contains(&mime) {
        return Err(ClientError::Validation(
            "Unsupported file format. Only JPG and PNG images are accepted.".to_owned(),
        ));
    }
    if size > config::MAX_UPLOAD_BYTES {
        return Err(ClientError::Validation(
            "File is too large. The maximum size is 10 MB.".to_owned(),
        ));
    }
    Ok(())
}
