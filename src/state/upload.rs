//! `.msg` upload validation and simulated progress.
//!
//! The real parse happens server-side after a plain multipart form submit;
//! the progress bar only reassures the operator while the page navigates.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::error::{ClientError, ClientResult};

pub const WRONG_EXTENSION_MESSAGE: &str = "Please upload a .MSG file";
pub const PROCESSING_MESSAGE: &str = "Your file is being processed, please wait...";

const FAST_PHASE_END: f64 = 30.0;
const CEILING: f64 = 90.0;

#[derive(Clone, Debug, Default)]
pub struct UploadState {
    pub file_name: Option<String>,
    pub progress: f64,
    pub uploading: bool,
    pub drag_over: bool,
    pub use_ai: bool,
}

impl UploadState {
    /// Accept `name` and start the progress animation.
    ///
    /// # Errors
    ///
    /// Returns a validation error for anything but a `.msg` file.
    pub fn begin(&mut self, name: &str) -> ClientResult<()> {
        validate_msg_file(name)?;
        self.file_name = Some(name.to_owned());
        self.progress = 0.0;
        self.uploading = true;
        self.drag_over = false;
        Ok(())
    }

    pub fn tick(&mut self) {
        if self.uploading {
            self.progress = next_progress(self.progress);
        }
    }

    pub fn reset(&mut self) {
        *self = Self { use_ai: self.use_ai, ..Self::default() };
    }
}

/// Only Outlook `.msg` files are accepted, case-insensitively.
///
/// # Errors
///
/// Returns `ClientError::Validation` for any other file name.
pub fn validate_msg_file(name: &str) -> ClientResult<()> {
    if name.trim().to_ascii_lowercase().ends_with(".msg") {
        Ok(())
    } else {
        Err(ClientError::Validation(WRONG_EXTENSION_MESSAGE.to_owned()))
    }
}

/// Fast 10-point steps up to 30%, then a tenth of the remaining distance to
/// the 90% ceiling per tick.
pub fn next_progress(current: f64) -> f64 {
    if current < FAST_PHASE_END {
        return (current + 10.0).min(FAST_PHASE_END);
    }
    (current + (CEILING - current) * 0.1).min(CEILING)
}
