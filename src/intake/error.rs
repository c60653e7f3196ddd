use thiserror::Error;

use super::validator::MAX_FILES_LIMIT;

/// Failure states of file intake, surfaced on the dismissible banner.
///
/// Only one message is visible at a time; every drop outcome replaces the
/// previous one wholesale. None of these halt the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    /// The whole batch would push the registry past the file limit.
    #[error("We can only upload a maximum of {limit} files. We currently have {current} files, and we tried to add {attempted} more.")]
    CountExceeded {
        current: usize,
        attempted: usize,
        limit: usize,
    },

    /// Entries with disallowed extensions were dropped; the valid subset was kept.
    #[error("We can only upload PDF, DOCX, TXT, PNG, and JPG files. {count} file(s) not supported.")]
    TypeRejected { count: usize },

    /// Dropped entries that could not be turned into usable descriptors.
    #[error("{count} file(s) could not be read and were skipped.")]
    DescriptorResolutionFailed { count: usize },

    /// A text preview read failed after the preview was requested.
    #[error("Could not load a preview for \"{name}\": {reason}")]
    PreviewReadFailed { name: String, reason: String },
}

impl IntakeError {
    pub fn count_exceeded(current: usize, attempted: usize) -> Self {
        Self::CountExceeded {
            current,
            attempted,
            limit: MAX_FILES_LIMIT,
        }
    }
}
