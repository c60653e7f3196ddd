use crate::intake::{FileId, IntakeError};
use crate::preview::PreviewContent;

/// Per-widget UI state next to the registry: the single visible error and the
/// modal content. Each widget instance owns its own copy.
#[derive(Default)]
pub struct WidgetState {
    /// At most one message at a time; every drop outcome replaces it.
    pub error_message: Option<IntakeError>,
    /// `Some` means the preview modal is open.
    pub preview: Option<PreviewContent>,
    /// Record whose text read is in flight, so its row shows a spinner and
    /// repeat clicks are ignored.
    pub loading_preview: Option<FileId>,
}

impl WidgetState {
    pub fn dismiss_error(&mut self) {
        self.error_message = None;
    }

    pub fn open_preview(&mut self, content: PreviewContent) {
        self.preview = Some(content);
    }

    /// Closing the modal also clears the displayed content.
    pub fn close_preview(&mut self) {
        self.preview = None;
    }
}
