use eframe::egui;

use crate::intake::{extension_of, FileId, FileKind, FileRecord, FileSource};

/// Renderable content for the preview modal.
pub enum PreviewContent {
    Image {
        name: String,
        texture: egui::TextureHandle,
    },
    Text {
        name: String,
        body: String,
    },
    /// Static placeholder naming the unsupported extension or type.
    Unavailable {
        name: String,
        detail: String,
    },
}

impl PreviewContent {
    pub fn name(&self) -> &str {
        match self {
            Self::Image { name, .. } | Self::Text { name, .. } | Self::Unavailable { name, .. } => {
                name
            }
        }
    }
}

/// What a preview request needs next: images and placeholders resolve on the
/// spot, text needs its content read off the UI thread first.
pub enum PreviewRequest {
    Ready(PreviewContent),
    TextRead {
        id: FileId,
        name: String,
        source: FileSource,
    },
}

pub fn resolve(record: &FileRecord) -> PreviewRequest {
    match record.kind {
        FileKind::Image => match &record.preview_texture {
            Some(texture) => PreviewRequest::Ready(PreviewContent::Image {
                name: record.name.clone(),
                texture: texture.clone(),
            }),
            // Image records normally hold a texture; a failed decode at
            // intake leaves them without one.
            None => PreviewRequest::Ready(PreviewContent::Unavailable {
                name: record.name.clone(),
                detail: "The image could not be decoded.".to_string(),
            }),
        },
        FileKind::Text => PreviewRequest::TextRead {
            id: record.id,
            name: record.name.clone(),
            source: record.source.clone(),
        },
        FileKind::Unsupported => PreviewRequest::Ready(PreviewContent::Unavailable {
            name: record.name.clone(),
            detail: unsupported_detail(record),
        }),
    }
}

fn unsupported_detail(record: &FileRecord) -> String {
    match extension_of(&record.name) {
        Some(ext) => format!(
            "Preview is not available for .{} files.",
            ext.to_ascii_lowercase()
        ),
        None => format!("Preview is not available for {} files.", record.mime_type),
    }
}
