use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use eframe::egui;

/// Synthetic identifier handed out by the registry. Unique for the lifetime
/// of the registry that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileId(u64);

impl FileId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a tracked file can be previewed, resolved once when the record is
/// created instead of re-checking the MIME type on every click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Text,
    Unsupported,
}

impl FileKind {
    /// MIME type decides; the `.txt` extension is the fallback for text.
    pub fn classify(mime_type: &str, name: &str) -> Self {
        if mime_type.starts_with("image/") {
            Self::Image
        } else if mime_type == "text/plain"
            || extension_of(name).is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
        {
            Self::Text
        } else {
            Self::Unsupported
        }
    }
}

/// Where a file's content lives. Native drops and the browse dialog hand us
/// paths; web-style drops arrive with the bytes already in memory.
#[derive(Debug, Clone)]
pub enum FileSource {
    Path(PathBuf),
    Memory(Arc<[u8]>),
}

impl FileSource {
    pub fn read_bytes(&self) -> io::Result<Vec<u8>> {
        match self {
            Self::Path(path) => std::fs::read(path),
            Self::Memory(bytes) => Ok(bytes.to_vec()),
        }
    }

    pub async fn read_text(&self) -> io::Result<String> {
        match self {
            Self::Path(path) => tokio::fs::read_to_string(path).await,
            Self::Memory(bytes) => String::from_utf8(bytes.to_vec())
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
        }
    }
}

/// A dropped or browsed entry, resolved into a usable descriptor but not yet
/// validated or tracked.
#[derive(Debug, Clone)]
pub struct FileCandidate {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub source: FileSource,
}

impl FileCandidate {
    pub fn in_memory(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        Self {
            mime_type: mime_for_name(&name),
            size_bytes: bytes.len() as u64,
            source: FileSource::Memory(bytes.into()),
            name,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, String> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| format!("{}: invalid filename", path.display()))?
            .to_string();
        let metadata = std::fs::metadata(path).map_err(|e| format!("{}: {}", name, e))?;

        Ok(Self {
            mime_type: mime_for_name(&name),
            size_bytes: metadata.len(),
            source: FileSource::Path(path.to_path_buf()),
            name,
        })
    }

    /// Resolution step for a raw drop entry. Entries that carry neither bytes
    /// nor a readable path cannot become descriptors and are reported back as
    /// the error string.
    pub fn from_dropped(file: &egui::DroppedFile) -> Result<Self, String> {
        if let Some(bytes) = &file.bytes {
            if file.name.is_empty() {
                return Err("dropped entry carries bytes but no name".to_string());
            }
            return Ok(Self::in_memory(file.name.clone(), bytes.to_vec()));
        }

        match &file.path {
            Some(path) => Self::from_path(path),
            None => Err("dropped entry carries no content or path".to_string()),
        }
    }
}

/// One tracked file. Exactly one registry owns a record at a time; the
/// preview texture lives and dies with it.
pub struct FileRecord {
    pub id: FileId,
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub kind: FileKind,
    /// Simulated upload in progress. Flipped to false by the batch timer.
    pub processing: bool,
    /// Present only for image records that decoded successfully.
    pub preview_texture: Option<egui::TextureHandle>,
    pub source: FileSource,
}

/// Messages from detached timer and read tasks, drained on the UI thread.
#[derive(Debug)]
pub enum IntakeEvent {
    /// The processing delay of one accepted batch elapsed.
    BatchProcessed(Vec<FileId>),
    /// An asynchronous text read finished.
    PreviewLoaded {
        id: FileId,
        name: String,
        result: Result<String, String>,
    },
}

/// Everything after the last dot. A name without a dot has no extension and
/// will match nothing.
pub fn extension_of(name: &str) -> Option<&str> {
    name.rsplit_once('.').map(|(_, ext)| ext)
}

/// Declared MIME type for a filename, per the accepted-type table of the drop
/// zone. Unknown extensions fall back to `application/octet-stream`.
pub fn mime_for_name(name: &str) -> String {
    let ext = extension_of(name).map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("pdf") => "application/pdf",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        Some("txt") => "text/plain",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    }
    .to_string()
}
