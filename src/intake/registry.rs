use std::time::Duration;

use eframe::egui;

use super::types::{FileCandidate, FileId, FileKind, FileRecord};
use crate::preview::texture;

/// Simulated upload time applied to every accepted batch.
pub const PROCESSING_DELAY: Duration = Duration::from_millis(2000);

/// Ordered collection of tracked files. Each widget instance owns its own
/// registry; records never move between registries.
#[derive(Default)]
pub struct FileRegistry {
    records: Vec<FileRecord>,
    next_id: u64,
}

impl FileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn get(&self, id: FileId) -> Option<&FileRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn contains(&self, id: FileId) -> bool {
        self.get(id).is_some()
    }

    /// Appends an already-validated batch in drop order, every record starting
    /// out as processing. Image records get their preview texture decoded and
    /// uploaded here, synchronously. Returns the ids of the new records for
    /// the batch timer.
    pub fn accept(&mut self, batch: Vec<FileCandidate>, ctx: &egui::Context) -> Vec<FileId> {
        let mut ids = Vec::with_capacity(batch.len());

        for candidate in batch {
            let id = FileId::new(self.next_id);
            self.next_id += 1;

            let kind = FileKind::classify(&candidate.mime_type, &candidate.name);
            let preview_texture = match kind {
                FileKind::Image => {
                    texture::load_preview_texture(ctx, id, &candidate.name, &candidate.source)
                }
                _ => None,
            };

            self.records.push(FileRecord {
                id,
                name: candidate.name,
                mime_type: candidate.mime_type,
                size_bytes: candidate.size_bytes,
                kind,
                processing: true,
                preview_texture,
                source: candidate.source,
            });
            ids.push(id);
        }

        ids
    }

    /// Flips `processing` off for the given ids. Ids of records removed while
    /// their batch was still in flight are skipped; records from other batches
    /// are untouched.
    pub fn mark_processed(&mut self, ids: &[FileId]) {
        for record in &mut self.records {
            if ids.contains(&record.id) {
                record.processing = false;
            }
        }
    }

    /// Removes the record, dropping its preview texture with it. Returns
    /// whether anything was removed, so a second call with the same id is a
    /// visible no-op.
    pub fn remove(&mut self, id: FileId) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        self.records.len() != before
    }

    /// Drops every record and with them every held preview texture.
    pub fn teardown(&mut self) {
        self.records.clear();
    }
}
