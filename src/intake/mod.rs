mod error;
mod registry;
mod types;
mod validator;

use eframe::egui;

pub use error::IntakeError;
pub use registry::{FileRegistry, PROCESSING_DELAY};
pub use types::{
    extension_of, mime_for_name, FileCandidate, FileId, FileKind, FileRecord, FileSource,
    IntakeEvent,
};
pub use validator::{is_accepted_name, ACCEPTED_EXTENSIONS, MAX_FILES_LIMIT};

/// What one drop (or browse) action did: which records were created, and the
/// single error message to show for it. `error: None` on a clean drop also
/// clears whatever message the previous action left behind.
pub struct DropOutcome {
    pub accepted: Vec<FileId>,
    pub error: Option<IntakeError>,
}

/// Runs one batch through resolution bookkeeping, the count check, and the
/// type partition, then hands the surviving entries to the registry.
///
/// Entries arrive as `Result`s because drop resolution happens at the input
/// boundary; failed entries are counted and skipped without aborting their
/// siblings. The count check sees only resolved entries and rejects the whole
/// batch, adding nothing. The type partition drops offending entries but
/// keeps the valid subset.
pub fn ingest(
    registry: &mut FileRegistry,
    ctx: &egui::Context,
    batch: Vec<Result<FileCandidate, String>>,
) -> DropOutcome {
    let mut candidates = Vec::with_capacity(batch.len());
    let mut unresolved = 0usize;
    for entry in batch {
        match entry {
            Ok(candidate) => candidates.push(candidate),
            Err(reason) => {
                eprintln!("Skipping dropped entry: {}", reason);
                unresolved += 1;
            }
        }
    }

    let mut error =
        (unresolved > 0).then_some(IntakeError::DescriptorResolutionFailed { count: unresolved });

    if candidates.is_empty() {
        return DropOutcome {
            accepted: Vec::new(),
            error,
        };
    }

    if let Err(count_error) = validator::check_capacity(registry.len(), candidates.len()) {
        return DropOutcome {
            accepted: Vec::new(),
            error: Some(count_error),
        };
    }

    let partition = validator::partition_by_type(candidates);
    if partition.rejected_count > 0 {
        error = Some(IntakeError::TypeRejected {
            count: partition.rejected_count,
        });
    }

    DropOutcome {
        accepted: registry.accept(partition.accepted, ctx),
        error,
    }
}
