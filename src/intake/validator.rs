use super::error::IntakeError;
use super::types::{extension_of, FileCandidate};

/// Hard cap on tracked files across all batches.
pub const MAX_FILES_LIMIT: usize = 5;

/// Filename extensions the drop zone accepts, compared case-insensitively.
pub const ACCEPTED_EXTENSIONS: [&str; 6] = ["pdf", "docx", "txt", "png", "jpg", "jpeg"];

/// Result of partitioning one drop batch by extension. Accepted entries keep
/// their drop order; rejected entries are only counted, never named.
pub struct TypePartition {
    pub accepted: Vec<FileCandidate>,
    pub rejected_count: usize,
}

pub fn is_accepted_name(name: &str) -> bool {
    match extension_of(name) {
        Some(ext) => ACCEPTED_EXTENSIONS
            .iter()
            .any(|accepted| accepted.eq_ignore_ascii_case(ext)),
        None => false,
    }
}

/// The whole batch stands or falls together on the count check: if it does
/// not fit, nothing from it is added.
pub fn check_capacity(current: usize, incoming: usize) -> Result<(), IntakeError> {
    if current + incoming > MAX_FILES_LIMIT {
        Err(IntakeError::count_exceeded(current, incoming))
    } else {
        Ok(())
    }
}

pub fn partition_by_type(batch: Vec<FileCandidate>) -> TypePartition {
    let total = batch.len();
    let accepted: Vec<FileCandidate> = batch
        .into_iter()
        .filter(|candidate| is_accepted_name(&candidate.name))
        .collect();
    let rejected_count = total - accepted.len();

    TypePartition {
        accepted,
        rejected_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str) -> FileCandidate {
        FileCandidate::in_memory(name, b"content".to_vec())
    }

    #[test]
    fn capacity_allows_an_exact_fit() {
        assert!(check_capacity(3, 2).is_ok());
        assert!(check_capacity(0, MAX_FILES_LIMIT).is_ok());
    }

    #[test]
    fn capacity_rejects_the_batch_that_would_overflow() {
        let err = check_capacity(4, 2).unwrap_err();
        assert_eq!(
            err,
            IntakeError::CountExceeded {
                current: 4,
                attempted: 2,
                limit: MAX_FILES_LIMIT,
            }
        );
    }

    #[test]
    fn partition_keeps_valid_entries_in_drop_order() {
        let batch = vec![candidate("a.pdf"), candidate("b.exe"), candidate("c.png")];
        let partition = partition_by_type(batch);

        let names: Vec<&str> = partition
            .accepted
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, ["a.pdf", "c.png"]);
        assert_eq!(partition.rejected_count, 1);
    }

    #[test]
    fn partition_with_nothing_rejected_counts_zero() {
        let partition = partition_by_type(vec![candidate("one.docx"), candidate("two.jpeg")]);
        assert_eq!(partition.accepted.len(), 2);
        assert_eq!(partition.rejected_count, 0);
    }

    #[test]
    fn extension_match_ignores_case() {
        assert!(is_accepted_name("PHOTO.JPG"));
        assert!(is_accepted_name("scan.Pdf"));
    }

    #[test]
    fn missing_extension_is_rejected_not_a_crash() {
        assert!(!is_accepted_name("README"));
        assert!(!is_accepted_name(""));
        assert!(!is_accepted_name(".gitignore"));
    }
}
