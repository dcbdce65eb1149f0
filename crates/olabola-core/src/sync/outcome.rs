use crate::model::SyncReport;
use std::fmt;
use std::io;
use thiserror::Error;

/// Why a synchronisation did nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// No note carries the configured index title.
    IndexNoteMissing { title: String },
    /// The index note exists but has no fenced block with the configured tag.
    GridBlockMissing { note: String, tag: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::IndexNoteMissing { title } => {
                write!(f, "Index note \"{}\" not found", title)
            }
            SkipReason::GridBlockMissing { note, tag } => {
                write!(f, "No ```{} block found in \"{}\"", tag, note)
            }
        }
    }
}

/// Result of a completed synchronisation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Updated(SyncReport),
    /// Every movie note is already listed.
    UpToDate,
    /// Nothing was written.
    Skipped(SkipReason),
}

impl SyncOutcome {
    pub fn report(&self) -> SyncReport {
        match self {
            SyncOutcome::Updated(report) => *report,
            _ => SyncReport::default(),
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, SyncOutcome::Skipped(_))
    }

    /// Short text for a transient notice.
    pub fn message(&self) -> String {
        match self {
            SyncOutcome::Updated(report) => format!(
                "Added {} movie(s) to the grid, moved {} poster(s)",
                report.added, report.moved
            ),
            SyncOutcome::UpToDate => "All movies already in grid".to_string(),
            SyncOutcome::Skipped(reason) => reason.to_string(),
        }
    }
}

/// I/O failure in the middle of a run. Earlier steps are not rolled back.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("failed to write {path}: {source}")]
    Write { path: String, source: io::Error },

    #[error("failed to create directory {path}: {source}")]
    CreateDir { path: String, source: io::Error },

    #[error("failed to move {from} to {to}: {source}")]
    Move {
        from: String,
        to: String,
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SyncError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let updated = SyncOutcome::Updated(SyncReport { added: 2, moved: 1 });
        assert_eq!(updated.message(), "Added 2 movie(s) to the grid, moved 1 poster(s)");
        assert_eq!(updated.report(), SyncReport { added: 2, moved: 1 });

        assert_eq!(SyncOutcome::UpToDate.message(), "All movies already in grid");
        assert_eq!(SyncOutcome::UpToDate.report(), SyncReport::default());

        let skipped = SyncOutcome::Skipped(SkipReason::IndexNoteMissing {
            title: "list of all movies".to_string(),
        });
        assert!(skipped.is_warning());
        assert_eq!(skipped.message(), "Index note \"list of all movies\" not found");
    }
}
