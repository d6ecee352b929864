//! Errors produced by the cleaning pipeline.

use std::io;
use std::path::PathBuf;

use textprep_types::RecordError;
use thiserror::Error;

/// Failure of a cleaning run. The run aborts on the first error.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The source file could not be opened.
    #[error("cannot open source {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The source has no rows, so no columns can be assigned.
    #[error("source {} contains no rows", .path.display())]
    EmptySource { path: PathBuf },

    /// A row could not be mapped onto the four source columns.
    #[error(transparent)]
    Record(#[from] RecordError),

    /// Malformed CSV, or an I/O failure inside the CSV layer.
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    /// The destination file could not be created.
    #[error("cannot create destination {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing or flushing the destination failed.
    #[error("write failed: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
