//! Error types for the batch run and the interactive session.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Unrecoverable failures during a batch run.
///
/// Any of these terminates the run without producing a summary — correctness
/// of the summary requires every pair to have been read, so there is no retry
/// and no partial-result mode.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The reference folder could not be listed.
    #[error("cannot list reference files in {}: {source}", .dir.display())]
    Enumeration {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The reference folder contains zero numbered files.
    #[error("no numbered files found in {}", .0.display())]
    EmptyBatch(PathBuf),

    /// A specific numbered file could not be read.
    #[error("failed reading file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Recoverable operator-input errors in the interactive loop.
///
/// Reported and followed by a re-prompt; never terminates the session and
/// never affects the exit code.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// The requested file number is not in `[1, max]` (or is not a number).
    #[error("Invalid file number. Please enter a number between 1 and {max}")]
    IdentifierOutOfRange { max: usize },

    /// The display-type answer is neither of the two known values.
    #[error("Invalid display type")]
    UnknownDisplayMode,
}
