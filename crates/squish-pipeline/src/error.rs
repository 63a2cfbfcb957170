//! Failures a run can surface.
//!
//! Only the orchestration layer fails: the text transforms underneath
//! degrade silently on malformed fragments by design. Every variant
//! carries the offending path, and a failure on one artifact aborts the
//! whole run — rewriting must never proceed against partially processed
//! inputs.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by a [`crate::Session`] run.
#[derive(Debug, Error)]
pub enum Error {
    /// A configured input file does not exist.
    #[error("input file does not exist: {}", path.display())]
    MissingInput {
        /// The configured path.
        path: PathBuf,
    },

    /// Reading an input failed.
    #[error("failed to read {}", path.display())]
    Read {
        /// The input path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Writing an output artifact failed.
    #[error("failed to write {}", path.display())]
    Write {
        /// The output path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Preparing an output location failed.
    #[error("failed to prepare output location {}", path.display())]
    Prepare {
        /// The output directory or file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Result alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;
