//! Core error types.

use std::path::PathBuf;

use thiserror::Error;

/// Core-related errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Fetching the log of one repository failed.
    #[error("failed to fetch commits from {path}: {source}")]
    Fetch {
        /// Repository path as configured.
        path: PathBuf,
        /// Underlying git error.
        #[source]
        source: workhist_git::GitError,
    },

    /// A fetched record violates the commit data contract.
    #[error("commit error: {0}")]
    Commit(#[from] workhist_commit::CommitError),

    /// IO error while writing the report.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
