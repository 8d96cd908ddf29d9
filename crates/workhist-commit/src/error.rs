//! Commit error types.

use thiserror::Error;

/// Commit normalization errors.
#[derive(Debug, Error)]
pub enum CommitError {
    /// The date field is present but is not a `YYYY-MM-DD` calendar date.
    #[error("invalid commit date {date:?} in repository {repo}")]
    InvalidDate {
        /// The offending date text.
        date: String,
        /// The repository the record came from.
        repo: String,
    },

    /// The repository display name is empty.
    #[error("commit record has an empty repository name")]
    EmptyRepoName,
}

/// Result type for commit operations.
pub type CommitResult<T> = Result<T, CommitError>;
