//! Git error types.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Git-related errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Repository directory does not exist.
    #[error("repository not found at {0}")]
    RepoNotFound(PathBuf),

    /// Not a git repository.
    #[error("not a git repository: {0}")]
    NotARepo(PathBuf),

    /// No remote is configured.
    #[error("no remote configured for {0}")]
    NoRemote(PathBuf),

    /// The `git` executable could not be started.
    #[error("failed to execute git: {0}")]
    Exec(#[source] std::io::Error),

    /// `git` ran but exited unsuccessfully.
    #[error("git log failed in {path} ({status}): {stderr}")]
    CommandFailed {
        /// Repository the command ran in.
        path: PathBuf,
        /// Exit status of the command.
        status: ExitStatus,
        /// Captured standard error, trimmed.
        stderr: String,
    },

    /// Git2 error.
    #[error("git error: {0}")]
    Git2(#[from] git2::Error),
}

/// Result type for git operations.
pub type GitResult<T> = Result<T, GitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_not_found_display() {
        let err = GitError::RepoNotFound(PathBuf::from("/tmp/repo"));
        assert_eq!(err.to_string(), "repository not found at /tmp/repo");
    }

    #[test]
    fn test_not_a_repo_display() {
        let err = GitError::NotARepo(PathBuf::from("/tmp/not-git"));
        assert_eq!(err.to_string(), "not a git repository: /tmp/not-git");
    }

    #[test]
    fn test_no_remote_display() {
        let err = GitError::NoRemote(PathBuf::from("/tmp/repo"));
        assert_eq!(err.to_string(), "no remote configured for /tmp/repo");
    }

    #[test]
    fn test_exec_display() {
        let err = GitError::Exec(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "No such file or directory",
        ));
        assert_eq!(
            err.to_string(),
            "failed to execute git: No such file or directory"
        );
    }

    #[test]
    fn test_error_is_debug() {
        let err = GitError::NoRemote(PathBuf::from("/x"));
        let debug = format!("{err:?}");
        assert!(debug.contains("NoRemote"));
    }
}
