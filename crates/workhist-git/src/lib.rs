//! Git access layer for Workhist.
//!
//! This crate provides the two Git operations the report needs:
//! - Repository display names, read from the configured remote
//! - Commit log retrieval through the `git` command line

mod error;
mod log;
mod repository;

pub use error::{GitError, GitResult};
pub use log::{FIELD_SEPARATOR, LogQuery, RECORD_SEPARATOR, fetch_log, parse_log_output};
pub use repository::{Repository, resolve_repo_name};
