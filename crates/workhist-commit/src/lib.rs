//! Commit types for Workhist.
//!
//! This crate provides the commit types used throughout Workhist:
//! - [`RawLogEntry`]: the text fields of one commit as emitted by `git log`
//! - [`CommitRecord`]: a commit after normalization, tagged with its repository

mod error;
mod normalize;
mod raw;
mod record;

pub use error::{CommitError, CommitResult};
pub use normalize::normalize_body;
pub use raw::RawLogEntry;
pub use record::{CommitRecord, DATE_FORMAT};
