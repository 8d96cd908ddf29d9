//! Commit log retrieval through the `git` command line.

use std::path::Path;
use std::process::Command;

use tracing::{debug, trace};
use workhist_commit::RawLogEntry;

use crate::{GitError, GitResult};

/// Separates the fields of one commit in `git log` output.
///
/// The separators are control characters around a fixed random token. A
/// commit message that contains the exact sequence would split wrongly; that
/// collision is accepted.
pub const FIELD_SEPARATOR: &str = "\u{1f}wh:f7c2a91e\u{1f}";

/// Terminates one commit in `git log` output. See [`FIELD_SEPARATOR`].
pub const RECORD_SEPARATOR: &str = "\u{1e}wh:3b8d04c6\u{1e}";

/// Placeholders for date, author, decoration, subject and body.
const PLACEHOLDERS: [&str; 5] = ["%ad", "%an", "%D", "%s", "%b"];

/// Parameters of a log fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogQuery {
    /// Only commits whose author matches this pattern.
    pub author: Option<String>,

    /// Lookback window in months.
    pub months: u32,
}

impl LogQuery {
    /// Creates a query for all authors over the last `months` months.
    #[must_use]
    pub fn new(months: u32) -> Self {
        Self {
            author: None,
            months,
        }
    }

    /// Restricts the query to one author.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Builds the `git` arguments for this query.
    ///
    /// Signature and color output are switched off so user settings such as
    /// `log.showSignature` cannot inject lines into the formatted records.
    fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "log".to_string(),
            "--no-show-signature".to_string(),
            "--no-color".to_string(),
            "--all".to_string(),
            "--reverse".to_string(),
            "--date=short".to_string(),
            format!("--since={}.months.ago", self.months),
            format!("--pretty=format:{}", pretty_format()),
        ];
        if let Some(author) = &self.author {
            args.push(format!("--author={author}"));
        }
        args
    }
}

fn pretty_format() -> String {
    format!("{}{RECORD_SEPARATOR}", PLACEHOLDERS.join(FIELD_SEPARATOR))
}

/// Fetches the commits of the repository at `path`, oldest first.
///
/// `git` runs with `path` as its working directory; the working directory
/// of this process is left alone.
///
/// # Errors
///
/// Returns an error if `path` is not a directory, `git` cannot be started, or
/// `git log` exits unsuccessfully (for instance when `path` is not a
/// repository).
pub fn fetch_log(path: impl AsRef<Path>, query: &LogQuery) -> GitResult<Vec<RawLogEntry>> {
    let path = path.as_ref();
    if !path.is_dir() {
        return Err(GitError::RepoNotFound(path.to_path_buf()));
    }

    let args = query.to_args();
    debug!(?path, months = query.months, author = ?query.author, "running git log");

    let output = Command::new("git")
        .args(&args)
        .current_dir(path)
        .output()
        .map_err(GitError::Exec)?;

    if !output.status.success() {
        return Err(GitError::CommandFailed {
            path: path.to_path_buf(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let entries = parse_log_output(&String::from_utf8_lossy(&output.stdout));
    debug!(?path, count = entries.len(), "fetched commits");
    Ok(entries)
}

/// Splits `git log` output produced with the private separators into entries.
///
/// Records whose date field is blank are dropped, which also discards the
/// empty tail after the last record separator.
pub fn parse_log_output(output: &str) -> Vec<RawLogEntry> {
    output
        .split(RECORD_SEPARATOR)
        .map(|record| record.trim_start_matches(['\r', '\n']))
        .map(|record| RawLogEntry::from_fields(record.split(FIELD_SEPARATOR)))
        .filter(|entry| {
            let keep = !entry.is_dateless();
            if !keep {
                trace!(subject = %entry.subject, "dropping dateless record");
            }
            keep
        })
        .collect()
}
