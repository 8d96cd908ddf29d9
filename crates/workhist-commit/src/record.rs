//! Normalized commit record.

use chrono::NaiveDate;

use crate::{CommitError, CommitResult, RawLogEntry, normalize_body};

/// Date format of [`RawLogEntry::date`] (`git log --date=short`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A commit after normalization, tagged with its source repository.
///
/// Records are immutable once built; fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    date: NaiveDate,
    user: String,
    repo_name: String,
    subject: String,
    body: String,
}

impl CommitRecord {
    /// Creates a record from already-clean parts.
    ///
    /// The body is still passed through [`normalize_body`].
    ///
    /// # Errors
    ///
    /// Returns an error if `repo_name` is blank.
    pub fn new(
        date: NaiveDate,
        user: impl Into<String>,
        repo_name: impl Into<String>,
        subject: impl Into<String>,
        body: &str,
    ) -> CommitResult<Self> {
        let repo_name = repo_name.into();
        if repo_name.trim().is_empty() {
            return Err(CommitError::EmptyRepoName);
        }

        Ok(Self {
            date,
            user: user.into(),
            repo_name,
            subject: subject.into(),
            body: normalize_body(body),
        })
    }

    /// Normalizes a raw log entry and tags it with its repository name.
    ///
    /// # Errors
    ///
    /// Returns an error if the date is not a `YYYY-MM-DD` calendar date or the
    /// repository name is blank. Dateless entries are expected to have been
    /// filtered out by the producer; they fail here like any other bad date.
    pub fn normalize(raw: &RawLogEntry, repo_name: &str) -> CommitResult<Self> {
        let date_text = raw.date.trim();
        let date = NaiveDate::parse_from_str(date_text, DATE_FORMAT).map_err(|_| {
            CommitError::InvalidDate {
                date: date_text.to_string(),
                repo: repo_name.to_string(),
            }
        })?;

        Self::new(
            date,
            raw.user.trim(),
            repo_name.trim(),
            raw.subject.trim(),
            &raw.body,
        )
    }

    /// Returns the authored date.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the authored date formatted as `YYYY-MM-DD`.
    #[must_use]
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// Returns the author display name.
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Returns the display name of the source repository.
    #[must_use]
    pub fn repo_name(&self) -> &str {
        &self.repo_name
    }

    /// Returns the subject line.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns the normalized body, possibly empty.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}
