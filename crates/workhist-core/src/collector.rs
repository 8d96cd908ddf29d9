//! Collection of commit records across repositories.

use std::path::{Path, PathBuf};

use tracing::{info, warn};
use workhist_commit::{CommitRecord, CommitResult, RawLogEntry};
use workhist_config::FetchErrorPolicy;
use workhist_git::{GitResult, LogQuery};

use crate::{CoreError, CoreResult, Timeline};

/// Source of repository names and raw commit logs.
pub trait LogSource {
    /// Returns the display name of the repository at `path`. Never fails.
    fn repo_name(&self, path: &Path) -> String;

    /// Fetches the raw log entries of the repository at `path`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be retrieved.
    fn fetch(&self, path: &Path, query: &LogQuery) -> GitResult<Vec<RawLogEntry>>;
}

/// [`LogSource`] backed by the local `git` installation.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitLogSource;

impl LogSource for GitLogSource {
    fn repo_name(&self, path: &Path) -> String {
        workhist_git::resolve_repo_name(path)
    }

    fn fetch(&self, path: &Path, query: &LogQuery) -> GitResult<Vec<RawLogEntry>> {
        workhist_git::fetch_log(path, query)
    }
}

/// Gathers the records of every configured repository into a [`Timeline`].
pub struct Collector {
    source: Box<dyn LogSource>,
    policy: FetchErrorPolicy,
}

impl Collector {
    /// Creates a collector reading from `source`.
    #[must_use]
    pub fn new(source: Box<dyn LogSource>, policy: FetchErrorPolicy) -> Self {
        Self { source, policy }
    }

    /// Resolves, fetches and normalizes each repository in order, then merges
    /// the results.
    ///
    /// # Errors
    ///
    /// Returns an error if a fetch fails under [`FetchErrorPolicy::Abort`], or
    /// if a fetched record carries a malformed date.
    pub fn collect(&self, repos: &[PathBuf], query: &LogQuery) -> CoreResult<Timeline> {
        let mut per_repo = Vec::with_capacity(repos.len());

        for path in repos {
            let name = self.source.repo_name(path);
            let entries = match self.source.fetch(path, query) {
                Ok(entries) => entries,
                Err(err) if self.policy == FetchErrorPolicy::Skip => {
                    warn!(?path, repo = %name, error = %err, "skipping repository");
                    continue;
                }
                Err(err) => {
                    return Err(CoreError::Fetch {
                        path: path.clone(),
                        source: err,
                    });
                }
            };

            let records = entries
                .iter()
                .map(|raw| CommitRecord::normalize(raw, &name))
                .collect::<CommitResult<Vec<_>>>()?;
            info!(repo = %name, commits = records.len(), "collected commits");
            per_repo.push(records);
        }

        Ok(Timeline::merge(per_repo))
    }
}
