//! Git repository wrapper and display-name resolution.

use std::path::Path;

use git2::Repository as Git2Repo;
use tracing::debug;

use crate::{GitError, GitResult};

/// Characters stripped from both ends of a remote URL and the derived name.
const STRIP_CHARS: &[char] = &[' ', '\t', '\r', '\n', '"', '\''];

/// Name of the remote consulted first.
const PRIMARY_REMOTE: &str = "origin";

/// A Git repository wrapper.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Opens the repository containing the given path, searching parent
    /// directories like `git` itself does.
    ///
    /// # Errors
    ///
    /// Returns an error if neither the path nor any parent is a Git repository.
    pub fn open(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = path.as_ref();
        let inner =
            Git2Repo::discover(path).map_err(|_| GitError::NotARepo(path.to_path_buf()))?;
        Ok(Self { inner })
    }

    /// Returns the repository root path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.inner.workdir().unwrap_or_else(|| self.inner.path())
    }

    /// Returns the URL of the `origin` remote, or of the first remote when
    /// there is no `origin`.
    ///
    /// # Errors
    ///
    /// Returns an error if no remote with a URL is configured.
    pub fn remote_url(&self) -> GitResult<String> {
        if let Ok(remote) = self.inner.find_remote(PRIMARY_REMOTE)
            && let Some(url) = remote.url()
        {
            return Ok(url.to_string());
        }

        let remotes = self.inner.remotes()?;
        remotes
            .iter()
            .flatten()
            .find_map(|name| {
                let remote = self.inner.find_remote(name).ok()?;
                remote.url().map(String::from)
            })
            .ok_or_else(|| GitError::NoRemote(self.path().to_path_buf()))
    }

    /// Returns the display name derived from the remote URL.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no remote or its URL yields an empty name.
    pub fn remote_name(&self) -> GitResult<String> {
        let url = self.remote_url()?;
        name_from_url(&url).ok_or_else(|| GitError::NoRemote(self.path().to_path_buf()))
    }
}

/// Resolves the short display name of the repository at `path`.
///
/// Uses the final segment of the remote URL without its `.git` suffix. Any
/// failure falls back to the final segment of `path` itself, so this never
/// fails and never returns an empty name.
pub fn resolve_repo_name(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    match Repository::open(path).and_then(|repo| repo.remote_name()) {
        Ok(name) => name,
        Err(err) => {
            debug!(?path, error = %err, "using folder name as repository name");
            folder_name(path)
        }
    }
}

/// Extracts the repository name from a remote URL.
///
/// Handles `https://host/owner/name.git`, `git@host:name.git` and local paths.
fn name_from_url(url: &str) -> Option<String> {
    let url = url.trim_matches(STRIP_CHARS).trim_end_matches('/');
    let segment = url.rsplit(['/', ':']).next().unwrap_or(url);
    let name = segment.strip_suffix(".git").unwrap_or(segment);
    let name = name.trim_matches(STRIP_CHARS);

    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Returns the final segment of `path`, or the whole path when it has none.
fn folder_name(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    if name.is_empty() { ".".to_string() } else { name }
}
