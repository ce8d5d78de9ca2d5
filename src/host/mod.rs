//! Host surface: repository discovery and selection, interactive input, and
//! the commit-message input the pipeline writes into.
//!
//! The orchestrator only talks to the narrow [`Host`] trait, so it can run
//! against a fake in tests and against [`ConsoleHost`] in the binary.

pub mod console;

use std::path::PathBuf;

use git2::Repository;
use tracing::debug;

use crate::error::HostError;

pub use console::ConsoleHost;

/// A discovered git repository the host can write a commit message into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoHandle {
    /// Working-tree root.
    pub workdir: PathBuf,
    /// The repository's `.git` directory (holds `COMMIT_EDITMSG`).
    pub git_dir: PathBuf,
}

/// Narrow capability interface over the host environment.
pub trait Host {
    /// All repositories visible to the host.
    fn repositories(&self) -> Result<Vec<RepoHandle>, HostError>;

    /// Ask the user to pick one repository. `Ok(None)` means the user
    /// cancelled.
    fn select_repository<'a>(
        &self,
        repos: &'a [RepoHandle],
    ) -> Result<Option<&'a RepoHandle>, HostError>;

    /// Free-text prompt. `Ok(None)` means the user dismissed it or entered
    /// nothing.
    fn prompt_for_input(&self, prompt: &str, placeholder: &str)
    -> Result<Option<String>, HostError>;

    /// Put the final message into the repository's commit input.
    fn set_commit_message(&self, repo: &RepoHandle, message: &str) -> Result<(), HostError>;

    /// Surface an informational message to the user.
    fn notify(&self, message: &str);
}

/// Discover repositories enclosing the given search paths.
///
/// Each path is resolved with `git2::Repository::discover`, which walks
/// upward to the enclosing repository. Duplicates (several paths inside one
/// repo) collapse to a single handle; bare repositories are skipped since
/// they have no working tree to diff.
pub fn discover_repositories(search_paths: &[PathBuf]) -> Vec<RepoHandle> {
    let mut found: Vec<RepoHandle> = Vec::new();
    for path in search_paths {
        match Repository::discover(path) {
            Ok(repo) => {
                let Some(workdir) = repo.workdir() else {
                    debug!("Skipping bare repository at {}", repo.path().display());
                    continue;
                };
                let handle = RepoHandle {
                    workdir: workdir.to_path_buf(),
                    git_dir: repo.path().to_path_buf(),
                };
                if !found.contains(&handle) {
                    found.push(handle);
                }
            }
            Err(e) => {
                debug!("No repository found from {}: {}", path.display(), e);
            }
        }
    }
    found
}
