//! Version-control adapter: diff and file-status collection via the git
//! subprocess.

pub mod subprocess;

use std::path::Path;

use tracing::debug;

use crate::error::GitError;

pub use subprocess::{check_git_installed, run_git};

/// Get the unified diff for the working tree, or for the index when
/// `only_staged` is set.
///
/// Fails with [`GitError::NoChanges`] when the diff is empty after trimming,
/// so callers never reach the remote model with nothing to describe.
pub async fn get_diff(repo_path: &Path, only_staged: bool) -> Result<String, GitError> {
    debug!(
        "Getting diff for {}, only_staged: {}",
        repo_path.display(),
        only_staged
    );

    let args: &[&str] = if only_staged {
        &["diff", "--staged"]
    } else {
        &["diff"]
    };
    let diff = run_git(repo_path, args).await?;

    if diff.trim().is_empty() {
        return Err(GitError::NoChanges {
            staged: only_staged,
        });
    }

    Ok(diff)
}

/// List changed file paths from `git status --porcelain`.
///
/// With `only_staged` set, only lines whose index status is Modified, Added,
/// Deleted, or Renamed are kept.
pub async fn get_changed_files(
    repo_path: &Path,
    only_staged: bool,
) -> Result<Vec<String>, GitError> {
    let output = run_git(repo_path, &["status", "--porcelain"]).await?;
    Ok(parse_status_lines(&output, only_staged))
}

/// Parse porcelain status output into file paths.
///
/// Each line is `XY <path>`: X is the index status, Y the worktree status,
/// and the path starts at byte offset 3. Staged-only filtering keys off the
/// index column.
pub fn parse_status_lines(output: &str, only_staged: bool) -> Vec<String> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter(|line| {
            !only_staged || matches!(line.as_bytes().first(), Some(b'M' | b'A' | b'D' | b'R'))
        })
        .filter_map(|line| line.get(3..))
        .map(|path| path.trim().to_string())
        .filter(|path| !path.is_empty())
        .collect()
}
