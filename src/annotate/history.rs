//! Git-history-backed change annotator.
//!
//! Summarizes each file from two cheap subprocess calls: `diff --numstat`
//! for the size of the current change and a short `log` for who touched the
//! file recently.

use std::path::Path;

use async_trait::async_trait;

use crate::annotate::ChangeAnnotator;
use crate::error::AnnotationError;
use crate::git::run_git;

/// Commits of history included per file.
const HISTORY_DEPTH: &str = "3";

/// Annotator that reads change size and recent commit history via git.
pub struct HistoryAnnotator {
    only_staged: bool,
}

impl HistoryAnnotator {
    pub fn new(only_staged: bool) -> Self {
        HistoryAnnotator { only_staged }
    }
}

#[async_trait]
impl ChangeAnnotator for HistoryAnnotator {
    async fn annotate_file(&self, repo_path: &Path, file: &str) -> Result<String, AnnotationError> {
        let numstat_args: &[&str] = if self.only_staged {
            &["diff", "--staged", "--numstat", "--", file]
        } else {
            &["diff", "--numstat", "--", file]
        };
        let numstat = run_git(repo_path, numstat_args).await?;

        let log = run_git(
            repo_path,
            &[
                "log",
                "-n",
                HISTORY_DEPTH,
                "--format=%h %an, %ar: %s",
                "--",
                file,
            ],
        )
        .await?;

        Ok(render_summary(parse_numstat(&numstat), &log))
    }
}

/// Parse the first numstat line into (added, removed) line counts.
///
/// Binary files report `-` for both columns and parse as `None`, as does an
/// empty diff (e.g. an untracked file).
fn parse_numstat(output: &str) -> Option<(u32, u32)> {
    let line = output.lines().find(|l| !l.trim().is_empty())?;
    let mut columns = line.split('\t');
    let added = columns.next()?.trim().parse().ok()?;
    let removed = columns.next()?.trim().parse().ok()?;
    Some((added, removed))
}

/// Render the human-readable per-file summary.
fn render_summary(counts: Option<(u32, u32)>, log: &str) -> String {
    let mut summary = match counts {
        Some((added, removed)) => {
            format!("{added} line(s) added, {removed} line(s) removed in this change.")
        }
        None => "Contents changed (binary or not yet tracked).".to_string(),
    };

    let history: Vec<&str> = log
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    if history.is_empty() {
        summary.push_str("\nNo recorded history for this file (newly added).");
    } else {
        summary.push_str("\nRecent commits:");
        for entry in history {
            summary.push_str("\n  ");
            summary.push_str(entry);
        }
    }

    summary
}
