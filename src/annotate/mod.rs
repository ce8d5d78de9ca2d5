//! Per-file change annotation.
//!
//! Each changed file gets a short human-readable summary of the nature of
//! its recent edits, which the prompt assembler feeds to the model alongside
//! the diff. The capability sits behind a trait so the pipeline is testable
//! without git history.

pub mod history;

use std::fmt::Write;
use std::path::Path;

use async_trait::async_trait;
use tracing::warn;

use crate::error::AnnotationError;

pub use history::HistoryAnnotator;

/// Produces a short summary of the recent edits to one file.
#[async_trait]
pub trait ChangeAnnotator: Send + Sync {
    async fn annotate_file(&self, repo_path: &Path, file: &str) -> Result<String, AnnotationError>;
}

/// Annotate each changed file in sequence and concatenate the results.
///
/// A failure on one file degrades to an inline "Unable to analyze" note and
/// the loop continues; annotation problems never abort a run.
pub async fn annotate_changes(
    annotator: &dyn ChangeAnnotator,
    repo_path: &Path,
    files: &[String],
) -> String {
    let mut analysis = String::new();
    for file in files {
        match annotator.annotate_file(repo_path, file).await {
            Ok(summary) => {
                let _ = write!(analysis, "File: {file}\n{summary}\n\n");
            }
            Err(e) => {
                warn!("Error analyzing file {}: {}", file, e);
                let _ = write!(analysis, "File: {file}\nUnable to analyze: {e}\n\n");
            }
        }
    }
    analysis
}
