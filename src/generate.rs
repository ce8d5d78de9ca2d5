//! The generation pipeline: discover → diff → annotate → prompt → generate
//! → write.
//!
//! A single linear flow. Every failing step aborts the run and surfaces one
//! contextual error; the only locally recovered failure is per-file
//! annotation, which degrades to an inline note inside
//! [`annotate_changes`](crate::annotate::annotate_changes).

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::annotate::{self, ChangeAnnotator};
use crate::config::Settings;
use crate::error::HostError;
use crate::gemini::{self, GeminiClient};
use crate::git;
use crate::host::{Host, RepoHandle};
use crate::prompt;

/// Generate a commit message for the selected repository and write it into
/// the commit input (or print it when `dry_run` is set).
pub async fn generate_and_set(
    settings: &Settings,
    client: &GeminiClient,
    host: &dyn Host,
    annotator: &dyn ChangeAnnotator,
    dry_run: bool,
) -> Result<()> {
    let repos = host
        .repositories()
        .context("Failed to discover git repositories")?;

    let repo: &RepoHandle = match repos.as_slice() {
        [] => return Err(HostError::NoRepositoryFound.into()),
        [only] => only,
        _ => host
            .select_repository(&repos)
            .context("Repository selection failed")?
            .ok_or(HostError::NoRepositorySelected)?,
    };

    info!(
        "Generating commit message for {}{}",
        repo.workdir.display(),
        if settings.only_staged {
            " (staged changes only)"
        } else {
            ""
        }
    );

    let diff = git::get_diff(&repo.workdir, settings.only_staged)
        .await
        .context("Failed to collect diff")?;
    debug!("Diff length: {} characters", diff.len());

    let changed_files = git::get_changed_files(&repo.workdir, settings.only_staged)
        .await
        .context("Failed to list changed files")?;
    debug!("Changed files: {}", changed_files.len());

    let blame_analysis = annotate::annotate_changes(annotator, &repo.workdir, &changed_files).await;

    let instructions = prompt::instructions_for(
        settings.language,
        settings.message_length,
        &settings.custom_instructions,
    );
    let prompt_text =
        prompt::assemble_prompt(&instructions, &prompt::truncate_diff(&diff), &blame_analysis);

    let message = gemini::generate_commit_message(client, &prompt_text)
        .await
        .context("Failed to generate commit message")?;

    let mut final_message = message.text.clone();
    if settings.prompt_for_refs
        && let Some(refs) = host
            .prompt_for_input(
                "Enter references (e.g., issue numbers) to be added below the commit message",
                "e.g., #123, JIRA-456",
            )
            .context("References prompt failed")?
    {
        final_message.push_str("\n\n");
        final_message.push_str(&refs);
    }

    if dry_run {
        host.notify(&final_message);
        host.notify(&format!(
            "Dry run: generated using {} model, nothing written.",
            message.model
        ));
    } else {
        host.set_commit_message(repo, &final_message)
            .context("Failed to set commit message")?;
        host.notify(&format!(
            "Commit message set in selected Git repository. Generated using {} model.",
            message.model
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::error::AnnotationError;

    /// Host fake: canned repositories and selection, records writes.
    struct FakeHost {
        repos: Vec<RepoHandle>,
        select: Option<usize>,
        written: Mutex<Option<String>>,
    }

    impl FakeHost {
        fn with_repos(repos: Vec<RepoHandle>, select: Option<usize>) -> Self {
            FakeHost {
                repos,
                select,
                written: Mutex::new(None),
            }
        }
    }

    impl Host for FakeHost {
        fn repositories(&self) -> Result<Vec<RepoHandle>, HostError> {
            Ok(self.repos.clone())
        }

        fn select_repository<'a>(
            &self,
            repos: &'a [RepoHandle],
        ) -> Result<Option<&'a RepoHandle>, HostError> {
            Ok(self.select.map(|i| &repos[i]))
        }

        fn prompt_for_input(&self, _: &str, _: &str) -> Result<Option<String>, HostError> {
            Ok(None)
        }

        fn set_commit_message(&self, _repo: &RepoHandle, message: &str) -> Result<(), HostError> {
            *self.written.lock().unwrap() = Some(message.to_string());
            Ok(())
        }

        fn notify(&self, _message: &str) {}
    }

    struct NoopAnnotator;

    #[async_trait]
    impl ChangeAnnotator for NoopAnnotator {
        async fn annotate_file(&self, _: &Path, file: &str) -> Result<String, AnnotationError> {
            Ok(format!("summary of {file}"))
        }
    }

    fn unused_client() -> GeminiClient {
        // Never reached in the abort-path tests below.
        GeminiClient::with_base_url("http://127.0.0.1:9/unreachable", "key", "model")
    }

    fn handle(dir: &Path) -> RepoHandle {
        RepoHandle {
            workdir: dir.to_path_buf(),
            git_dir: dir.join(".git"),
        }
    }

    #[tokio::test]
    async fn test_no_repositories_aborts() {
        let host = FakeHost::with_repos(vec![], None);
        let err = generate_and_set(
            &Settings::default(),
            &unused_client(),
            &host,
            &NoopAnnotator,
            false,
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<HostError>(),
            Some(HostError::NoRepositoryFound)
        ));
    }

    #[tokio::test]
    async fn test_selection_cancel_aborts() {
        let dir_a = tempfile::tempdir().unwrap();
        let dir_b = tempfile::tempdir().unwrap();
        let host = FakeHost::with_repos(vec![handle(dir_a.path()), handle(dir_b.path())], None);

        let err = generate_and_set(
            &Settings::default(),
            &unused_client(),
            &host,
            &NoopAnnotator,
            false,
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<HostError>(),
            Some(HostError::NoRepositorySelected)
        ));
    }

    #[tokio::test]
    async fn test_clean_worktree_aborts_with_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let repo = git2::Repository::init(dir.path()).unwrap();
        let mut config = repo.config().unwrap();
        config.set_str("user.name", "Test User").unwrap();
        config.set_str("user.email", "test@example.com").unwrap();

        let host = FakeHost::with_repos(vec![handle(dir.path())], None);
        let err = generate_and_set(
            &Settings::default(),
            &unused_client(),
            &host,
            &NoopAnnotator,
            false,
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<crate::error::GitError>(),
            Some(crate::error::GitError::NoChanges { staged: false })
        ));
        assert!(host.written.lock().unwrap().is_none());
    }
}
