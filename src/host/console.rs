//! Console implementation of the host surface.

use std::path::PathBuf;

use dialoguer::{Input, Select};

use crate::error::HostError;
use crate::host::{Host, RepoHandle, discover_repositories};

/// Terminal-backed host: dialoguer prompts and a `COMMIT_EDITMSG` write.
pub struct ConsoleHost {
    search_paths: Vec<PathBuf>,
}

impl ConsoleHost {
    pub fn new(search_paths: Vec<PathBuf>) -> Self {
        ConsoleHost { search_paths }
    }
}

impl Host for ConsoleHost {
    fn repositories(&self) -> Result<Vec<RepoHandle>, HostError> {
        Ok(discover_repositories(&self.search_paths))
    }

    fn select_repository<'a>(
        &self,
        repos: &'a [RepoHandle],
    ) -> Result<Option<&'a RepoHandle>, HostError> {
        let labels: Vec<String> = repos
            .iter()
            .map(|r| r.workdir.display().to_string())
            .collect();

        let choice = Select::new()
            .with_prompt("Select the repository to generate a commit message for")
            .items(&labels)
            .default(0)
            .interact_opt()
            .map_err(HostError::Prompt)?;

        Ok(choice.map(|i| &repos[i]))
    }

    fn prompt_for_input(
        &self,
        prompt: &str,
        placeholder: &str,
    ) -> Result<Option<String>, HostError> {
        let value: String = Input::new()
            .with_prompt(format!("{prompt} ({placeholder})"))
            .allow_empty(true)
            .interact_text()
            .map_err(HostError::Prompt)?;

        let value = value.trim().to_string();
        Ok(if value.is_empty() { None } else { Some(value) })
    }

    fn set_commit_message(&self, repo: &RepoHandle, message: &str) -> Result<(), HostError> {
        let path = repo.git_dir.join("COMMIT_EDITMSG");
        let mut content = message.to_string();
        if !content.ends_with('\n') {
            content.push('\n');
        }
        std::fs::write(&path, content).map_err(|source| HostError::WriteFailed { path, source })
    }

    fn notify(&self, message: &str) {
        println!("{message}");
    }
}
