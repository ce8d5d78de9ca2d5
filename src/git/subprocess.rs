//! Git subprocess spawning.
//!
//! All version-control data flows through [`run_git`], the single "run an
//! external command, capture stdout/stderr/exit code" primitive. Using
//! `Command::output()` means process handles are reaped on every exit path,
//! including the timeout one.

use std::env;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tokio::time::timeout;
use tracing::warn;

use crate::error::GitError;

/// Default timeout for git subprocess execution (1 minute).
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Environment variable to override the default timeout.
const TIMEOUT_ENV_VAR: &str = "GEMMIT_GIT_TIMEOUT";

/// Get the configured timeout duration.
///
/// Reads from GEMMIT_GIT_TIMEOUT if set, otherwise uses the default of
/// 60 seconds. Logs a warning if the variable holds an invalid value.
fn get_timeout() -> Duration {
    match env::var(TIMEOUT_ENV_VAR) {
        Ok(v) if !v.is_empty() => match v.parse::<u64>() {
            Ok(secs) => Duration::from_secs(secs),
            Err(_) => {
                warn!(
                    "Invalid {} value '{}', using default {}s",
                    TIMEOUT_ENV_VAR, v, DEFAULT_TIMEOUT_SECS
                );
                Duration::from_secs(DEFAULT_TIMEOUT_SECS)
            }
        },
        _ => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    }
}

/// Check that the git binary is installed and runnable.
///
/// Uses the `which` crate for cross-platform executable detection, then
/// verifies the binary actually executes.
pub async fn check_git_installed() -> Result<(), GitError> {
    if which::which("git").is_err() {
        return Err(GitError::NotInstalled);
    }

    let version_check = Command::new("git")
        .arg("--version")
        .output()
        .await
        .map_err(GitError::SpawnFailed)?;

    if !version_check.status.success() {
        return Err(GitError::NotInstalled);
    }

    Ok(())
}

/// Run git with the given arguments inside `repo_path` and return stdout.
///
/// Non-zero exit codes become [`GitError::CommandFailed`] carrying the exit
/// code and captured stderr. Output is decoded lossily so non-UTF8 bytes in
/// diffs never abort the run.
pub async fn run_git(repo_path: &Path, args: &[&str]) -> Result<String, GitError> {
    let timeout_duration = get_timeout();
    let timeout_secs = timeout_duration.as_secs();

    let output = timeout(
        timeout_duration,
        Command::new("git")
            .args(args)
            .current_dir(repo_path)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output(),
    )
    .await
    .map_err(|_| GitError::Timeout(timeout_secs))?
    .map_err(GitError::SpawnFailed)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let code = output.status.code().unwrap_or(-1);
        return Err(GitError::CommandFailed {
            command: args.join(" "),
            code,
            stderr,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
