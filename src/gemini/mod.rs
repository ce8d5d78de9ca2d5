//! Remote generation client: Gemini HTTP calls, retry governance, and
//! response cleanup.

pub mod cleanup;
pub mod client;
pub mod retry;

use tracing::debug;

use crate::error::GeminiError;

pub use cleanup::clean_message;
pub use client::{CommitMessage, GEMINI_API_BASE_URL, GeminiClient};

/// Generate a commit message for `prompt`, retrying transient failures with
/// exponential backoff.
pub async fn generate_commit_message(
    client: &GeminiClient,
    prompt: &str,
) -> Result<CommitMessage, GeminiError> {
    retry::run_with_retry(|attempt| {
        debug!("Attempt {}: sending request to the Gemini API", attempt);
        client.request_message(prompt)
    })
    .await
}
