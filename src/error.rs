//! Error types for gemmit modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from git subprocess operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git executable not found. Install git and make sure it is on PATH")]
    NotInstalled,

    #[error("Failed to spawn git process: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("git process timed out after {0} seconds")]
    Timeout(u64),

    #[error("git {command} exited with code {code}: {stderr}")]
    CommandFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("{}", if *staged { "No staged changes detected." } else { "No changes detected." })]
    NoChanges { staged: bool },
}

/// Errors from the Gemini generation client.
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("Access forbidden (HTTP 403). Check your API key")]
    Forbidden,

    #[error("Rate limited by the Gemini API (HTTP 429). Try again later")]
    RateLimited,

    #[error("Gemini API server error (HTTP {status})")]
    ServerError { status: u16 },

    #[error("Gemini API rejected the request (HTTP {status}): {body}")]
    RequestFailed { status: u16, body: String },

    #[error("Network error calling the Gemini API: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Gemini returned an unusable response: {0}")]
    InvalidResponse(String),

    #[error("Generated commit message is empty")]
    EmptyMessage,

    #[error("All retry attempts failed: {0}")]
    RetriesExhausted(#[source] Box<GeminiError>),
}

impl GeminiError {
    /// Whether another attempt may succeed.
    ///
    /// Retryable: HTTP 429, HTTP 5xx, and transport failures with no
    /// response. Everything else (403, other 4xx, unusable or empty
    /// generations) is terminal.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GeminiError::RateLimited | GeminiError::ServerError { .. } | GeminiError::Network(_)
        )
    }
}

/// Errors from per-file change annotation.
#[derive(Error, Debug)]
pub enum AnnotationError {
    #[error("Failed to inspect file history: {0}")]
    Git(#[from] GitError),
}

/// Errors from the host surface (discovery, selection, commit input).
#[derive(Error, Debug)]
pub enum HostError {
    #[error("No git repository found. Run gemmit from within a git repository")]
    NoRepositoryFound,

    #[error("No repository selected")]
    NoRepositorySelected,

    #[error("Interactive prompt failed: {0}")]
    Prompt(#[source] dialoguer::Error),

    #[error("Failed to write commit message to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ParseFailed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("No API key configured. Set the GEMINI_API_KEY environment variable")]
    MissingApiKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_changes_message_distinguishes_staged() {
        assert_eq!(
            GitError::NoChanges { staged: true }.to_string(),
            "No staged changes detected."
        );
        assert_eq!(
            GitError::NoChanges { staged: false }.to_string(),
            "No changes detected."
        );
    }

    #[test]
    fn test_retryable_classification() {
        assert!(GeminiError::RateLimited.is_retryable());
        assert!(GeminiError::ServerError { status: 503 }.is_retryable());
        assert!(!GeminiError::Forbidden.is_retryable());
        assert!(
            !GeminiError::RequestFailed {
                status: 404,
                body: String::new()
            }
            .is_retryable()
        );
        assert!(!GeminiError::EmptyMessage.is_retryable());
        assert!(!GeminiError::InvalidResponse("no candidates".into()).is_retryable());
        assert!(!GeminiError::RetriesExhausted(Box::new(GeminiError::RateLimited)).is_retryable());
    }

    #[test]
    fn test_exhausted_preserves_source() {
        let err = GeminiError::RetriesExhausted(Box::new(GeminiError::ServerError { status: 502 }));
        assert!(err.to_string().contains("HTTP 502"));
    }
}
