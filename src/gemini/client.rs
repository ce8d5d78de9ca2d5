//! Gemini API client implementation.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GeminiError;
use crate::gemini::cleanup::clean_message;

/// Default base URL of the Gemini generation endpoint.
pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Maximum characters of an error response body carried in an error.
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Gemini generateContent request body.
#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    top_k: u32,
    top_p: f64,
    max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 1024,
        }
    }
}

/// Gemini generateContent response body, reduced to the fields we read.
#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// A successfully generated commit message and the model that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    pub text: String,
    pub model: String,
}

/// Client for the Gemini text-generation endpoint.
pub struct GeminiClient {
    http: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Create a client against the default Gemini endpoint.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_base_url(GEMINI_API_BASE_URL, api_key, model)
    }

    /// Create a client against a custom endpoint (self-hosted proxies,
    /// tests).
    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        GeminiClient {
            http: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Make one generateContent call and return the cleaned message.
    ///
    /// Performs no retries itself; transient failures surface as retryable
    /// [`GeminiError`] variants for the retry loop to act on.
    pub async fn request_message(&self, prompt: &str) -> Result<CommitMessage, GeminiError> {
        let url = format!(
            "{}/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig::default(),
        };

        debug!("Sending generateContent request for model {}", self.model);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(GeminiError::Network)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_status(status, &body));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::InvalidResponse(e.to_string()))?;

        let raw = parsed
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .ok_or_else(|| {
                GeminiError::InvalidResponse("response contained no candidate text".to_string())
            })?;

        let text = clean_message(raw);
        if text.is_empty() {
            return Err(GeminiError::EmptyMessage);
        }

        Ok(CommitMessage {
            text,
            model: self.model.clone(),
        })
    }
}

/// Map a non-success HTTP status onto the error taxonomy.
///
/// 403 and 4xx other than 429 are terminal; 429 and 5xx are retryable.
fn classify_status(status: StatusCode, body: &str) -> GeminiError {
    match status.as_u16() {
        403 => GeminiError::Forbidden,
        429 => GeminiError::RateLimited,
        s if s >= 500 => GeminiError::ServerError { status: s },
        s => GeminiError::RequestFailed {
            status: s,
            body: body.chars().take(MAX_ERROR_BODY_LENGTH).collect(),
        },
    }
}
