//! Deckforge Gemini Client
//!
//! Outline generation backed by the Gemini `generateContent` REST API.
//!
//! The server consumes the [`OutlineGenerator`] trait rather than the
//! concrete client, so tests can substitute a scripted generator without
//! touching the network.
//!
//! # Example
//!
//! ```no_run
//! # use deckforge_gemini::{GeminiClient, OutlineGenerator, DEFAULT_MODEL};
//! # async fn example() -> Result<(), deckforge_gemini::GeminiError> {
//! let client = GeminiClient::new("api-key", DEFAULT_MODEL);
//! let outline = client.generate_outline("Raw meeting notes...").await?;
//! println!("{} ({} slides)", outline.deck_title, outline.slides.len());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod prompt;

// Re-export commonly used types
pub use error::{GeminiError, Result};

use async_trait::async_trait;
use deckforge_core::domain::outline::OutlineDraft;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::prompt::build_outline_prompt;

/// Model the hosted deployment runs against.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Turns raw source text into a structured outline draft
///
/// Non-deterministic: the same input may legitimately produce different
/// outlines across calls. Exactly one upstream call per invocation, no
/// internal retry.
#[async_trait]
pub trait OutlineGenerator: Send + Sync {
    async fn generate_outline(&self, source_text: &str) -> Result<OutlineDraft>;
}

/// HTTP client for the Gemini generateContent API
#[derive(Debug, Clone)]
pub struct GeminiClient {
    /// Base URL of the API (overridable for proxies)
    base_url: String,
    /// Model identifier (e.g. "gemini-2.5-flash")
    model: String,
    /// API key sent in the x-goog-api-key header
    api_key: String,
    /// HTTP client instance
    client: Client,
}

impl GeminiClient {
    /// Create a new client against the hosted API
    ///
    /// # Example
    /// ```
    /// use deckforge_gemini::{GeminiClient, DEFAULT_MODEL};
    ///
    /// let client = GeminiClient::new("api-key", DEFAULT_MODEL);
    /// ```
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_client(api_key, model, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use deckforge_gemini::{GeminiClient, DEFAULT_MODEL};
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(60))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = GeminiClient::with_client("api-key", DEFAULT_MODEL, http_client);
    /// ```
    pub fn with_client(
        api_key: impl Into<String>,
        model: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            model: model.into(),
            api_key: api_key.into(),
            client,
        }
    }

    /// Point the client at a different API base URL (e.g. a proxy)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Get the model this client generates with
    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl OutlineGenerator for GeminiClient {
    async fn generate_outline(&self, source_text: &str) -> Result<OutlineDraft> {
        let prompt = build_outline_prompt(source_text);

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: &prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
        };

        let response = self
            .client
            .post(self.request_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GeminiError::api_error(status.as_u16(), message));
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::ParseError(format!("malformed API response: {}", e)))?;

        let text = api_response.candidate_text();
        if text.is_empty() {
            return Err(GeminiError::EmptyResponse);
        }

        tracing::debug!("Gemini returned {} bytes of outline text", text.len());

        parse_outline(&text)
    }
}

/// Parse raw model output into an outline draft
///
/// The JSON response mime type keeps replies clean most of the time, but
/// models still wrap output in markdown fences occasionally; strip those
/// before parsing.
fn parse_outline(text: &str) -> Result<OutlineDraft> {
    let json = extract_json(text);
    serde_json::from_str(json)
        .map_err(|e| GeminiError::ParseError(format!("outline JSON did not match schema: {}", e)))
}

/// Extract JSON from text that may be wrapped in markdown code fences.
fn extract_json(text: &str) -> &str {
    let trimmed = text.trim();

    if let Some(after) = trimmed.strip_prefix("```json")
        && let Some(json) = after.strip_suffix("```")
    {
        return json.trim();
    }
    if let Some(after) = trimmed.strip_prefix("```")
        && let Some(json) = after.strip_suffix("```")
    {
        return json.trim();
    }

    trimmed
}

// =============================================================================
// Gemini Wire Types
// =============================================================================

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
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, empty when the model
    /// returned nothing (e.g. a safety block).
    fn candidate_text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}
