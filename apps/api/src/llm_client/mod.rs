/// Completion Client. The single point of entry for all Gemini calls in MarketPulse.
///
/// ARCHITECTURAL RULE: No other module may call the generative-language API directly.
/// All completion requests MUST go through this module.
///
/// Each call is a single attempt: no retry, no backoff, no timeout, no conversation memory.
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

pub mod prompts;

/// Substituted when the response envelope lacks `candidates[0].content.parts[0].text`.
pub const NO_RESPONSE_SENTINEL: &str = "No response";

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion prompt is empty")]
    EmptyPrompt,

    #[error("HTTP error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error (status {status}): {body}")]
    Transport { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A prompt ready to send. Style directives are prepended verbatim, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    prompt_text: String,
    style_directives: Vec<String>,
}

impl CompletionRequest {
    pub fn new(prompt_text: impl Into<String>) -> Result<Self, CompletionError> {
        let prompt_text = prompt_text.into();
        if prompt_text.trim().is_empty() {
            return Err(CompletionError::EmptyPrompt);
        }
        Ok(Self {
            prompt_text,
            style_directives: Vec::new(),
        })
    }

    /// Adds a directive; duplicates are ignored.
    pub fn with_directive(mut self, directive: impl Into<String>) -> Self {
        let directive = directive.into();
        if !self.style_directives.contains(&directive) {
            self.style_directives.push(directive);
        }
        self
    }

    pub fn prompt_text(&self) -> &str {
        &self.prompt_text
    }

    pub fn style_directives(&self) -> &[String] {
        &self.style_directives
    }

    /// The exact text sent to the model.
    pub fn render(&self) -> String {
        if self.style_directives.is_empty() {
            return self.prompt_text.clone();
        }
        format!("{}\n\n{}", self.style_directives.join(" "), self.prompt_text)
    }
}

/// Raw model text for one call. Discarded once extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResult {
    pub raw_text: String,
}

impl CompletionResult {
    pub fn is_sentinel(&self) -> bool {
        self.raw_text == NO_RESPONSE_SENTINEL
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

// Every level is optional so a partial envelope decodes instead of failing.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, if every step of the path exists.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}

/// The single completion client used by all pages.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl LlmClient {
    pub fn new(
        api_key: impl Into<String>,
        base_url: &str,
        model: &str,
    ) -> Result<Self, CompletionError> {
        Ok(Self {
            client: Client::builder().build()?,
            api_key: api_key.into(),
            endpoint: format!(
                "{}/models/{}:generateContent",
                base_url.trim_end_matches('/'),
                model
            ),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one prompt and returns the raw text of the first candidate.
    /// A non-success status fails with the endpoint's raw error body.
    pub async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResult, CompletionError> {
        debug!(
            prompt_chars = request.prompt_text().len(),
            directives = request.style_directives().len(),
            "Sending completion request"
        );

        let text = request.render();
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: &text }],
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Completion API returned {}: {}", status, body);
            return Err(CompletionError::Transport {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let envelope: GenerateContentResponse = serde_json::from_slice(&bytes)?;

        let raw_text = match envelope.first_text() {
            Some(text) => text.to_string(),
            None => {
                debug!("Completion envelope had no text part, using sentinel");
                NO_RESPONSE_SENTINEL.to_string()
            }
        };

        debug!("Completion succeeded: {} chars", raw_text.len());
        Ok(CompletionResult { raw_text })
    }
}
