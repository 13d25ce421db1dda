//! Completion service wire types and errors

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Model used when the configuration does not pin another one
pub const DEFAULT_MODEL: &str = "gpt-4o-mini-2024-07-18";

// ============================================================================
// Sampling
// ============================================================================

/// Fixed sampling parameters sent with every completion request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub n: u32,
    pub seed: i64,
    pub temperature: f64,
    pub presence_penalty: f64,
    pub frequency_penalty: f64,
    pub logprobs: bool,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            n: 1,
            seed: 42,
            temperature: 0.50,
            presence_penalty: 0.20,
            frequency_penalty: 0.20,
            logprobs: false,
        }
    }
}

// ============================================================================
// Request
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: ChatRole::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: ChatRole::User, content: content.into() }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub n: u32,
    pub seed: i64,
    pub temperature: f64,
    pub max_tokens: u32,
    pub logprobs: bool,
    pub presence_penalty: f64,
    pub frequency_penalty: f64,
}

impl ChatCompletionRequest {
    pub fn new(
        model: impl Into<String>,
        system_instruction: &str,
        user_prompt: &str,
        max_tokens: u32,
        sampling: SamplingParams,
    ) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage::system(system_instruction), ChatMessage::user(user_prompt)],
            n: sampling.n,
            seed: sampling.seed,
            temperature: sampling.temperature,
            max_tokens,
            logprobs: sampling.logprobs,
            presence_penalty: sampling.presence_penalty,
            frequency_penalty: sampling.frequency_penalty,
        }
    }
}

// ============================================================================
// Response
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    #[serde(default)]
    pub usage: Option<TokenUsage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct TokenUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
}

impl ChatCompletionResponse {
    /// Content of the first choice, trimmed
    pub fn first_content(&self) -> Result<String, LLMError> {
        self.choices
            .first()
            .ok_or_else(|| LLMError::ParseError("response has no choices".to_string()))?
            .message
            .content
            .as_deref()
            .map(|c| c.trim().to_string())
            .ok_or_else(|| LLMError::ParseError("first choice has no content".to_string()))
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Error, Debug)]
pub enum LLMError {
    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Rate limited (retry after {0}s)")]
    RateLimited(u64),

    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl LLMError {
    /// Classify a non-success HTTP status
    pub fn from_status(status: u16, retry_after: Option<u64>, message: String) -> Self {
        match status {
            429 => Self::RateLimited(retry_after.unwrap_or(0)),
            408 | 409 | 500..=599 => Self::ServerError { status, message },
            _ => Self::ApiError { status, message },
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout(_) | Self::Connection(_) | Self::RateLimited(_) | Self::ServerError { .. }
        )
    }
}
