//! Chat completion client
//!
//! Talks to any OpenAI-compatible `/chat/completions` endpoint. Transport
//! failures, 408/409/429 and 5xx responses are retried with exponential
//! backoff up to `max_retries` times; everything else fails immediately.

use async_trait::async_trait;
use reqwest::{Client, header::RETRY_AFTER};
use std::time::{Duration, Instant};

use super::models::{ChatCompletionRequest, ChatCompletionResponse, LLMError, SamplingParams};
use crate::config::LlmConfig;

const INITIAL_BACKOFF: Duration = Duration::from_millis(500);
const MAX_BACKOFF: Duration = Duration::from_secs(8);

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send one system + user exchange and return the trimmed reply
    async fn complete(
        &self,
        system_instruction: &str,
        user_prompt: &str,
        max_tokens: u32,
    ) -> Result<String, LLMError>;
}

pub struct OpenAIClient {
    http: Client,
    endpoint: String,
    api_key: String,
    model: String,
    timeout_secs: u64,
    max_retries: u32,
    initial_backoff: Duration,
    sampling: SamplingParams,
}

impl OpenAIClient {
    pub fn new(config: &LlmConfig) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint: chat_completions_url(&config.api_base),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            timeout_secs: config.timeout_secs,
            max_retries: config.max_retries,
            initial_backoff: INITIAL_BACKOFF,
            sampling: SamplingParams::default(),
        })
    }

    /// Override the first retry delay
    pub fn with_initial_backoff(mut self, backoff: Duration) -> Self {
        self.initial_backoff = backoff;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn backoff(&self, attempt: u32, retry_after: Option<u64>) -> Duration {
        let exp = self.initial_backoff.saturating_mul(2u32.saturating_pow(attempt));
        let delay = exp.min(MAX_BACKOFF);
        match retry_after {
            Some(secs) if secs > 0 => delay.max(Duration::from_secs(secs).min(MAX_BACKOFF)),
            _ => delay,
        }
    }

    fn map_transport_error(&self, err: reqwest::Error) -> LLMError {
        if err.is_timeout() {
            LLMError::Timeout(self.timeout_secs)
        } else if err.is_decode() {
            LLMError::ParseError(err.to_string())
        } else {
            LLMError::Connection(err.to_string())
        }
    }

    async fn send_once(&self, request: &ChatCompletionRequest) -> Result<String, LLMError> {
        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = resp.status();
        if !status.is_success() {
            let retry_after = resp
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok());
            let body = resp.text().await.unwrap_or_default();
            return Err(LLMError::from_status(status.as_u16(), retry_after, body));
        }

        let body = resp.text().await.map_err(|e| self.map_transport_error(e))?;
        let parsed: ChatCompletionResponse =
            serde_json::from_str(&body).map_err(|e| LLMError::ParseError(e.to_string()))?;

        if let Some(usage) = parsed.usage {
            tracing::debug!(
                "Completion usage: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens,
                usage.completion_tokens
            );
        }

        parsed.first_content()
    }
}

#[async_trait]
impl CompletionClient for OpenAIClient {
    async fn complete(
        &self,
        system_instruction: &str,
        user_prompt: &str,
        max_tokens: u32,
    ) -> Result<String, LLMError> {
        let request = ChatCompletionRequest::new(
            self.model.clone(),
            system_instruction,
            user_prompt,
            max_tokens,
            self.sampling,
        );

        let started = Instant::now();
        let mut attempt = 0;
        loop {
            match self.send_once(&request).await {
                Ok(content) => {
                    tracing::debug!(
                        "Completion succeeded in {}ms after {} retries",
                        started.elapsed().as_millis(),
                        attempt
                    );
                    return Ok(content);
                },
                Err(e) if e.is_retryable() && attempt < self.max_retries => {
                    let retry_after = match &e {
                        LLMError::RateLimited(secs) => Some(*secs),
                        _ => None,
                    };
                    let delay = self.backoff(attempt, retry_after);
                    attempt += 1;
                    tracing::warn!(
                        "Completion attempt {} failed: {} (retrying in {}ms)",
                        attempt,
                        e,
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                },
                Err(e) => return Err(e),
            }
        }
    }
}

/// `{base}/chat/completions`, tolerating a trailing slash on the base
pub fn chat_completions_url(api_base: &str) -> String {
    format!("{}/chat/completions", api_base.trim_end_matches('/'))
}
