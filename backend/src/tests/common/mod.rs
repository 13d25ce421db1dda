// Common test utilities and helpers

use async_trait::async_trait;
use axum::Router;
use std::sync::{Arc, Mutex};

use crate::services::llm::{CompletionClient, LLMError};
use crate::services::query_service::QueryService;
use crate::{AppState, build_router};

/// One recorded `complete` call
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub system_instruction: String,
    pub user_prompt: String,
    pub max_tokens: u32,
}

/// Completion client answering every call with the same outcome
pub struct MockCompletionClient {
    outcome: Result<String, String>,
    failure: Mutex<Option<LLMError>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockCompletionClient {
    pub fn replying(text: impl Into<String>) -> Self {
        Self { outcome: Ok(text.into()), failure: Mutex::new(None), calls: Mutex::new(Vec::new()) }
    }

    /// Fails the first call with `err`; later calls fail with a generic API error
    pub fn failing(err: LLMError) -> Self {
        Self {
            outcome: Err(err.to_string()),
            failure: Mutex::new(Some(err)),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(
        &self,
        system_instruction: &str,
        user_prompt: &str,
        max_tokens: u32,
    ) -> Result<String, LLMError> {
        self.calls.lock().unwrap().push(RecordedCall {
            system_instruction: system_instruction.to_string(),
            user_prompt: user_prompt.to_string(),
            max_tokens,
        });

        match &self.outcome {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(self
                .failure
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| LLMError::ApiError { status: 500, message: message.clone() })),
        }
    }
}

/// Router wired to `client`
pub fn create_test_app(client: Arc<MockCompletionClient>) -> Router {
    let state = Arc::new(AppState { query_service: QueryService::new(client) });
    build_router(state)
}
