//! Query Service
//!
//! Answers one form submission: a static summary of the project plus a
//! generated narrative. Generation failures never fail the query; the
//! narrative degrades to [`RESPONSE_ERROR`] and the summary is still returned.

use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use crate::models::{Language, QueryResult};
use crate::services::llm::{CompletionClient, build_prompt};
use crate::services::{reference_table, summary};
use crate::utils::ApiResult;

/// Narrative shown when the completion service could not produce one
pub const RESPONSE_ERROR: &str = "Response Error";

/// Preset queries offered next to the form; the first one is the form default
pub const EXAMPLES: [(&str, Language); 2] =
    [("TCGA-READ", Language::Chinese), ("TCGA-COAD", Language::English)];

#[derive(Clone)]
pub struct QueryService {
    client: Arc<dyn CompletionClient>,
}

impl QueryService {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Run a query for `code` in `language`
    ///
    /// Fails only when `code` is not in the reference table.
    pub async fn query(&self, code: &str, language: Language) -> ApiResult<QueryResult> {
        let entry = reference_table::lookup(code.trim())?;

        let request_id = Uuid::new_v4();
        let started = Instant::now();
        tracing::info!("[{}] Query {} ({})", request_id, entry.code, language);

        let summary = summary::format_summary(entry, language);
        let prompt = build_prompt(entry, language);

        let narrative = match self
            .client
            .complete(&prompt.system_instruction, &prompt.user_prompt, prompt.max_tokens)
            .await
        {
            Ok(text) => {
                tracing::info!(
                    "[{}] Generated {} chars for {} in {}ms",
                    request_id,
                    text.chars().count(),
                    entry.code,
                    started.elapsed().as_millis()
                );
                text
            },
            Err(e) => {
                tracing::error!(
                    "[{}] {} for {} ({}): {}",
                    request_id,
                    RESPONSE_ERROR,
                    entry.code,
                    language,
                    e
                );
                RESPONSE_ERROR.to_string()
            },
        };

        Ok(QueryResult { summary, narrative })
    }
}
