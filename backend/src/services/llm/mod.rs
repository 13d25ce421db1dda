//! LLM Service Module
//!
//! Generates the narrative half of a query by sending a scenario prompt to an
//! OpenAI-compatible chat completion endpoint.
//!
//! # Architecture
//! ```text
//! ┌──────────────────┐
//! │ CompletionClient │  ← Trait (generic interface)
//! └────────┬─────────┘
//!          │
//!    ┌─────┴──────┐
//!    ▼            ▼
//! ┌────────┐  ┌──────┐
//! │ OpenAI │  │ Mock │
//! │ Client │  │(test)│
//! └────────┘  └──────┘
//! ```

mod client;
mod models;
mod scenarios;

pub use client::{CompletionClient, OpenAIClient, chat_completions_url};
pub use models::*;
pub use scenarios::cancer_overview::{Prompt, build_prompt};
pub use scenarios::language::{PromptProfile, TemplateKind};
