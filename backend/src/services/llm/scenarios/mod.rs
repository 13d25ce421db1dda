//! LLM Prompt Scenarios
//!
//! Each scenario turns a reference-table entry into a chat prompt.

pub mod cancer_overview;
pub mod language;
