//! Language-aware prompt settings
//!
//! The output language decides both which template is used and how many
//! tokens the model may produce. Chinese answers follow a long structured
//! outline and get a larger budget than the short English analysis.

use crate::models::Language;

/// Which prompt template a language uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// Sectioned outline: audience, introduction, mechanism, diagnosis,
    /// treatment, prevention, outlook, structure rules
    Structured,
    /// Short step-by-step analysis request
    Brief,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptProfile {
    pub template_kind: TemplateKind,
    pub max_tokens: u32,
}

impl PromptProfile {
    pub const fn for_language(language: Language) -> Self {
        match language {
            Language::Chinese => Self { template_kind: TemplateKind::Structured, max_tokens: 3072 },
            Language::English => Self { template_kind: TemplateKind::Brief, max_tokens: 1024 },
        }
    }
}
