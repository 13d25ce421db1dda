//! Cancer Overview Scenario - narrative introduction to one TCGA cancer type

use serde::Serialize;

use super::language::{PromptProfile, TemplateKind};
use crate::models::{Language, ProjectEntry};

const STRUCTURED_PROMPT: &str = include_str!("cancer_overview_zh.md");
const BRIEF_PROMPT: &str = include_str!("cancer_overview_en.md");

const NAME_PLACEHOLDER: &str = "{name}";

/// A ready-to-send chat prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prompt {
    pub system_instruction: String,
    pub user_prompt: String,
    pub max_tokens: u32,
}

/// Build the prompt asking for an overview of `entry` in `language`
pub fn build_prompt(entry: &ProjectEntry, language: Language) -> Prompt {
    let profile = PromptProfile::for_language(language);
    let name = match language {
        Language::Chinese => entry.name_chinese,
        Language::English => entry.name_english,
    };

    let system_instruction = match language {
        Language::Chinese => format!(
            "您是公共卫生、流行病学、癌症研究和精准医学领域的专家，对{}有着深刻的洞察。",
            name
        ),
        Language::English => format!(
            "You are an expert in the fields of public health, epidemiology, cancer research, and precision medicine, with deep insights into {}.",
            name
        ),
    };

    let template = match profile.template_kind {
        TemplateKind::Structured => STRUCTURED_PROMPT,
        TemplateKind::Brief => BRIEF_PROMPT,
    };

    Prompt {
        system_instruction,
        user_prompt: template.replace(NAME_PLACEHOLDER, name).trim().to_string(),
        max_tokens: profile.max_tokens,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::reference_table;

    #[test]
    fn test_max_tokens_for_every_project() {
        for entry in reference_table::all() {
            assert_eq!(build_prompt(entry, Language::Chinese).max_tokens, 3072);
            assert_eq!(build_prompt(entry, Language::English).max_tokens, 1024);
        }
    }

    #[test]
    fn test_placeholders_are_filled() {
        for entry in reference_table::all() {
            for language in Language::ALL {
                let prompt = build_prompt(entry, language);
                assert!(!prompt.user_prompt.contains(NAME_PLACEHOLDER));
                assert!(!prompt.system_instruction.contains(NAME_PLACEHOLDER));
                assert_eq!(prompt.user_prompt.trim(), prompt.user_prompt);
            }
        }
    }

    #[test]
    fn test_chinese_prompt_is_structured() {
        let entry = reference_table::lookup("TCGA-READ").unwrap();
        let prompt = build_prompt(entry, Language::Chinese);

        assert!(prompt.system_instruction.contains("直肠腺癌"));
        assert!(prompt.user_prompt.starts_with("您的任务是撰写关于直肠腺癌这种复杂疾病的摘要介绍"));
        for section in [
            "1 - 明确目标受众",
            "2 - 简明扼要的引言部分",
            "3 - 医学机制与病理生理的清晰解释",
            "4 - 症状与诊断",
            "5 - 治疗方法",
            "6 - 预防和生活方式的建议",
            "7 - 结语与前景展望",
            "8 - 结构和语言",
        ] {
            assert!(prompt.user_prompt.contains(section), "missing section {}", section);
        }
        assert!(!prompt.user_prompt.contains("rectum adenocarcinoma"));
    }

    #[test]
    fn test_english_prompt_is_brief() {
        let entry = reference_table::lookup("TCGA-COAD").unwrap();
        let prompt = build_prompt(entry, Language::English);

        assert!(prompt.system_instruction.ends_with("with deep insights into colon adenocarcinoma."));
        assert!(prompt.user_prompt.contains("basic information about colon adenocarcinoma"));
        assert!(prompt.user_prompt.ends_with("Let's think step by step."));
        assert_eq!(prompt.user_prompt.lines().count(), 2);
    }

    #[test]
    fn test_build_prompt_is_pure() {
        let entry = reference_table::lookup("TCGA-GBM").unwrap();
        assert_eq!(
            build_prompt(entry, Language::Chinese),
            build_prompt(entry, Language::Chinese)
        );
    }
}
