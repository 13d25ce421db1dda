//! Static summary block shown next to the generated narrative

use crate::models::{Language, ProjectEntry};

/// Format the four-line summary of a project in the requested language
pub fn format_summary(entry: &ProjectEntry, language: Language) -> String {
    let link = entry.gdc_link();
    match language {
        Language::Chinese => format!(
            "✍️ 简称：{}\n❤️ 中文全称：{}\n💛 英文全称：{}\n🔗 链接：{}",
            entry.code, entry.name_chinese, entry.name_english, link
        ),
        Language::English => format!(
            "✍️ Abbreviation: {}\n❤️ Full name in Chinese: {}\n💛 Full Name in English: {}\n🔗 Link: {}",
            entry.code, entry.name_chinese, entry.name_english, link
        ),
    }
}
