use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Output language of a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
pub enum Language {
    #[default]
    Chinese,
    English,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Chinese, Language::English];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Chinese => "Chinese",
            Language::English => "English",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chinese" | "zh" => Ok(Language::Chinese),
            "english" | "en" => Ok(Language::English),
            other => Err(format!("unsupported language: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QueryRequest {
    /// TCGA project code, e.g. TCGA-READ
    pub code: String,
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QueryResult {
    pub summary: String,
    pub narrative: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parse() {
        assert_eq!("Chinese".parse::<Language>(), Ok(Language::Chinese));
        assert_eq!("english".parse::<Language>(), Ok(Language::English));
        assert_eq!("en".parse::<Language>(), Ok(Language::English));
        assert!("French".parse::<Language>().is_err());
    }

    #[test]
    fn test_query_request_defaults_to_chinese() {
        let req: QueryRequest = serde_json::from_str(r#"{"code":"TCGA-READ"}"#).unwrap();
        assert_eq!(req.language, Language::Chinese);

        let req: QueryRequest =
            serde_json::from_str(r#"{"code":"TCGA-COAD","language":"English"}"#).unwrap();
        assert_eq!(req.language, Language::English);
    }
}
