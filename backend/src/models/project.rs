use serde::Serialize;
use utoipa::ToSchema;

pub const GDC_PROJECT_URL: &str = "https://portal.gdc.cancer.gov/projects";

/// One TCGA project from the built-in reference table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectEntry {
    pub code: &'static str,
    pub name_english: &'static str,
    pub name_chinese: &'static str,
}

impl ProjectEntry {
    pub const fn new(
        code: &'static str,
        name_english: &'static str,
        name_chinese: &'static str,
    ) -> Self {
        Self { code, name_english, name_chinese }
    }

    /// Project page on the GDC data portal
    pub fn gdc_link(&self) -> String {
        format!("{}/{}", GDC_PROJECT_URL, self.code)
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProjectResponse {
    pub code: String,
    pub name_english: String,
    pub name_chinese: String,
    pub link: String,
}

impl From<&ProjectEntry> for ProjectResponse {
    fn from(entry: &ProjectEntry) -> Self {
        Self {
            code: entry.code.to_string(),
            name_english: entry.name_english.to_string(),
            name_chinese: entry.name_chinese.to_string(),
            link: entry.gdc_link(),
        }
    }
}
