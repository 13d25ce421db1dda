//! TCGA Reference Table
//!
//! The 33 cancer projects of The Cancer Genome Atlas, keyed by project code.
//! Built once on first access and read-only afterwards.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::models::ProjectEntry;
use crate::utils::{ApiError, ApiResult};

// Listed in the order the project selector shows them.
static PROJECTS: [ProjectEntry; 33] = [
    ProjectEntry::new("TCGA-ACC", "adrenocortical carcinoma", "肾上腺皮质癌"),
    ProjectEntry::new("TCGA-BLCA", "bladder urothelial carcinoma", "膀胱尿路上皮癌"),
    ProjectEntry::new("TCGA-BRCA", "breast invasive carcinoma", "浸润性乳腺癌"),
    ProjectEntry::new(
        "TCGA-CESC",
        "cervical squamous cell carcinoma and endocervical adenocarcinoma",
        "宫颈鳞状细胞癌与宫颈内膜腺癌",
    ),
    ProjectEntry::new("TCGA-CHOL", "cholangiocarcinoma", "胆管癌"),
    ProjectEntry::new("TCGA-COAD", "colon adenocarcinoma", "结肠腺癌"),
    ProjectEntry::new(
        "TCGA-DLBC",
        "lymphoid neoplasm diffuse large B-cell lymphoma",
        "弥漫性大 B 细胞淋巴瘤",
    ),
    ProjectEntry::new("TCGA-ESCA", "esophageal carcinoma", "食道癌"),
    ProjectEntry::new("TCGA-GBM", "glioblastoma multiforme", "多形性胶质母细胞瘤"),
    ProjectEntry::new("TCGA-HNSC", "head and neck squamous cell carcinoma", "头颈部鳞状细胞癌"),
    ProjectEntry::new("TCGA-KICH", "kidney chromophobe", "肾嫌色细胞癌"),
    ProjectEntry::new("TCGA-KIRC", "kidney renal clear cell carcinoma", "肾透明细胞癌"),
    ProjectEntry::new("TCGA-KIRP", "kidney renal papillary cell carcinoma", "乳头状肾细胞癌"),
    ProjectEntry::new("TCGA-LAML", "acute myeloid leukemia", "急性髓系白血病"),
    ProjectEntry::new("TCGA-LGG", "brain lower grade glioma", "低级别脑胶质瘤"),
    ProjectEntry::new("TCGA-LIHC", "liver hepatocellular carcinoma", "肝细胞癌"),
    ProjectEntry::new("TCGA-LUAD", "lung adenocarcinoma", "肺腺癌"),
    ProjectEntry::new("TCGA-LUSC", "lung squamous cell carcinoma", "肺鳞状细胞癌"),
    ProjectEntry::new("TCGA-MESO", "mesothelioma", "间皮瘤"),
    ProjectEntry::new("TCGA-OV", "ovarian serous cystadenocarcinoma", "卵巢浆液性囊腺癌"),
    ProjectEntry::new("TCGA-PAAD", "pancreatic adenocarcinoma", "胰腺腺癌"),
    ProjectEntry::new("TCGA-PCPG", "pheochromocytoma and paraganglioma", "嗜铬细胞瘤和副神经节瘤"),
    ProjectEntry::new("TCGA-PRAD", "prostate adenocarcinoma", "前列腺腺癌"),
    ProjectEntry::new("TCGA-READ", "rectum adenocarcinoma", "直肠腺癌"),
    ProjectEntry::new("TCGA-SARC", "sarcoma", "肉瘤"),
    ProjectEntry::new("TCGA-SKCM", "skin cutaneous melanoma", "皮肤黑色素瘤"),
    ProjectEntry::new("TCGA-STAD", "stomach adenocarcinoma", "胃腺癌"),
    ProjectEntry::new("TCGA-TGCT", "testicular germ cell tumors", "睾丸生殖细胞肿瘤"),
    ProjectEntry::new("TCGA-THCA", "thyroid carcinoma", "甲状腺癌"),
    ProjectEntry::new("TCGA-THYM", "thymoma", "胸腺瘤"),
    ProjectEntry::new("TCGA-UCEC", "uterine corpus endometrial carcinoma", "子宫体子宫内膜癌"),
    ProjectEntry::new("TCGA-UCS", "uterine carcinosarcoma", "子宫癌肉瘤"),
    ProjectEntry::new("TCGA-UVM", "uveal melanoma", "眼内（葡萄膜）黑色素瘤"),
];

static PROJECT_INDEX: Lazy<HashMap<&'static str, &'static ProjectEntry>> =
    Lazy::new(|| PROJECTS.iter().map(|p| (p.code, p)).collect());

static CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^TCGA-[A-Z]{2,4}$").expect("valid project code pattern"));

/// Whether `code` has the shape of a TCGA project identifier
pub fn is_well_formed(code: &str) -> bool {
    CODE_PATTERN.is_match(code)
}

/// Look up a project by its code.
///
/// Codes are matched exactly; `tcga-read` is not `TCGA-READ`.
pub fn lookup(code: &str) -> ApiResult<&'static ProjectEntry> {
    PROJECT_INDEX
        .get(code)
        .copied()
        .ok_or_else(|| ApiError::project_not_found(code))
}

/// All projects, in selector order
pub fn all() -> &'static [ProjectEntry] {
    &PROJECTS
}

pub fn codes() -> impl Iterator<Item = &'static str> {
    PROJECTS.iter().map(|p| p.code)
}

pub fn len() -> usize {
    PROJECTS.len()
}
