use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One extracted parade-state entry. `note` is reserved for downstream
/// annotation and is always empty at extraction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonnelRecord {
    pub category: String,
    pub number: String,
    pub rank: String,
    pub name: String,
    pub unit: String,
    pub note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocxEntry {
    pub filename: String,
    pub unit: String,
    pub sha256: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocxInventoryManifest {
    pub manifest_version: u32,
    pub generated_at: String,
    pub source_directory: String,
    pub docx_count: usize,
    pub docs: Vec<DocxEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentFailure {
    pub filename: String,
    pub kind: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractPaths {
    pub input_root: String,
    pub manifest_dir: String,
    pub inventory_manifest_path: String,
    pub report_path: String,
    pub sorted_report_path: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractCounts {
    pub docx_count: usize,
    pub processed_doc_count: usize,
    pub failed_doc_count: usize,
    pub empty_doc_count: usize,
    pub paragraph_count: usize,
    pub records_total: usize,
    pub review_records_count: usize,
    pub category_counts: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractRunManifest {
    pub manifest_version: u32,
    pub run_id: String,
    pub status: String,
    pub started_at: String,
    pub updated_at: String,
    pub command: String,
    pub paths: ExtractPaths,
    pub counts: ExtractCounts,
    pub failures: Vec<DocumentFailure>,
    pub source_hashes: Vec<DocxEntry>,
    pub warnings: Vec<String>,
    pub notes: Vec<String>,
}
