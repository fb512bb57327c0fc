use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{info, warn};

use crate::classify::{DocumentClassifier, REVIEW_CATEGORY};
use crate::cli::ExtractArgs;
use crate::commands::inventory;
use crate::docx;
use crate::model::{
    DocumentFailure, DocxInventoryManifest, ExtractCounts, ExtractPaths, ExtractRunManifest,
    PersonnelRecord,
};
use crate::report;
use crate::util::{ensure_directory, now_utc_string, utc_compact_string, write_json_pretty};

pub fn run(args: ExtractArgs) -> Result<()> {
    let started_ts = Utc::now();
    let started_at = now_utc_string();
    let run_id = format!("run-{}", utc_compact_string(started_ts));

    let manifest_dir = args.cache_root.join("manifests");
    ensure_directory(&manifest_dir)?;
    let report_dir = args.cache_root.join("reports");
    ensure_directory(&report_dir)?;

    let inventory_manifest_path = args
        .inventory_manifest_path
        .clone()
        .unwrap_or_else(|| manifest_dir.join("docx_inventory.json"));
    let extract_manifest_path = args.extract_manifest_path.clone().unwrap_or_else(|| {
        manifest_dir.join(format!(
            "extract_run_{}.json",
            utc_compact_string(started_ts)
        ))
    });
    let report_path = args
        .report_path
        .clone()
        .unwrap_or_else(|| report_dir.join("parade_state.csv"));
    let sorted_report_path = args
        .sorted_report_path
        .clone()
        .unwrap_or_else(|| report_dir.join("parade_state_sorted.csv"));

    info!(input_root = %args.input_root.display(), run_id = %run_id, "starting extract");

    let inventory = load_or_refresh_inventory(
        &args.input_root,
        &inventory_manifest_path,
        args.refresh_inventory,
    )?;

    let classifier = DocumentClassifier::new()?;

    let mut records = Vec::<PersonnelRecord>::new();
    let mut failures = Vec::<DocumentFailure>::new();
    let mut warnings = Vec::<String>::new();
    let mut counts = ExtractCounts {
        docx_count: inventory.docx_count,
        ..ExtractCounts::default()
    };

    for entry in &inventory.docs {
        let path = args.input_root.join(&entry.filename);

        // one bad document never aborts the batch
        let paragraphs = match docx::read_paragraphs(&path) {
            Ok(paragraphs) => paragraphs,
            Err(err) => {
                warn!(path = %path.display(), kind = err.kind(), error = %err, "skipping document");
                warnings.push(format!("skipped {}: {err}", entry.filename));
                failures.push(DocumentFailure {
                    filename: entry.filename.clone(),
                    kind: err.kind().to_string(),
                    message: err.to_string(),
                });
                counts.failed_doc_count += 1;
                continue;
            }
        };

        let doc_records = classifier.classify(&paragraphs, &entry.unit);
        info!(
            unit = %entry.unit,
            paragraphs = paragraphs.len(),
            records = doc_records.len(),
            "classified document"
        );

        if doc_records.is_empty() {
            counts.empty_doc_count += 1;
        }
        counts.paragraph_count += paragraphs.len();
        counts.processed_doc_count += 1;
        records.extend(doc_records);
    }

    counts.records_total = records.len();
    counts.category_counts = report::category_counts(&records);
    counts.review_records_count = counts
        .category_counts
        .get(REVIEW_CATEGORY)
        .copied()
        .unwrap_or(0);

    if counts.review_records_count > 0 {
        warn!(
            count = counts.review_records_count,
            category = REVIEW_CATEGORY,
            "records need manual review"
        );
        warnings.push(format!(
            "{} records assigned to {REVIEW_CATEGORY}",
            counts.review_records_count
        ));
    }

    let status = if records.is_empty() {
        warn!("no personnel records extracted");
        warnings.push("no personnel records extracted".to_string());
        "empty"
    } else {
        report::write_report(&report_path, &records)?;
        report::write_sorted_report(&sorted_report_path, &records)?;
        info!(path = %report_path.display(), rows = records.len(), "wrote report");
        info!(path = %sorted_report_path.display(), "wrote sorted report");
        "completed"
    };

    let manifest = ExtractRunManifest {
        manifest_version: 1,
        run_id,
        status: status.to_string(),
        started_at,
        updated_at: now_utc_string(),
        command: render_extract_command(&args),
        paths: ExtractPaths {
            input_root: args.input_root.display().to_string(),
            manifest_dir: manifest_dir.display().to_string(),
            inventory_manifest_path: inventory_manifest_path.display().to_string(),
            report_path: report_path.display().to_string(),
            sorted_report_path: sorted_report_path.display().to_string(),
        },
        counts,
        failures,
        source_hashes: inventory.docs,
        warnings,
        notes: vec![
            "Record order follows paragraph order per document, inventory order across documents."
                .to_string(),
        ],
    };

    write_json_pretty(&extract_manifest_path, &manifest)?;
    info!(path = %extract_manifest_path.display(), "wrote extract run manifest");
    info!(
        records = manifest.counts.records_total,
        failures = manifest.failures.len(),
        status = %manifest.status,
        "extract completed"
    );

    Ok(())
}

fn load_or_refresh_inventory(
    input_root: &Path,
    inventory_manifest_path: &Path,
    refresh_inventory: bool,
) -> Result<DocxInventoryManifest> {
    if refresh_inventory || !inventory_manifest_path.exists() {
        let manifest = inventory::build_manifest(input_root)?;
        write_json_pretty(inventory_manifest_path, &manifest)?;
        info!(
            path = %inventory_manifest_path.display(),
            docx_count = manifest.docx_count,
            "refreshed inventory manifest"
        );
        return Ok(manifest);
    }

    let raw = fs::read(inventory_manifest_path)
        .with_context(|| format!("failed to read {}", inventory_manifest_path.display()))?;
    let manifest: DocxInventoryManifest = serde_json::from_slice(&raw)
        .with_context(|| format!("failed to parse {}", inventory_manifest_path.display()))?;

    info!(
        path = %inventory_manifest_path.display(),
        docx_count = manifest.docx_count,
        "loaded existing inventory manifest"
    );

    Ok(manifest)
}

fn render_extract_command(args: &ExtractArgs) -> String {
    let mut parts = vec![
        "muster extract".to_string(),
        format!("--input-root {}", args.input_root.display()),
        format!("--cache-root {}", args.cache_root.display()),
    ];

    if args.refresh_inventory {
        parts.push("--refresh-inventory".to_string());
    }

    parts.join(" ")
}
