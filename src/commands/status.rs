use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::cli::StatusArgs;
use crate::model::{DocxInventoryManifest, ExtractRunManifest};

pub fn run(args: StatusArgs) -> Result<()> {
    let manifest_dir = args.cache_root.join("manifests");
    let inventory_path = manifest_dir.join("docx_inventory.json");

    info!(cache_root = %args.cache_root.display(), "status requested");

    if inventory_path.exists() {
        let raw = fs::read(&inventory_path)
            .with_context(|| format!("failed to read {}", inventory_path.display()))?;
        let inventory: DocxInventoryManifest = serde_json::from_slice(&raw)
            .with_context(|| format!("failed to parse {}", inventory_path.display()))?;

        info!(
            generated_at = %inventory.generated_at,
            docx_count = inventory.docx_count,
            "loaded inventory manifest"
        );
    } else {
        warn!(path = %inventory_path.display(), "inventory manifest missing");
    }

    match latest_extract_manifest(&manifest_dir)? {
        Some((path, manifest)) => {
            info!(
                path = %path.display(),
                run_id = %manifest.run_id,
                status = %manifest.status,
                records = manifest.counts.records_total,
                review = manifest.counts.review_records_count,
                failures = manifest.failures.len(),
                updated_at = %manifest.updated_at,
                "loaded extract run manifest"
            );

            for report in [
                &manifest.paths.report_path,
                &manifest.paths.sorted_report_path,
            ] {
                let report = Path::new(report);
                if report.exists() {
                    info!(path = %report.display(), "report present");
                } else {
                    warn!(path = %report.display(), "report missing");
                }
            }
        }
        None => warn!(dir = %manifest_dir.display(), "no extract run manifest found"),
    }

    Ok(())
}

/// Run ids embed a compact UTC timestamp, so the lexically greatest manifest
/// filename is the most recent run.
fn latest_extract_manifest(manifest_dir: &Path) -> Result<Option<(PathBuf, ExtractRunManifest)>> {
    if !manifest_dir.exists() {
        return Ok(None);
    }

    let mut candidates = Vec::new();
    let entries = fs::read_dir(manifest_dir)
        .with_context(|| format!("failed to read {}", manifest_dir.display()))?;

    for entry in entries {
        let entry =
            entry.with_context(|| format!("failed to read entry in {}", manifest_dir.display()))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };

        if name.starts_with("extract_run_") && name.ends_with(".json") {
            candidates.push(entry.path());
        }
    }

    candidates.sort();
    let Some(path) = candidates.pop() else {
        return Ok(None);
    };

    let raw =
        fs::read(&path).with_context(|| format!("failed to read {}", path.display()))?;
    let manifest: ExtractRunManifest = serde_json::from_slice(&raw)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    Ok(Some((path, manifest)))
}
