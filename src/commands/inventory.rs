use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::info;

use crate::cli::InventoryArgs;
use crate::model::{DocxEntry, DocxInventoryManifest};
use crate::util::{now_utc_string, sha256_file, write_json_pretty};

pub fn run(args: InventoryArgs) -> Result<()> {
    let manifest = build_manifest(&args.input_root)?;

    if args.dry_run {
        info!(
            docx_count = manifest.docx_count,
            source = %manifest.source_directory,
            "inventory dry-run complete"
        );
        return Ok(());
    }

    let manifest_path = args.manifest_path.unwrap_or_else(|| {
        args.cache_root
            .join("manifests")
            .join("docx_inventory.json")
    });

    write_json_pretty(&manifest_path, &manifest)?;
    info!(path = %manifest_path.display(), "wrote inventory manifest");
    info!(docx_count = manifest.docx_count, "inventory completed");

    Ok(())
}

pub fn build_manifest(input_root: &Path) -> Result<DocxInventoryManifest> {
    let mut docx_paths = discover_docx(input_root)?;
    docx_paths.sort();

    if docx_paths.is_empty() {
        bail!("no DOCX documents found in {}", input_root.display());
    }

    let mut docs = Vec::with_capacity(docx_paths.len());
    for path in docx_paths {
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(ToOwned::to_owned)
            .with_context(|| format!("invalid UTF-8 filename: {}", path.display()))?;

        // one unit per source document, taken from the filename
        let unit = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(|stem| stem.to_uppercase())
            .with_context(|| format!("invalid UTF-8 filename: {}", path.display()))?;

        let sha256 = sha256_file(&path)?;

        docs.push(DocxEntry {
            filename,
            unit,
            sha256,
        });
    }

    Ok(DocxInventoryManifest {
        manifest_version: 1,
        generated_at: now_utc_string(),
        source_directory: input_root.display().to_string(),
        docx_count: docs.len(),
        docs,
    })
}

fn discover_docx(input_root: &Path) -> Result<Vec<PathBuf>> {
    let mut docs = Vec::new();

    let entries = fs::read_dir(input_root)
        .with_context(|| format!("failed to read {}", input_root.display()))?;

    for entry in entries {
        let entry =
            entry.with_context(|| format!("failed to read entry in {}", input_root.display()))?;
        let path = entry.path();

        if !entry
            .file_type()
            .with_context(|| format!("failed to inspect file type: {}", path.display()))?
            .is_file()
        {
            continue;
        }

        // Word leaves ~$ lock files next to open documents
        if entry.file_name().to_string_lossy().starts_with('~') {
            continue;
        }

        let is_docx = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("docx"))
            .unwrap_or(false);

        if is_docx {
            docs.push(path);
        }
    }

    Ok(docs)
}
