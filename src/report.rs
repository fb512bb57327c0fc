use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::PersonnelRecord;

const REPORT_COLUMNS: [&str; 7] = ["CATEGORY", "BIL", "NO", "PKT", "NAMA", "UNIT", "CATITAN"];
const SORTED_REPORT_COLUMNS: [&str; 8] = [
    "CATEGORY", "COUNT", "BIL", "NO", "PKT", "NAMA", "UNIT", "CATITAN",
];

/// Full report in extraction order. `BIL` is the 1-based running row number.
pub fn write_report(path: &Path, records: &[PersonnelRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create report: {}", path.display()))?;

    writer
        .write_record(REPORT_COLUMNS)
        .context("failed to write report header")?;

    for (index, record) in records.iter().enumerate() {
        let bil = (index + 1).to_string();
        writer
            .write_record([
                record.category.as_str(),
                &bil,
                &record.number,
                &record.rank,
                &record.name,
                &record.unit,
                &record.note,
            ])
            .context("failed to write report row")?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to flush report: {}", path.display()))
}

/// Report grouped by category: stable sort, so rows inside a category keep
/// their extraction order and their original `BIL` numbers. `COUNT` restarts
/// at 1 within each category.
pub fn write_sorted_report(path: &Path, records: &[PersonnelRecord]) -> Result<()> {
    let mut ordered: Vec<(usize, &PersonnelRecord)> = records.iter().enumerate().collect();
    ordered.sort_by(|left, right| left.1.category.cmp(&right.1.category));

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create sorted report: {}", path.display()))?;

    writer
        .write_record(SORTED_REPORT_COLUMNS)
        .context("failed to write sorted report header")?;

    let mut within_category = BTreeMap::<&str, usize>::new();
    for (index, record) in ordered {
        let count = within_category
            .entry(record.category.as_str())
            .and_modify(|count| *count += 1)
            .or_insert(1);
        let count = count.to_string();
        let bil = (index + 1).to_string();

        writer
            .write_record([
                record.category.as_str(),
                &count,
                &bil,
                &record.number,
                &record.rank,
                &record.name,
                &record.unit,
                &record.note,
            ])
            .context("failed to write sorted report row")?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to flush sorted report: {}", path.display()))
}

pub fn category_counts(records: &[PersonnelRecord]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.category.clone()).or_insert(0) += 1;
    }
    counts
}
