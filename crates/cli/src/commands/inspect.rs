use anyhow::{Context, Result};
use edid_core::extract::scan_file;
use edid_core::Dialect;
use serde::Serialize;

use crate::resolve_user_path;

#[derive(Debug, Serialize)]
pub struct InspectEntry {
    pub index: usize,
    pub name: String,
    pub size: usize,
    pub sha256: String,
}

#[derive(Debug, Serialize)]
pub struct SkippedEntry {
    pub offset: usize,
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub source: String,
    pub dialect: Dialect,
    pub edids: Vec<InspectEntry>,
    pub skipped: Vec<SkippedEntry>,
}

/// Build the inspection report for `input` without writing any files.
pub fn inspect_report(input: &str) -> Result<InspectReport> {
    let path = resolve_user_path(input)?;
    let collection = scan_file(&path)
        .with_context(|| format!("Failed to inspect {}", path.display()))?;

    let edids = collection
        .records
        .iter()
        .enumerate()
        .map(|(index, record)| InspectEntry {
            index,
            name: record.name.clone(),
            size: record.size(),
            sha256: record.sha256_hex(),
        })
        .collect();
    let skipped = collection
        .abandoned
        .iter()
        .map(|a| SkippedEntry { offset: a.start, error: a.error.to_string() })
        .collect();

    Ok(InspectReport {
        source: path.display().to_string(),
        dialect: collection.dialect,
        edids,
        skipped,
    })
}

/// List the EDIDs found in `input`.
pub fn inspect_command(input: &str, json: bool) -> Result<()> {
    let report = inspect_report(input)?;

    if json {
        let serialized = serde_json::to_string_pretty(&report)
            .context("Failed to serialize inspection report to JSON")?;
        println!("{}", serialized);
        return Ok(());
    }

    println!("Source: {}", report.source);
    println!("Dialect: {}", report.dialect.as_str());
    println!("EDIDs ({}):", report.edids.len());
    if report.edids.is_empty() {
        println!("  (none)");
    }
    for entry in &report.edids {
        println!("  - [{}] {} ({} bytes) sha256={}", entry.index, entry.name, entry.size, entry.sha256);
    }
    for skipped in &report.skipped {
        eprintln!("WARNING: skipped EDID at offset {}: {}", skipped.offset, skipped.error);
    }

    Ok(())
}
