//! End-to-end extraction: load, classify, decode, write.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::classify::Dialect;
use crate::collect::{collect_edids, AbandonedAttempt, Collection};
use crate::error::ExtractError;
use crate::output::{write_records, BasePath, OutputLocations, WriteOutcome};
use crate::report::Report;

/// What to extract and where to put it.
#[derive(Debug, Clone)]
pub struct ExtractRequest {
    /// Log or text dump to read.
    pub input: PathBuf,
    /// Base output filename override; `~` is expanded.
    pub output: Option<String>,
}

impl ExtractRequest {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self { input: input.into(), output: None }
    }

    pub fn with_output(mut self, output: Option<String>) -> Self {
        self.output = output;
        self
    }
}

/// Everything that happened during one extraction.
#[derive(Debug, Clone)]
pub struct ExtractOutcome {
    pub source: PathBuf,
    pub dialect: Dialect,
    /// Base filename used for writing; `None` when nothing was found.
    pub base_path: Option<BasePath>,
    pub writes: Vec<WriteOutcome>,
    pub abandoned: Vec<AbandonedAttempt>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl ExtractOutcome {
    /// Number of EDIDs decoded from the input.
    pub fn found(&self) -> usize {
        self.writes.len()
    }

    /// True when every decoded EDID was written.
    pub fn success(&self) -> bool {
        self.writes.iter().all(WriteOutcome::succeeded)
    }
}

/// Read the whole input, rejecting empty files.
pub fn load_input(path: &Path) -> Result<Vec<u8>, ExtractError> {
    let data =
        fs::read(path).map_err(|source| ExtractError::Io { path: path.to_path_buf(), source })?;
    if data.is_empty() {
        return Err(ExtractError::EmptyInput { path: path.to_path_buf() });
    }
    Ok(data)
}

/// Load and decode `path` without writing anything.
pub fn scan_file(path: &Path) -> Result<Collection, ExtractError> {
    let data = load_input(path)?;
    Ok(collect_edids(&data))
}

/// Extract every EDID in `request.input` to binary files.
///
/// Fails only when the input cannot be loaded. Finding no EDIDs is a success
/// with zero writes; individual write failures are reported and recorded in
/// the outcome.
pub fn extract_edids(
    request: &ExtractRequest,
    locations: &OutputLocations,
    report: &mut dyn Report,
) -> Result<ExtractOutcome, ExtractError> {
    let started_at = Utc::now();

    // The input buffer is dropped here, before any output is written.
    let Collection { dialect, records, abandoned } = scan_file(&request.input)?;

    for attempt in &abandoned {
        report.warn(&format!(
            "Skipping EDID at offset {} in \"{}\": {}",
            attempt.start,
            request.input.display(),
            attempt.error
        ));
    }

    report.info("");
    report.info(&format!(
        "Found {} EDID{} in \"{}\".",
        records.len(),
        if records.len() == 1 { "" } else { "s" },
        request.input.display()
    ));

    let (base_path, writes) = if records.is_empty() {
        (None, Vec::new())
    } else {
        let base = locations.resolve_base_path(request.output.as_deref());
        let writes = write_records(records, &base.path, report);
        (Some(base), writes)
    };

    report.info("");

    let outcome = ExtractOutcome {
        source: request.input.clone(),
        dialect,
        base_path,
        writes,
        abandoned,
        started_at,
        finished_at: Utc::now(),
    };
    debug!(found = outcome.found(), success = outcome.success(), "extraction finished");
    Ok(outcome)
}
