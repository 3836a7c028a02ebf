//! JSON manifest describing an extraction run.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::classify::Dialect;
use crate::extract::ExtractOutcome;

/// One EDID in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub name: String,
    pub size: usize,
    pub sha256: String,
    /// Written file, or `None` if the write failed.
    pub path: Option<String>,
    pub error: Option<String>,
}

/// Serializable summary of an [`ExtractOutcome`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionManifest {
    pub tool_version: String,
    pub source: String,
    pub dialect: Dialect,
    pub started_at: String,
    pub finished_at: String,
    pub entries: Vec<ManifestEntry>,
}

impl ExtractionManifest {
    pub fn from_outcome(outcome: &ExtractOutcome) -> Self {
        let entries = outcome
            .writes
            .iter()
            .map(|write| ManifestEntry {
                name: write.name.clone(),
                size: write.size,
                sha256: write.sha256.clone(),
                path: write.succeeded().then(|| write.path.display().to_string()),
                error: write.error.clone(),
            })
            .collect();

        Self {
            tool_version: crate::version().to_string(),
            source: outcome.source.display().to_string(),
            dialect: outcome.dialect,
            started_at: outcome.started_at.to_rfc3339(),
            finished_at: outcome.finished_at.to_rfc3339(),
            entries,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize extraction manifest")
    }

    /// Write the manifest as pretty-printed JSON.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write manifest to {}", path.display()))
    }
}
