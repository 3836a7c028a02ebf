use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

/// Defaults for `extract`, read from a YAML or JSON file via `--config`.
///
/// Flags given on the command line take precedence over these values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Base output filename (`~` is expanded).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Where to write the JSON manifest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<String>,
    /// Print the manifest to stdout.
    #[serde(default)]
    pub json: bool,
}

/// Load an [`ExtractConfig`] from `.yaml`/`.yml`/`.json`.
pub fn load_extract_config(path: &Path) -> Result<ExtractConfig> {
    let body = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    match ext {
        "yaml" | "yml" => serde_yaml::from_str(&body)
            .with_context(|| format!("Failed to parse YAML config {}", path.display())),
        "json" => serde_json::from_str(&body)
            .with_context(|| format!("Failed to parse JSON config {}", path.display())),
        other => Err(anyhow!(
            "Unsupported config extension '{}' for {}. Allowed: yaml, yml, json",
            other,
            path.display()
        )),
    }
}

/// Load the config file if one was given, else the defaults.
pub fn load_optional_config(path: Option<&str>) -> Result<ExtractConfig> {
    match path {
        Some(p) => load_extract_config(&crate::resolve_user_path(p)?),
        None => Ok(ExtractConfig::default()),
    }
}
