use anyhow::{anyhow, Context, Result};
use edid_core::manifest::ExtractionManifest;
use edid_core::{extract_edids, ExtractRequest, OutputLocations};

use crate::commands::load_optional_config;
use crate::{resolve_user_path, ConsoleReport};

/// Extract every EDID in `input` to binary files.
///
/// `output`, `manifest` and `json` override the matching config-file values.
/// Fails if the input cannot be read, the manifest cannot be written, or any
/// EDID could not be written (after attempting all of them).
pub fn extract_command(
    input: &str,
    output: Option<String>,
    manifest: Option<String>,
    json: bool,
    config: Option<&str>,
) -> Result<()> {
    let config = load_optional_config(config)?;
    let output = output.or(config.output);
    let manifest_path = manifest.or(config.manifest);
    let json = json || config.json;

    let input_path = resolve_user_path(input)?;
    let request = ExtractRequest::new(&input_path).with_output(output);
    let mut report = ConsoleReport::new(json);

    let outcome = extract_edids(&request, &OutputLocations::from_env(), &mut report)
        .with_context(|| format!("Failed to extract EDIDs from {}", input_path.display()))?;

    let manifest = ExtractionManifest::from_outcome(&outcome);
    if let Some(path) = manifest_path {
        let path = resolve_user_path(&path)?;
        manifest.write_to(&path)?;
        eprintln!("Wrote manifest to {}", path.display());
    }
    if json {
        println!("{}", manifest.to_json()?);
    }

    if !outcome.success() {
        let failed = outcome.writes.iter().filter(|w| !w.succeeded()).count();
        return Err(anyhow!("Failed to write {} of {} EDIDs", failed, outcome.found()));
    }

    Ok(())
}
