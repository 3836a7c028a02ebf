//! Writing decoded EDIDs to binary files.
//!
//! The base filename is resolved once per extraction: an explicit path if
//! given, else `edid.bin` in the first usable directory among the current
//! directory and the home directory, else `/tmp/edid.bin`. Each record then
//! lands on the first of `base`, `base.0`, `base.1`, ... that does not exist.
//! There is a window between that existence check and file creation; a file
//! created by someone else in between is truncated.

use std::env;
use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::WriteError;
use crate::model::EdidRecord;
use crate::report::Report;

/// Default output file name.
pub const EDID_OUTPUT_FILE_NAME: &str = "edid.bin";

/// Where the base output filename came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputSource {
    Explicit,
    CurrentDir,
    HomeDir,
    Fallback,
}

/// Resolved base filename for a batch of EDIDs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasePath {
    pub path: PathBuf,
    pub source: OutputSource,
}

/// Directories consulted when no explicit output path is given.
///
/// Built from the process environment by [`OutputLocations::from_env`]; tests
/// construct it directly.
#[derive(Debug, Clone)]
pub struct OutputLocations {
    pub current_dir: PathBuf,
    pub home_dir: Option<PathBuf>,
    pub fallback_dir: PathBuf,
}

impl OutputLocations {
    pub fn from_env() -> Self {
        Self {
            current_dir: PathBuf::from("."),
            home_dir: home_dir(),
            fallback_dir: PathBuf::from("/tmp"),
        }
    }

    /// Resolve the base output filename.
    pub fn resolve_base_path(&self, explicit: Option<&str>) -> BasePath {
        if let Some(path) = explicit {
            return BasePath {
                path: expand_tilde(path, self.home_dir.as_deref()),
                source: OutputSource::Explicit,
            };
        }

        let resolved = [OutputSource::CurrentDir, OutputSource::HomeDir]
            .into_iter()
            .find_map(|source| {
                let dir = self.candidate_dir(source)?;
                is_usable_dir(dir).then(|| BasePath { path: dir.join(EDID_OUTPUT_FILE_NAME), source })
            })
            .unwrap_or_else(|| BasePath {
                path: self.fallback_dir.join(EDID_OUTPUT_FILE_NAME),
                source: OutputSource::Fallback,
            });

        debug!(path = %resolved.path.display(), source = ?resolved.source, "resolved output base path");
        resolved
    }

    fn candidate_dir(&self, source: OutputSource) -> Option<&Path> {
        match source {
            OutputSource::CurrentDir => Some(self.current_dir.as_path()),
            OutputSource::HomeDir => self.home_dir.as_deref(),
            OutputSource::Explicit | OutputSource::Fallback => None,
        }
    }
}

/// `$HOME`, or the invoking user's home directory from the account database.
pub fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME").filter(|home| !home.is_empty()).map(PathBuf::from).or_else(account_home_dir)
}

#[allow(deprecated)]
fn account_home_dir() -> Option<PathBuf> {
    env::home_dir()
}

/// Expand a leading `~` or `~/` to `home`. Other paths are returned unchanged.
pub fn expand_tilde(path: &str, home: Option<&Path>) -> PathBuf {
    match (path, home) {
        ("~", Some(home)) => home.to_path_buf(),
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}

/// Can we list and create files in `dir`?
pub fn is_usable_dir(dir: &Path) -> bool {
    dir.is_dir() && fs::read_dir(dir).is_ok() && tempfile::tempfile_in(dir).is_ok()
}

/// First of `base`, `base.0`, `base.1`, ... that does not exist yet.
pub fn unique_path(base: &Path) -> PathBuf {
    let mut candidate = base.to_path_buf();
    let mut suffix: u32 = 0;
    while candidate.exists() {
        let mut name: OsString = base.as_os_str().to_os_string();
        name.push(format!(".{suffix}"));
        candidate = PathBuf::from(name);
        suffix += 1;
    }
    candidate
}

/// Create `path` (mode 0644 on Unix), size it to the record, and copy the bytes in.
pub fn write_record(record: &EdidRecord, path: &Path) -> Result<(), WriteError> {
    let mut options = OpenOptions::new();
    options.read(true).write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options
        .open(path)
        .map_err(|source| WriteError::Create { path: path.to_path_buf(), source })?;
    file.set_len(record.size() as u64)
        .map_err(|source| WriteError::Size { path: path.to_path_buf(), source })?;
    file.write_all(&record.bytes)
        .and_then(|()| file.flush())
        .map_err(|source| WriteError::Copy { path: path.to_path_buf(), source })?;
    Ok(())
}

/// Result of writing one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    pub name: String,
    pub size: usize,
    pub sha256: String,
    pub path: PathBuf,
    /// Failure reason; `None` when the file was written.
    pub error: Option<String>,
}

impl WriteOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Write each record next to `base`, reporting one line per record.
///
/// A failed write is reported and the remaining records are still attempted.
pub fn write_records(
    records: Vec<EdidRecord>,
    base: &Path,
    report: &mut dyn Report,
) -> Vec<WriteOutcome> {
    records
        .into_iter()
        .map(|record| {
            let path = unique_path(base);
            let error = match write_record(&record, &path) {
                Ok(()) => {
                    report.info(&format!(
                        "  Wrote EDID for \"{}\" to \"{}\" ({} bytes).",
                        record.name,
                        path.display(),
                        record.size()
                    ));
                    None
                }
                Err(err) => {
                    report.error(&format!(
                        "Failed to write EDID for \"{}\" to \"{}\" ({})",
                        record.name,
                        path.display(),
                        err
                    ));
                    Some(err.to_string())
                }
            };
            WriteOutcome {
                size: record.size(),
                sha256: record.sha256_hex(),
                name: record.name,
                path,
                error,
            }
        })
        .collect()
}
