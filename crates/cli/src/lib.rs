pub mod commands;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use edid_core::output::{expand_tilde, home_dir};
use edid_core::{Level, Report};
use tracing_subscriber::EnvFilter;

/// Expand `~` in a user-supplied path and reject empty strings.
pub fn resolve_user_path(path: &str) -> Result<PathBuf> {
    if path.trim().is_empty() {
        return Err(anyhow!("Path must not be empty"));
    }
    Ok(expand_tilde(path, home_dir().as_deref()))
}

/// Install the stderr tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or debug
/// events with `verbose`. Calling this twice is harmless.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Report sink that prints to the terminal.
///
/// Info lines go to stdout, or to stderr when stdout is reserved for JSON.
#[derive(Debug, Default)]
pub struct ConsoleReport {
    pub info_to_stderr: bool,
}

impl ConsoleReport {
    pub fn new(info_to_stderr: bool) -> Self {
        Self { info_to_stderr }
    }
}

impl Report for ConsoleReport {
    fn report(&mut self, level: Level, message: &str) {
        match level {
            Level::Info if !self.info_to_stderr => println!("{message}"),
            Level::Info => eprintln!("{message}"),
            Level::Warning => eprintln!("WARNING: {message}"),
            Level::Error => eprintln!("ERROR: {message}"),
        }
        let _ = std::io::stdout().flush();
    }
}
