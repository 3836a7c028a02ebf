//! edid-core
//!
//! Core library for pulling raw EDID blocks out of text.
//!
//! Two input dialects are understood: verbose X server / driver logs, which
//! contain one `Raw EDID bytes:` hex dump per connected display, and
//! plain-text EDID tables. Each decoded EDID is written byte-for-byte to its
//! own `.bin` file.
//!
//! All substantive logic lives here so it is fully testable and reusable from
//! multiple frontends; the `extract-edids` CLI is a thin wrapper.

pub mod classify;
pub mod collect;
pub mod cursor;
pub mod error;
pub mod extract;
pub mod hex;
pub mod log_dialect;
pub mod manifest;
pub mod model;
pub mod output;
pub mod report;
pub mod text_dialect;

pub use classify::{classify, Dialect};
pub use collect::{collect_edids, AbandonedAttempt, Collection};
pub use error::{ExtractError, ParseError, WriteError, MAX_EDID_SIZE};
pub use extract::{extract_edids, ExtractOutcome, ExtractRequest};
pub use model::EdidRecord;
pub use output::OutputLocations;
pub use report::{CapturedReport, Level, Report};

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
