//! Input dialect detection.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cursor::ByteCursor;

/// Literal that only the verbose X server log emits before a byte dump.
pub const LOG_HEADER: &str = "Raw EDID bytes:";

/// Literal present in plain-text EDID dumps.
pub const TEXT_MARKER: &str = "EDID Version";

/// Which textual encoding of an EDID dump an input uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dialect {
    /// Verbose driver / X server log (`Raw EDID bytes:` headers).
    #[serde(rename = "log")]
    LogFormat,
    /// Plain-text table dump (`EDID Version` field).
    #[serde(rename = "text")]
    TextFormat,
    /// Neither marker is present. Not an error.
    #[serde(rename = "none")]
    NoEdidFound,
}

impl Dialect {
    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::LogFormat => "log",
            Dialect::TextFormat => "text",
            Dialect::NoEdidFound => "none",
        }
    }
}

/// Decide which dialect `data` is written in.
///
/// The log header is checked first: a log can mention "EDID Version" in
/// passing, but a text dump never contains the log header.
pub fn classify(data: &[u8]) -> Dialect {
    let dialect = if ByteCursor::new(data).find_literal(LOG_HEADER) {
        Dialect::LogFormat
    } else if ByteCursor::new(data).find_literal(TEXT_MARKER) {
        Dialect::TextFormat
    } else {
        Dialect::NoEdidFound
    };
    debug!(dialect = dialect.as_str(), len = data.len(), "classified input");
    dialect
}
