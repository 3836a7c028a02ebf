//! Gathering every EDID an input holds, in file order.

use tracing::debug;

use crate::classify::{classify, Dialect};
use crate::cursor::ByteCursor;
use crate::error::ParseError;
use crate::log_dialect::next_log_edid;
use crate::model::EdidRecord;
use crate::text_dialect::parse_text_edid;

/// An EDID that was located but could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbandonedAttempt {
    /// Where decoding began: just past the `Raw EDID bytes:` header for logs,
    /// the start of the file for text dumps.
    pub start: usize,
    pub error: ParseError,
}

/// Records found in one input, with the dialect they were read as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    pub dialect: Dialect,
    pub records: Vec<EdidRecord>,
    pub abandoned: Vec<AbandonedAttempt>,
}

/// Classify `data` and decode every EDID in it.
///
/// Log inputs may yield any number of records; a failed attempt is kept in
/// `abandoned` and scanning moves on to the next header. Text inputs yield at
/// most one record.
pub fn collect_edids(data: &[u8]) -> Collection {
    let dialect = classify(data);
    let (records, abandoned) = match dialect {
        Dialect::LogFormat => collect_log_edids(data),
        Dialect::TextFormat => match parse_text_edid(data) {
            Ok(record) => (vec![record], Vec::new()),
            Err(error) => {
                debug!(%error, "unable to decode text EDID dump");
                (Vec::new(), vec![AbandonedAttempt { start: 0, error }])
            }
        },
        Dialect::NoEdidFound => (Vec::new(), Vec::new()),
    };
    debug!(
        dialect = dialect.as_str(),
        records = records.len(),
        abandoned = abandoned.len(),
        "collected EDIDs"
    );
    Collection { dialect, records, abandoned }
}

/// Decode every `Raw EDID bytes:` block in a log, top to bottom.
pub fn collect_log_edids(data: &[u8]) -> (Vec<EdidRecord>, Vec<AbandonedAttempt>) {
    let mut cursor = ByteCursor::new(data);
    let mut records = Vec::new();
    let mut abandoned = Vec::new();

    while let Some((start, attempt)) = next_log_edid(&mut cursor) {
        match attempt {
            Ok(record) => records.push(record),
            Err(error) => {
                debug!(start, %error, "abandoning log EDID");
                abandoned.push(AbandonedAttempt { start, error });
            }
        }
    }

    (records, abandoned)
}
