//! Parser for EDID byte dumps in verbose X server / driver logs.
//!
//! A dump looks like:
//!
//! ```text
//! (--) NVIDIA(0): Raw EDID bytes:
//! (--) NVIDIA(0):
//! (--) NVIDIA(0):   00 ff ff ff ff ff ff 00  5a 63 47 4b fc 27 00 00
//! (--) Dec 29 15:27:13 NVIDIA(GPU-0):   0f 0a 01 02 9e 1e 17 64  ee 04 85 a0 57 4a 9b 26
//! (--) NVIDIA(0):
//! (--) NVIDIA(0): --- End of EDID for Acme Display (DFP-1) ---
//! ```
//!
//! Every line after the header carries a log prefix that must be skipped,
//! optionally with a timestamp, followed by a `NVIDIA(<screen>):` or
//! `NVIDIA(GPU-<id>):` label. The footer is optional.

use tracing::debug;

use crate::classify::LOG_HEADER;
use crate::cursor::ByteCursor;
use crate::error::{ParseError, ParseResult};
use crate::hex::{decode_hex_stream, hex_nibble, is_space, HexStateMachine, Step};
use crate::model::{display_name, EdidRecord, UNKNOWN_DISPLAY_NAME};

/// Label prefix for GPU-scoped log lines. Must be tried before [`LABEL_PREFIX`].
pub const LABEL_GPU_PREFIX: &str = "NVIDIA(GPU";
/// Label prefix for screen-scoped log lines.
pub const LABEL_PREFIX: &str = "NVIDIA(";
pub const FOOTER_START: &str = "--- End of EDID for ";
pub const FOOTER_END: &str = " ---";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogState {
    TopNibble,
    BottomNibble,
    StartOfLabel,
    ScreenNumberInLabel,
    EndOfLabel,
}

#[derive(Debug)]
struct LogMachine {
    state: LogState,
}

impl HexStateMachine for LogMachine {
    fn step(&mut self, cursor: &mut ByteCursor<'_>) -> ParseResult<Step> {
        let offset = cursor.position();
        match self.state {
            LogState::TopNibble => match cursor.peek() {
                Some(b'\n') => {
                    self.state = LogState::StartOfLabel;
                    Ok(Step::Skip)
                }
                Some(byte) if is_space(byte) => Ok(Step::Skip),
                Some(byte) => match hex_nibble(byte) {
                    Some(nibble) => {
                        self.state = LogState::BottomNibble;
                        Ok(Step::HighNibble(nibble))
                    }
                    // Any other character ends the dump.
                    None => Ok(Step::Finish),
                },
                None => Ok(Step::Finish),
            },
            LogState::BottomNibble => match cursor.peek() {
                Some(byte) => match hex_nibble(byte) {
                    Some(nibble) => {
                        self.state = LogState::TopNibble;
                        Ok(Step::LowNibble(nibble))
                    }
                    None => Err(ParseError::MalformedHexPair { offset }),
                },
                None => Err(ParseError::EndOfInput),
            },
            LogState::StartOfLabel => match cursor.find_any(&[LABEL_GPU_PREFIX, LABEL_PREFIX]) {
                Some(0) => {
                    // NVIDIA(GPU-0)
                    cursor.match_literal("-");
                    self.state = LogState::ScreenNumberInLabel;
                    Ok(Step::Repositioned)
                }
                Some(_) => {
                    self.state = LogState::ScreenNumberInLabel;
                    Ok(Step::Repositioned)
                }
                None => Err(ParseError::MissingLabel { offset }),
            },
            LogState::ScreenNumberInLabel => match cursor.peek() {
                Some(byte) if byte.is_ascii_digit() => Ok(Step::Skip),
                Some(b')') => {
                    self.state = LogState::EndOfLabel;
                    Ok(Step::Skip)
                }
                _ => Err(ParseError::MalformedLabel { offset }),
            },
            LogState::EndOfLabel => match cursor.peek() {
                Some(b':') => {
                    self.state = LogState::TopNibble;
                    Ok(Step::Skip)
                }
                _ => Err(ParseError::MalformedLabel { offset }),
            },
        }
    }
}

/// Decode one EDID starting just after a `Raw EDID bytes:` header.
///
/// Reads the hex dump and then the optional footer; the footer must start
/// exactly where the dump ended. Without a footer the record is named
/// `"unknown"`.
pub fn parse_log_edid(cursor: &mut ByteCursor<'_>) -> ParseResult<EdidRecord> {
    let mut machine = LogMachine { state: LogState::TopNibble };
    let bytes = decode_hex_stream(cursor, &mut machine)?;
    let name = read_footer(cursor)?;
    Ok(EdidRecord::new(bytes, name))
}

fn read_footer(cursor: &mut ByteCursor<'_>) -> ParseResult<String> {
    if !cursor.match_literal(FOOTER_START) {
        return Ok(UNKNOWN_DISPLAY_NAME.to_string());
    }
    let offset = cursor.position();
    let span = cursor.take_until(FOOTER_END).ok_or(ParseError::MalformedFooter { offset })?;
    display_name(span, offset)
}

/// Find the next header from the cursor's position and decode the EDID after it.
///
/// Returns the offset just past the header together with the decode result,
/// or `None` once no further header exists. A failed attempt leaves the
/// cursor where decoding stopped, so the caller can keep searching.
pub fn next_log_edid(cursor: &mut ByteCursor<'_>) -> Option<(usize, ParseResult<EdidRecord>)> {
    if !cursor.find_literal(LOG_HEADER) {
        return None;
    }
    let header_end = cursor.position();
    let result = parse_log_edid(cursor);
    debug!(header_end, stopped_at = cursor.position(), ok = result.is_ok(), "log EDID attempt");
    Some((header_end, result))
}
