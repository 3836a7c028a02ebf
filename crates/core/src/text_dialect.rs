//! Parser for plain-text EDID table dumps.
//!
//! The byte table starts at the first byte of the file, sixteen bytes per row
//! with a dash between the eighth and ninth, and an ASCII rendering in a
//! trailing annotation column. A blank line ends the table; a `Monitor Name`
//! field further down names the display.
//!
//! ```text
//! 00 FF FF FF FF FF FF 00-06 10 F4 01 01 01 01 01    ................
//! 27 08 01 01 28 1F 17 96-E8 44 E4 A1 57 4A 97 23    '...(....D..WJ.#
//!
//! EDID Version                : 1.1
//! Monitor Name                : AppleStudio
//! ```
//!
//! Lines are CR-LF terminated.

use crate::cursor::ByteCursor;
use crate::error::{ParseError, ParseResult};
use crate::hex::{decode_hex_stream, hex_nibble, is_space, HexStateMachine, Step};
use crate::model::{display_name, EdidRecord};

pub const MONITOR_NAME_FIELD: &str = "Monitor Name";
const CRLF: &str = "\r\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextState {
    TopNibble,
    BottomNibble,
    EndOfLabel,
}

#[derive(Debug)]
struct TextMachine {
    state: TextState,
}

impl TextMachine {
    /// Cursor sits on a CR-LF: a second CR-LF ends the table, otherwise the
    /// next row starts.
    fn row_break(&mut self, cursor: &ByteCursor<'_>) -> Step {
        if cursor.peek_ahead(2) == Some(b'\r') && cursor.peek_ahead(3) == Some(b'\n') {
            Step::Finish
        } else {
            self.state = TextState::TopNibble;
            Step::Skip
        }
    }
}

fn at_crlf(cursor: &ByteCursor<'_>) -> bool {
    cursor.starts_with(CRLF.as_bytes())
}

impl HexStateMachine for TextMachine {
    fn step(&mut self, cursor: &mut ByteCursor<'_>) -> ParseResult<Step> {
        let offset = cursor.position();
        let Some(byte) = cursor.peek() else {
            return Err(ParseError::EndOfInput);
        };

        match self.state {
            TextState::TopNibble => {
                if let Some(nibble) = hex_nibble(byte) {
                    self.state = TextState::BottomNibble;
                    return Ok(Step::HighNibble(nibble));
                }
                if byte == b'-' {
                    return Ok(Step::Skip);
                }
                if at_crlf(cursor) {
                    return Ok(self.row_break(cursor));
                }
                if is_space(byte) {
                    // Two blanks in a row separate the bytes from the annotation column.
                    if cursor.peek_ahead(1).is_some_and(is_space) {
                        self.state = TextState::EndOfLabel;
                    }
                    return Ok(Step::Skip);
                }
                Err(ParseError::MalformedHexPair { offset })
            }
            TextState::BottomNibble => match hex_nibble(byte) {
                Some(nibble) => {
                    self.state = TextState::TopNibble;
                    Ok(Step::LowNibble(nibble))
                }
                None => Err(ParseError::MalformedHexPair { offset }),
            },
            TextState::EndOfLabel => {
                if at_crlf(cursor) {
                    return Ok(self.row_break(cursor));
                }
                // Whitespace and annotation text alike are passed over.
                Ok(Step::Skip)
            }
        }
    }
}

/// Decode the single EDID in a text dump and look up its monitor name.
pub fn parse_text_edid(data: &[u8]) -> ParseResult<EdidRecord> {
    let mut cursor = ByteCursor::new(data);
    let mut machine = TextMachine { state: TextState::TopNibble };
    let bytes = decode_hex_stream(&mut cursor, &mut machine)?;
    let name = read_monitor_name(data)?;
    Ok(EdidRecord::new(bytes, name))
}

/// Find `Monitor Name`, its `:` and the value after `": "` up to CR-LF.
fn read_monitor_name(data: &[u8]) -> ParseResult<String> {
    let mut cursor = ByteCursor::new(data);
    if !cursor.find_literal(MONITOR_NAME_FIELD) || !cursor.find_literal(":") {
        return Err(ParseError::MalformedFooter { offset: cursor.position() });
    }
    // The separator blank after the colon.
    if cursor.advance().is_err() {
        return Err(ParseError::MalformedFooter { offset: cursor.position() });
    }

    let offset = cursor.position();
    let span = cursor.take_until(CRLF).ok_or(ParseError::MalformedFooter { offset })?;
    display_name(span, offset)
}
