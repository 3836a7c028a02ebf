//! Shared hex byte-stream decoding.
//!
//! Both dialects read pairs of ASCII hex digits as high/low nibbles and differ
//! only in what they skip between pairs and how they recognise the end of the
//! dump. Each dialect supplies a [`HexStateMachine`]; [`decode_hex_stream`]
//! drives it and owns byte accumulation and the size limit.

use crate::cursor::ByteCursor;
use crate::error::{ParseError, ParseResult, MAX_EDID_SIZE};

/// What a state machine wants done with the byte under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Store the value as the high nibble of the next byte and advance.
    HighNibble(u8),
    /// Store the value as the low nibble, completing a byte, and advance.
    LowNibble(u8),
    /// Ignore the current byte and advance.
    Skip,
    /// The machine already moved the cursor itself (e.g. searched for a label).
    Repositioned,
    /// The byte stream is complete; the cursor stays on the terminating byte.
    Finish,
}

/// One dialect's view of a hex dump.
pub trait HexStateMachine {
    /// Inspect the cursor and choose the next action, updating internal state.
    fn step(&mut self, cursor: &mut ByteCursor<'_>) -> ParseResult<Step>;
}

/// Value of an ASCII hex digit, if `byte` is one.
pub fn hex_nibble(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Whitespace as C's `isspace` sees it, including vertical tab.
pub fn is_space(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == 0x0b
}

#[derive(Debug, Default)]
struct ByteAccumulator {
    bytes: Vec<u8>,
    high: u8,
}

impl ByteAccumulator {
    fn push_high(&mut self, nibble: u8) {
        self.high = nibble << 4;
    }

    fn push_low(&mut self, nibble: u8) -> ParseResult<()> {
        if self.bytes.len() >= MAX_EDID_SIZE {
            return Err(ParseError::EdidTooLarge { limit: MAX_EDID_SIZE });
        }
        self.bytes.push(self.high | nibble);
        self.high = 0;
        Ok(())
    }
}

/// Run `machine` from the cursor's position until it finishes.
///
/// Returns the decoded bytes. An empty result is rejected with
/// [`ParseError::EmptyEdid`].
pub fn decode_hex_stream<M: HexStateMachine>(
    cursor: &mut ByteCursor<'_>,
    machine: &mut M,
) -> ParseResult<Vec<u8>> {
    let start = cursor.position();
    let mut acc = ByteAccumulator::default();

    loop {
        match machine.step(cursor)? {
            Step::HighNibble(nibble) => {
                acc.push_high(nibble);
                cursor.advance()?;
            }
            Step::LowNibble(nibble) => {
                acc.push_low(nibble)?;
                cursor.advance()?;
            }
            Step::Skip => cursor.advance()?,
            Step::Repositioned => {}
            Step::Finish => break,
        }
    }

    if acc.bytes.is_empty() {
        return Err(ParseError::EmptyEdid { offset: start });
    }
    Ok(acc.bytes)
}
