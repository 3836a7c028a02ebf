//! Forward-only cursor over a fully loaded input buffer.

use crate::error::{ParseError, ParseResult};

/// Read-only view over the input plus a position.
///
/// Invariant: `0 <= position <= data.len()`. The cursor only moves forward
/// except through [`ByteCursor::rewind_to`], which dialect parsers use to
/// restart a search from a position they saved earlier.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.data.len()
    }

    /// Bytes from the current position to the end of input.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.position..]
    }

    /// Current byte, or `None` at end of input.
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.position).copied()
    }

    /// Byte `n` positions ahead of the current one, or `None` past the end.
    pub fn peek_ahead(&self, n: usize) -> Option<u8> {
        self.position.checked_add(n).and_then(|idx| self.data.get(idx)).copied()
    }

    /// Move one byte forward.
    pub fn advance(&mut self) -> ParseResult<()> {
        if self.is_at_end() {
            return Err(ParseError::EndOfInput);
        }
        self.position += 1;
        Ok(())
    }

    /// Move back (or forward) to a previously observed position.
    ///
    /// Positions past the end are clamped to the end of input.
    pub fn rewind_to(&mut self, position: usize) {
        self.position = position.min(self.data.len());
    }

    /// Does `literal` occur exactly at the current position?
    pub fn starts_with(&self, literal: &[u8]) -> bool {
        self.remaining().starts_with(literal)
    }

    /// Consume `literal` if it sits at the current position.
    ///
    /// On a mismatch the cursor is left untouched.
    pub fn match_literal(&mut self, literal: &str) -> bool {
        if self.starts_with(literal.as_bytes()) {
            self.position += literal.len();
            true
        } else {
            false
        }
    }

    /// Scan forward until `literal` is found and stop just past it.
    ///
    /// On exhaustion the cursor is left at end of input and `false` is returned.
    pub fn find_literal(&mut self, literal: &str) -> bool {
        self.find_any(&[literal]).is_some()
    }

    /// Scan forward for the first position where any of `literals` matches.
    ///
    /// At each position the literals are tried in the given order, so a longer
    /// literal listed first wins over a shorter prefix of it. Returns the index
    /// of the literal that matched, with the cursor just past it.
    pub fn find_any(&mut self, literals: &[&str]) -> Option<usize> {
        while !self.is_at_end() {
            for (idx, literal) in literals.iter().enumerate() {
                if self.match_literal(literal) {
                    return Some(idx);
                }
            }
            self.position += 1;
        }
        None
    }

    /// Consume bytes up to (not including) the next occurrence of `literal`.
    ///
    /// Returns the consumed span and leaves the cursor just past `literal`.
    /// On exhaustion returns `None` and leaves the cursor at end of input.
    pub fn take_until(&mut self, literal: &str) -> Option<&'a [u8]> {
        let start = self.position;
        let data = self.data;
        while !self.is_at_end() {
            if self.starts_with(literal.as_bytes()) {
                let span = &data[start..self.position];
                self.position += literal.len();
                return Some(span);
            }
            self.position += 1;
        }
        None
    }
}
