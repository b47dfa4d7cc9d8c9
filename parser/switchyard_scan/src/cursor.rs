//! Byte cursor over a single in-memory input string.
//!
//! The cursor advances through the input byte-by-byte. Reads at or past
//! the end of input return `0x00`, so classification predicates (which
//! never accept `0x00`) terminate scanning loops without a bounds check
//! at every call site. The cursor is [`Copy`], enabling cheap snapshots
//! for backtracking between ordered pattern attempts.
//!
//! Command-bar input is one short line, so positions are plain `usize`
//! byte offsets into the borrowed string.

use memchr::{memchr2, memchr3};

/// Returns the earliest (minimum) of two optional byte offsets.
///
/// Used to combine results from separate memchr calls when the needle
/// set is larger than a single `memchr3` supports.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// True for the ASCII whitespace bytes that separate units of input:
/// space, tab, line feed, form feed, carriage return.
///
/// Both grammars share this classifier, so a unit boundary means the
/// same thing everywhere.
#[inline]
pub fn is_whitespace(byte: u8) -> bool {
    byte.is_ascii_whitespace()
}

/// Strip leading ASCII whitespace from `text`.
#[inline]
pub fn trim_leading(text: &str) -> &str {
    text.trim_start_matches(|c: char| c.is_ascii_whitespace())
}

/// Byte cursor over borrowed input.
///
/// Created with [`Cursor::new`]. `Copy` allows callers to snapshot the
/// cursor before a speculative match and restore it on failure.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Byte at the current position, or `0x00` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.input.as_bytes().get(self.pos).copied().unwrap_or(0)
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// True once the cursor has consumed the whole input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Remaining input from the current position.
    ///
    /// # Contract
    ///
    /// The current position must lie on a character boundary. Every
    /// advance in this crate stops on an ASCII byte or a character
    /// width, so the contract holds for scanner-driven cursors.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Input substring from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.input[start..self.pos]
    }

    /// Advance while `pred` accepts the current byte.
    ///
    /// `pred(0x00)` must be false; the end-of-input read then stops the
    /// loop naturally.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance past ASCII whitespace.
    pub fn eat_whitespace(&mut self) {
        self.eat_while(is_whitespace);
    }

    /// Advance to the next ASCII whitespace byte, or end of input.
    ///
    /// Returns the number of bytes consumed. The five whitespace bytes
    /// need two memchr searches, combined with [`earliest_of`].
    pub fn eat_to_whitespace(&mut self) -> usize {
        let remaining = &self.input.as_bytes()[self.pos.min(self.input.len())..];
        let primary = memchr3(b' ', b'\t', b'\n', remaining);
        let secondary = memchr2(b'\r', 0x0C, remaining);
        let offset = earliest_of(primary, secondary).unwrap_or(remaining.len());
        self.pos += offset;
        offset
    }
}
