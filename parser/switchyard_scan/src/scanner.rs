//! Raw token scanner for switch-string input.
//!
//! The scanner walks the input with an explicit [`Cursor`] and
//! classifies one whitespace-delimited unit per call. Pattern attempts
//! are ordered: a leading `/` is always read as a command (well-formed
//! or not), a leading quote glyph is tried as a quoted run before
//! falling back to a bare word, and everything else is a bare word.
//!
//! Ill-formed units are reported as dedicated [`RawToken`] variants
//! rather than through a separate error channel; the grouping layer
//! decides how to surface them.

use crate::cursor::{is_whitespace, Cursor};
use crate::quote::{is_quote_char, match_quoted};

/// One scanned unit of switch-string input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RawToken<'a> {
    /// `/name` where the name is ASCII lowercase letters and hyphens.
    /// Carries the name without the leading slash.
    Command(&'a str),
    /// An unquoted run of non-whitespace characters, slash-free.
    Bareword(&'a str),
    /// A quoted run ending on a unit boundary. `raw` is the content
    /// between the delimiters, escapes intact.
    Quoted {
        raw: &'a str,
        escaped: bool,
    },
    /// `/name` where the name strayed outside `[-a-z]`. Carries the
    /// full run after the slash.
    BogusCommand(&'a str),
    /// A `/` with nothing attached to it.
    LoneSlash,
    /// An unquoted run containing a `/` past its start.
    SlashInBareword(&'a str),
    /// A unit that matched no recognized shape. Not reachable from the
    /// byte dispatch; kept as a guard so a scanner bug surfaces as a
    /// token instead of a spin.
    Garbled(&'a str),
    /// End of input. Repeats on further calls.
    Eof,
}

/// Scanner producing [`RawToken`]s from switch-string input.
#[derive(Debug)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }

    /// Scan the next unit, skipping leading whitespace.
    pub fn next_token(&mut self) -> RawToken<'a> {
        self.cursor.eat_whitespace();
        if self.cursor.is_eof() {
            return RawToken::Eof;
        }
        match self.cursor.current() {
            b'/' => self.command(),
            _ => self.quoted_or_bareword(),
        }
    }

    /// `/` followed by a command name, a malformed name, or nothing.
    fn command(&mut self) -> RawToken<'a> {
        let start = self.cursor.pos();
        self.cursor.advance(); // the slash
        self.cursor
            .eat_while(|b| b.is_ascii_lowercase() || b == b'-');
        let at_boundary = self.cursor.is_eof() || is_whitespace(self.cursor.current());
        let name = self.cursor.slice_from(start + 1);
        if at_boundary {
            if name.is_empty() {
                return RawToken::LoneSlash;
            }
            return RawToken::Command(name);
        }
        // The name ran into a character outside [-a-z]. Take the whole
        // non-whitespace run as the malformed command text.
        self.cursor.eat_to_whitespace();
        RawToken::BogusCommand(self.cursor.slice_from(start + 1))
    }

    /// A quoted run when one is anchored here and ends on a unit
    /// boundary, otherwise a bare word.
    fn quoted_or_bareword(&mut self) -> RawToken<'a> {
        let saved = self.cursor;
        if self
            .cursor
            .rest()
            .chars()
            .next()
            .is_some_and(is_quote_char)
        {
            if let Some(run) = match_quoted(self.cursor.rest()) {
                self.cursor.advance_n(run.len);
                if self.cursor.is_eof() || is_whitespace(self.cursor.current()) {
                    return RawToken::Quoted {
                        raw: run.raw,
                        escaped: run.escaped,
                    };
                }
            }
            // Unterminated, or the closing glyph was not at a unit
            // boundary. Rescan the run as a bare word.
            self.cursor = saved;
        }
        self.bareword()
    }

    fn bareword(&mut self) -> RawToken<'a> {
        let start = self.cursor.pos();
        self.cursor.eat_to_whitespace();
        let text = self.cursor.slice_from(start);
        if text.is_empty() {
            return RawToken::Garbled(self.cursor.rest());
        }
        if text.contains('/') {
            return RawToken::SlashInBareword(text);
        }
        RawToken::Bareword(text)
    }
}
