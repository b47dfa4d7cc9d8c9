//! Low-level scanning primitives for command-bar input.
//!
//! This crate is standalone: it knows how to walk a single in-memory
//! string and classify its whitespace-delimited units, and nothing else.
//! The pieces:
//!
//! - [`Cursor`]: a `Copy` byte cursor with memchr-accelerated boundary
//!   scans, plus the shared whitespace classifier ([`is_whitespace`],
//!   [`trim_leading`]) that keeps unit boundaries consistent across
//!   every grammar built on top.
//! - [`match_quoted`] / [`unescape`]: recognition and escape resolution
//!   for quoted runs delimited by straight or "smart" double quotes.
//! - [`Scanner`]: the raw token scanner for switch-strings, producing
//!   one [`RawToken`] per unit.
//!
//! Grouping tokens into switches, the colonstring grammar, and name
//! canonicalization live in `switchyard_parse`.

mod cursor;
mod quote;
mod scanner;

pub use cursor::{is_whitespace, trim_leading, Cursor};
pub use quote::{is_quote_char, match_quoted, unescape, QuotedRun};
pub use scanner::{RawToken, Scanner};
