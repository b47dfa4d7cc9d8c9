//! Colonstring parsing: greedy `key:value` hunks with a pluggable
//! fallback for everything else.
//!
//! The parser repeatedly strips leading whitespace and tries to match
//! `key(:value)+` anchored at the front of the remaining text. Matched
//! runs become [`Hunk`]s; unmatched spans go to the caller's
//! [`Fallback`], which consumes some prefix of the text and produces a
//! hunk of its own. A progress guard compares the remaining length each
//! iteration and aborts the parse when nothing was consumed, so a
//! misbehaving or absent fallback cannot loop forever.

use switchyard_scan::{is_quote_char, match_quoted, trim_leading, unescape};
use tracing::{debug, trace};

/// One parsed `key:value...` unit, or one fallback-produced unit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hunk {
    /// The key: a matched identifier, or whatever tag the fallback
    /// chose.
    pub key: String,
    /// Values in input order.
    pub values: Vec<String>,
}

/// Hunks in input order: the parser's success output.
pub type HunkList = Vec<Hunk>;

/// Consumes a prefix of text the colonstring grammar did not match.
///
/// The implementation must remove at least one character from `rest`
/// (by reslicing it forward) and return the hunk that stands for the
/// consumed text. An implementation that leaves `rest` untouched trips
/// the parser's progress guard and aborts the parse.
pub trait Fallback {
    /// Consume a prefix of `rest` and produce its hunk.
    fn consume(&mut self, rest: &mut &str) -> Hunk;
}

/// Built-in [`Fallback`] that consumes one whitespace-delimited word
/// and tags it with a fixed key.
#[derive(Clone, Debug)]
pub struct LiteralTag {
    tag: String,
}

impl LiteralTag {
    /// A fallback producing `[tag, word]` hunks.
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }
}

impl Fallback for LiteralTag {
    fn consume(&mut self, rest: &mut &str) -> Hunk {
        let text = *rest;
        let end = text
            .bytes()
            .position(|b| b.is_ascii_whitespace())
            .unwrap_or(text.len());
        let (word, tail) = text.split_at(end);
        *rest = tail;
        Hunk {
            key: self.tag.clone(),
            values: vec![word.to_owned()],
        }
    }
}

/// Adapter implementing [`Fallback`] for a closure. Built with
/// [`fallback_fn`].
pub struct FallbackFn<F>(F);

/// Wrap a closure as a [`Fallback`].
pub fn fallback_fn<F>(f: F) -> FallbackFn<F>
where
    F: FnMut(&mut &str) -> Hunk,
{
    FallbackFn(f)
}

impl<F> Fallback for FallbackFn<F>
where
    F: FnMut(&mut &str) -> Hunk,
{
    fn consume(&mut self, rest: &mut &str) -> Hunk {
        (self.0)(rest)
    }
}

/// Parse colonstring input into hunks, delegating unmatched spans to
/// `fallback`.
///
/// Returns `None` when an iteration consumes no input: either no
/// fallback was supplied and the grammar did not match, or the fallback
/// failed to consume anything. `None` is distinct from `Some(vec![])`,
/// which is the successful parse of empty input.
///
/// Without a fallback the parser does not guess how much unmatched text
/// to discard; callers that want skip-a-word behavior say so with
/// [`LiteralTag`] or their own [`Fallback`].
pub fn parse_colonstrings(input: &str, mut fallback: Option<&mut dyn Fallback>) -> Option<HunkList> {
    debug!(len = input.len(), "parse_colonstrings");

    let mut hunks: HunkList = Vec::new();
    let mut rest = input;
    loop {
        rest = trim_leading(rest);
        if rest.is_empty() {
            return Some(hunks);
        }
        let len_before = rest.len();
        if let Some((hunk, consumed)) = match_colonstring(rest) {
            trace!(key = hunk.key.as_str(), values = hunk.values.len(), "hunk");
            hunks.push(hunk);
            rest = &rest[consumed..];
        } else if let Some(fb) = fallback.as_mut() {
            hunks.push(fb.consume(&mut rest));
        }
        if rest.len() == len_before {
            trace!(remaining = rest.len(), "no forward progress");
            return None;
        }
    }
}

/// True for bytes allowed in a hunk key.
#[inline]
fn is_key_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Match `key(:value)+` anchored at the start of `text`, requiring a
/// whitespace-or-end boundary after the last value. Returns the hunk
/// and the number of bytes consumed.
///
/// Values are either quoted runs (unescaped into the hunk) or runs of
/// characters that are not `:`, not a quote glyph, and not whitespace
/// (taken verbatim). A `:` followed by neither form, or a final value
/// not ending at a boundary, fails the whole match; there are no
/// partial hunks.
fn match_colonstring(text: &str) -> Option<(Hunk, usize)> {
    let bytes = text.as_bytes();
    let key_end = bytes
        .iter()
        .position(|&b| !is_key_byte(b))
        .unwrap_or(bytes.len());
    if key_end == 0 {
        return None;
    }

    let mut pos = key_end;
    let mut values = Vec::new();
    while bytes.get(pos) == Some(&b':') {
        let val_start = pos + 1;
        if let Some(run) = match_quoted(&text[val_start..]) {
            values.push(unescape(run.raw).into_owned());
            pos = val_start + run.len;
            continue;
        }
        let val_len = unquoted_value_len(&text[val_start..]);
        if val_len == 0 {
            return None;
        }
        values.push(text[val_start..val_start + val_len].to_owned());
        pos = val_start + val_len;
    }
    if values.is_empty() {
        return None;
    }
    match bytes.get(pos) {
        None => {}
        Some(b) if b.is_ascii_whitespace() => {}
        Some(_) => return None,
    }

    let key = text[..key_end].to_owned();
    Some((Hunk { key, values }, pos))
}

/// Length in bytes of an unquoted value: the run of characters that are
/// not `:`, not a quote glyph, and not whitespace.
fn unquoted_value_len(text: &str) -> usize {
    text.char_indices()
        .find(|&(_, c)| c == ':' || is_quote_char(c) || c.is_ascii_whitespace())
        .map_or(text.len(), |(idx, _)| idx)
}
