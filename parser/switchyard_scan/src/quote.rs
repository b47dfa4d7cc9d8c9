//! Quoted-run recognition shared across every grammar in the system.
//!
//! A quoted run is delimited by a straight double quote (`"`) or one of
//! the Unicode "smart" double quotes (U+201C, U+201D). Any of the three
//! glyphs opens a run and any of the three closes it; openers and
//! closers are not pair-matched, so text pasted from a word processor
//! (`“Blind Tiger”`) scans the same as hand-typed input.
//!
//! Inside a run, a backslash followed by a quote glyph stands for that
//! glyph. A backslash followed by anything else is ordinary content.
//! A raw control character, or a run with no closing glyph before the
//! end of input, is not a quoted run at all.
//!
//! Recognition ([`match_quoted`]) and escape resolution ([`unescape`])
//! are separate steps: matching borrows the raw content with escapes
//! intact, and unescaping allocates only when there is an escape to
//! rewrite.

use std::borrow::Cow;

/// True for the three glyphs that delimit a quoted run.
#[inline]
pub fn is_quote_char(c: char) -> bool {
    matches!(c, '"' | '\u{201C}' | '\u{201D}')
}

/// A successfully recognized quoted run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuotedRun<'a> {
    /// Content between the delimiters, escapes intact.
    pub raw: &'a str,
    /// Total bytes consumed from the input, including both delimiters.
    pub len: usize,
    /// Whether `raw` contains at least one backslash escape.
    pub escaped: bool,
}

/// Match a quoted run anchored at the start of `input`.
///
/// Returns `None` when `input` does not begin with a quote glyph, when
/// the run contains a raw control character, or when no closing glyph
/// appears before the end of input. Callers treat `None` as "this is
/// not a quoted run" and fall back to their next pattern.
pub fn match_quoted(input: &str) -> Option<QuotedRun<'_>> {
    let open = input.chars().next().filter(|&c| is_quote_char(c))?;
    let content_start = open.len_utf8();
    let rest = &input[content_start..];

    let mut escaped = false;
    let mut iter = rest.char_indices().peekable();
    while let Some((idx, c)) = iter.next() {
        if c == '\\' {
            if let Some(&(_, next)) = iter.peek() {
                if is_quote_char(next) {
                    escaped = true;
                    iter.next();
                    continue;
                }
            }
            // Backslash without a quote glyph after it: ordinary content.
        } else if is_quote_char(c) {
            return Some(QuotedRun {
                raw: &rest[..idx],
                len: content_start + idx + c.len_utf8(),
                escaped,
            });
        } else if c.is_control() {
            return None;
        }
    }
    None
}

/// Resolve the backslash escapes of a quoted run's raw content.
///
/// Borrows when the content contains no backslash. A backslash before a
/// quote glyph is dropped, leaving the glyph; any other backslash is
/// kept as-is.
pub fn unescape(raw: &str) -> Cow<'_, str> {
    if !raw.contains('\\') {
        return Cow::Borrowed(raw);
    }
    let mut out = String::with_capacity(raw.len());
    let mut iter = raw.chars().peekable();
    while let Some(c) = iter.next() {
        if c == '\\' {
            if let Some(&next) = iter.peek() {
                if is_quote_char(next) {
                    out.push(next);
                    iter.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    fn quoted(input: &str) -> QuotedRun<'_> {
        let Some(run) = match_quoted(input) else {
            panic!("expected a quoted run in {input:?}");
        };
        run
    }

    // === Recognition ===

    #[test]
    fn ascii_quotes_delimit_a_run() {
        let run = quoted("\"hello\" rest");
        assert_eq!(run.raw, "hello");
        assert_eq!(run.len, 7);
        assert!(!run.escaped);
    }

    #[test]
    fn empty_run_is_valid() {
        let run = quoted("\"\"");
        assert_eq!(run.raw, "");
        assert_eq!(run.len, 2);
    }

    #[test]
    fn smart_quotes_delimit_a_run() {
        let run = quoted("\u{201C}Blind Tiger\u{201D} rest");
        assert_eq!(run.raw, "Blind Tiger");
        // 3 bytes per smart quote, 11 bytes of content
        assert_eq!(run.len, 17);
    }

    #[test]
    fn any_glyph_closes_any_opener() {
        assert_eq!(quoted("\u{201C}abc\"").raw, "abc");
        assert_eq!(quoted("\"abc\u{201D}").raw, "abc");
        assert_eq!(quoted("\u{201D}abc\u{201C}").raw, "abc");
    }

    #[test]
    fn non_quote_start_is_no_match() {
        assert_eq!(match_quoted("hello"), None);
        assert_eq!(match_quoted(""), None);
        assert_eq!(match_quoted("x\"quoted\""), None);
    }

    #[test]
    fn unterminated_run_is_no_match() {
        assert_eq!(match_quoted("\"hello"), None);
        assert_eq!(match_quoted("\""), None);
    }

    #[test]
    fn raw_control_character_is_no_match() {
        assert_eq!(match_quoted("\"he\tllo\""), None);
        assert_eq!(match_quoted("\"he\nllo\""), None);
        assert_eq!(match_quoted("\"he\x00llo\""), None);
    }

    // === Escapes ===

    #[test]
    fn escaped_quote_does_not_close_the_run() {
        let run = quoted(r#""say \"hi\"" rest"#);
        assert_eq!(run.raw, r#"say \"hi\""#);
        assert!(run.escaped);
    }

    #[test]
    fn escaped_smart_quote_does_not_close_the_run() {
        let run = quoted("\"a\\\u{201D}b\"");
        assert_eq!(run.raw, "a\\\u{201D}b");
        assert!(run.escaped);
    }

    #[test]
    fn lone_backslash_is_ordinary_content() {
        let run = quoted(r#""a\b""#);
        assert_eq!(run.raw, r"a\b");
        assert!(!run.escaped);
    }

    #[test]
    fn trailing_backslash_leaves_run_unterminated() {
        // The escape consumes the would-be closing glyph.
        assert_eq!(match_quoted(r#""abc\""#), None);
    }

    #[test]
    fn backslash_before_control_character_is_no_match() {
        assert_eq!(match_quoted("\"a\\\tb\""), None);
    }

    // === Unescaping ===

    #[test]
    fn unescape_without_escapes_borrows() {
        assert!(matches!(unescape("hello"), Cow::Borrowed("hello")));
    }

    #[test]
    fn unescape_drops_backslash_before_quote_glyphs() {
        assert_eq!(unescape(r#"say \"hi\""#), r#"say "hi""#);
        assert_eq!(unescape("a\\\u{201C}b"), "a\u{201C}b");
    }

    #[test]
    fn unescape_keeps_other_backslashes() {
        assert_eq!(unescape(r"a\b"), r"a\b");
        assert_eq!(unescape(r"trailing\"), r"trailing\");
    }

    // === Properties ===

    proptest! {
        #[test]
        fn plain_content_round_trips(content in "[a-zA-Z0-9 ,.!?_-]{0,40}") {
            let input = format!("\"{content}\"");
            let run = match_quoted(&input);
            prop_assert!(run.is_some());
            if let Some(run) = run {
                prop_assert_eq!(run.raw, content.as_str());
                prop_assert_eq!(run.len, input.len());
                prop_assert!(!run.escaped);
                prop_assert_eq!(unescape(run.raw), content.as_str());
            }
        }

        #[test]
        fn escaped_content_round_trips(words in proptest::collection::vec("[a-z]{0,6}", 1..5)) {
            // Interleave the words with escaped quote glyphs.
            let content = words.join("\\\"");
            let expected = words.join("\"");
            let input = format!("\"{content}\"");
            let run = match_quoted(&input);
            prop_assert!(run.is_some());
            if let Some(run) = run {
                prop_assert_eq!(run.escaped, words.len() > 1);
                prop_assert_eq!(unescape(run.raw).into_owned(), expected);
            }
        }
    }
}
