//! Switch-string parsing: tokenize, then group into switches.
//!
//! Phase 1 drives the raw scanner over the whole input and cooks its
//! tokens into the two-variant [`Token`] union, unescaping quoted
//! content. The first ill-formed unit aborts tokenization, so grouping
//! never sees a fault. Phase 2 walks the tokens in order: a command
//! starts a switch, a literal becomes an argument of the most recently
//! started switch.
//!
//! Tokenizing the whole input before grouping preserves error
//! precedence: in `milk /Coffee` the bogus command is reported, not the
//! stray literal, because the literal is only a grouping-time error.

use std::fmt;

use switchyard_scan::{is_quote_char, unescape, RawToken, Scanner};
use tracing::{debug, trace};

use crate::error::SwitchError;

/// One parsed `/command arg...` unit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Switch {
    /// Command name, without the leading `/`.
    pub name: String,
    /// Arguments in input order. Order is significant and duplicates
    /// are allowed.
    pub args: Vec<String>,
}

impl Switch {
    /// A switch with no arguments yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }
}

/// Renders `/name arg...`, re-quoting any argument that is empty or
/// contains whitespace, a slash, or a quote glyph, and escaping
/// interior quote glyphs with a backslash.
///
/// For arguments free of control characters, the rendered text reparses
/// to an equal switch.
impl fmt::Display for Switch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.name)?;
        for arg in &self.args {
            f.write_str(" ")?;
            if needs_quoting(arg) {
                f.write_str("\"")?;
                for c in arg.chars() {
                    if is_quote_char(c) {
                        write!(f, "\\{c}")?;
                    } else {
                        write!(f, "{c}")?;
                    }
                }
                f.write_str("\"")?;
            } else {
                f.write_str(arg)?;
            }
        }
        Ok(())
    }
}

fn needs_quoting(arg: &str) -> bool {
    arg.is_empty()
        || arg
            .chars()
            .any(|c| c.is_ascii_whitespace() || c == '/' || is_quote_char(c))
}

/// Switches in input order: the parser's success output.
pub type SwitchList = Vec<Switch>;

/// Transient token produced between the tokenize and group phases.
enum Token {
    Command(String),
    Literal(String),
}

/// Parse a switch-string into its switches.
///
/// Empty or whitespace-only input yields an empty list, not an error.
/// Any ill-formed unit fails the whole parse; there are no partial
/// results.
pub fn parse_switches(input: &str) -> Result<SwitchList, SwitchError> {
    debug!(len = input.len(), "parse_switches");

    // Phase 1: tokenize the whole input.
    let mut scanner = Scanner::new(input);
    let mut tokens = Vec::new();
    loop {
        match scanner.next_token() {
            RawToken::Eof => break,
            RawToken::Command(name) => tokens.push(Token::Command(name.to_owned())),
            RawToken::Bareword(text) => tokens.push(Token::Literal(text.to_owned())),
            RawToken::Quoted { raw, escaped } => {
                let text = if escaped {
                    unescape(raw).into_owned()
                } else {
                    raw.to_owned()
                };
                tokens.push(Token::Literal(text));
            }
            RawToken::BogusCommand(text) => {
                return Err(SwitchError::BogusCommand(text.to_owned()));
            }
            RawToken::LoneSlash => return Err(SwitchError::LoneSlash),
            RawToken::SlashInBareword(text) => {
                trace!(text, "unquoted slash");
                return Err(SwitchError::SlashInArgument);
            }
            RawToken::Garbled(text) => {
                trace!(text, "garbled unit");
                return Err(SwitchError::Incomprehensible);
            }
        }
    }

    // Phase 2: group literals under the most recent command.
    let mut switches: SwitchList = Vec::new();
    for token in tokens {
        match token {
            Token::Command(name) => {
                trace!(name = name.as_str(), "switch");
                switches.push(Switch::new(name));
            }
            Token::Literal(text) => match switches.last_mut() {
                Some(switch) => switch.args.push(text),
                None => return Err(SwitchError::TextBeforeSwitch),
            },
        }
    }
    Ok(switches)
}
