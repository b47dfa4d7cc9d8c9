//! Error type for switch-string parsing.

use thiserror::Error;

/// Why a switch-string failed to parse.
///
/// All failures are fatal: parsing stops at the first error and no
/// partial result is returned. The rendered message is user-facing
/// diagnostic text, not a stable interface; match on the variant, never
/// on the text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SwitchError {
    /// `/name` with characters outside ASCII lowercase and hyphen.
    #[error("bogus /command: /{0}")]
    BogusCommand(String),
    /// A `/` with no command name attached.
    #[error("bogus input: / with no command!")]
    LoneSlash,
    /// An unquoted argument containing a `/`.
    #[error("unquoted arguments may not contain slash")]
    SlashInArgument,
    /// A literal before any command.
    #[error("text with no switch")]
    TextBeforeSwitch,
    /// Input that matched no recognized token shape.
    #[error("incomprehensible input")]
    Incomprehensible,
}
