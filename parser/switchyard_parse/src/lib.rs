//! Switch-string and colonstring parsing for command-bar input.
//!
//! Two small grammars over free-form text:
//!
//! - **Switch-strings**: `/coffee /milk soy /brand "Blind Tiger"`
//!   becomes an ordered [`SwitchList`], each [`Switch`] a command name
//!   with its arguments. See [`parse_switches`].
//! - **Colonstrings**: `foo:bar quux:"Trail Mix"` becomes an ordered
//!   [`HunkList`], each [`Hunk`] a key with its values; spans the
//!   grammar does not match are handed to a caller-supplied
//!   [`Fallback`]. See [`parse_colonstrings`].
//!
//! Parsed names normalize in place through [`canonicalize_names`],
//! which fold-cases and applies an alias table.
//!
//! # Example
//!
//! ```text
//! let mut switches = parse_switches("/milk soy /BRand \"Blind Tiger\"")?;
//! canonicalize_names(&mut switches, &aliases);
//! // dispatch the switches to application logic
//! ```
//!
//! Quoting semantics (straight and "smart" double quotes, backslash
//! escapes) are shared between both grammars through the
//! `switchyard_scan` crate.

mod canon;
mod colon;
mod error;
mod switch;

pub use canon::{canonicalize_names, Named};
pub use colon::{fallback_fn, parse_colonstrings, Fallback, FallbackFn, Hunk, HunkList, LiteralTag};
pub use error::SwitchError;
pub use switch::{parse_switches, Switch, SwitchList};
