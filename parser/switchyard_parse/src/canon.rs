//! In-place canonicalization of switch and hunk names.

use rustc_hash::FxHashMap;

use crate::colon::Hunk;
use crate::switch::Switch;

/// Anything that leads with a rewritable name: a switch's command or a
/// hunk's key.
pub trait Named {
    /// Mutable access to the leading name.
    fn name_mut(&mut self) -> &mut String;
}

impl Named for Switch {
    fn name_mut(&mut self) -> &mut String {
        &mut self.name
    }
}

impl Named for Hunk {
    fn name_mut(&mut self) -> &mut String {
        &mut self.key
    }
}

/// Rewrite every entry's name to its canonical form: the alias-mapped
/// value when the fold-cased name is a key in `aliases`, the fold-cased
/// name otherwise.
///
/// Fold-casing is full Unicode lowercasing, not ASCII-only. Arguments
/// and values are never touched, the list length never changes, and the
/// rewrite cannot fail. Canonicalizing twice with the same aliases is a
/// no-op the second time whenever the alias values are themselves
/// fold-cased fixed points.
pub fn canonicalize_names<N: Named>(entries: &mut [N], aliases: &FxHashMap<String, String>) {
    for entry in entries {
        let name = entry.name_mut();
        let folded = name.to_lowercase();
        *name = match aliases.get(&folded) {
            Some(canonical) => canonical.clone(),
            None => folded,
        };
    }
}
