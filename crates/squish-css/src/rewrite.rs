//! Delimiter-bounded selector rewriting inside stylesheet text.
//!
//! Rewriting is literal substring substitution, not selector parsing. A
//! mapped name is only replaced when the sigil-prefixed occurrence is
//! immediately followed by one of a fixed set of delimiters — a character
//! that plausibly continues or terminates a selector clause. That keeps
//! `.nav` from eating into `.navbar` (the delimiter after `nav` would have
//! to be `b`) while leaving combinators, pseudo-selectors, and rule bodies
//! untouched.
//!
//! Known limitation: substring substitution cannot tell a selector
//! occurrence from unrelated text that happens to contain the same
//! sigil-name-delimiter sequence (say, inside a `content:` string). The
//! generator never collides with its own output, but nothing guards against
//! collisions with unrelated tokens. This is the accepted cost of staying a
//! text-level tool.

use crate::rename::{RenameMap, RenameMaps};

/// Characters that may legitimately follow a selector name. A trailing
/// occurrence at end-of-text has no delimiter and is not replaced.
const DELIMITERS: [&str; 8] = ["{", " {", "#", " #", ".", " .", ",", " "];

/// Rewrite every mapped selector occurrence in `css`.
///
/// The class map is applied in full before the id map, so when one literal
/// name exists in both namespaces the class replacement happens first.
/// Entries apply in map insertion order; the whole pass is deterministic for
/// a given pair of maps.
#[must_use]
pub fn rewrite_stylesheet(css: &str, maps: &RenameMaps) -> String {
    let css = apply_map(css, &maps.classes, '.');
    apply_map(&css, &maps.ids, '#')
}

/// Apply one namespace's map to `css`, matching `<sigil><name><delimiter>`
/// and substituting `<sigil><short><delimiter>`.
fn apply_map(css: &str, map: &RenameMap, sigil: char) -> String {
    let mut out = css.to_string();
    for (name, short) in map.iter() {
        for delimiter in DELIMITERS {
            let from = format!("{sigil}{name}{delimiter}");
            let to = format!("{sigil}{short}{delimiter}");
            out = out.replace(&from, &to);
        }
    }
    out
}
