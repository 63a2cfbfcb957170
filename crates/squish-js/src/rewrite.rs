//! Rewriting selector names inside recognized call-argument literals.

use regex::Captures;
use squish_css::RenameMaps;

use crate::patterns::SelectorPatterns;

/// Rewrite mapped selector names inside every recognized call-argument
/// string literal in `js`.
///
/// For each matched literal the id map is applied first, then the class
/// map, each entry as an unbounded substring replacement within the
/// captured text. Sigils survive untouched, so `$('#sidebar')` becomes
/// `$('#a')` purely by the name substitution. The rewritten literal is
/// spliced back into its original call position; everything outside
/// recognized calls passes through byte-for-byte.
///
/// Unbounded substring replacement inside the literal means a mapped name
/// that is a substring of a longer token in the same literal will corrupt
/// it — the same accepted risk the markup rewriter takes inside class
/// attribute values.
#[must_use]
pub fn rewrite_script(js: &str, maps: &RenameMaps, patterns: &SelectorPatterns) -> String {
    let recognizer = patterns.call_regex();
    recognizer
        .replace_all(js, |caps: &Captures<'_>| {
            let call = &caps["call"];
            let (quote, literal) = caps.name("dq").map_or_else(
                || ('\'', caps["sq"].to_string()),
                |m| ('"', m.as_str().to_string()),
            );

            let mut text = literal;
            for (name, short) in maps.ids.iter() {
                text = text.replace(name, short);
            }
            for (name, short) in maps.classes.iter() {
                text = text.replace(name, short);
            }

            format!("{call}({quote}{text}{quote})")
        })
        .into_owned()
}
