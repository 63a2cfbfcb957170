//! Whitespace and comment stripping for stylesheet text.
//!
//! The pipeline treats minimization as a pluggable collaborator: anything
//! that can turn stylesheet text into smaller equivalent text satisfies
//! [`Minimizer`]. [`BasicMinimizer`] is the built-in implementation —
//! comment removal plus whitespace tightening, no value-level rewriting.

/// A collaborator that shrinks stylesheet text without changing its meaning.
pub trait Minimizer {
    /// Produce a minimized form of `text`.
    fn minimize(&self, text: &str) -> String;
}

/// Strips `/* … */` comments, collapses whitespace runs to a single space,
/// and drops spaces adjacent to `{` `}` `:` `;` `,`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicMinimizer;

impl Minimizer for BasicMinimizer {
    fn minimize(&self, text: &str) -> String {
        tighten(&collapse_whitespace(&strip_comments(text)))
            .trim()
            .to_string()
    }
}

/// Remove `/* … */` comments. An unterminated comment swallows the rest of
/// the text, same as a browser would treat it.
fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        match rest[start + 2..].find("*/") {
            Some(len) => rest = &rest[start + 2 + len + 2..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

/// Map every whitespace character to a space and collapse runs to one.
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_was_space = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !last_was_space {
                out.push(' ');
                last_was_space = true;
            }
        } else {
            out.push(ch);
            last_was_space = false;
        }
    }
    out
}

/// Drop single spaces that touch structural punctuation on either side.
fn tighten(text: &str) -> String {
    const fn is_tight(ch: Option<char>) -> bool {
        matches!(ch, Some('{' | '}' | ':' | ';' | ','))
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (i, &ch) in chars.iter().enumerate() {
        if ch == ' ' {
            let prev = i.checked_sub(1).map(|j| chars[j]);
            let next = chars.get(i + 1).copied();
            if is_tight(prev) || is_tight(next) {
                continue;
            }
        }
        out.push(ch);
    }
    out
}
