//! Selector discovery over stylesheet text.
//!
//! The scanner is pattern matching, not parsing: it looks for the textual
//! shapes of class and id selectors and accepts the false positives that
//! come with that. Two known ones are filtered out because they are common
//! in real stylesheets:
//!
//! - `#name;` — a `#` token terminated by a semicolon is a property value
//!   (url fragment, hex color, custom-property reference), not a selector;
//! - `.5em` — a `.` followed by a digit is a decimal literal in a numeric
//!   value, not a class.
//!
//! Anything else that looks like a selector is discovered, including things
//! that are not (`.png` inside `url(logo.png)`). The rewriters only ever
//! replace discovered names, so a spurious discovery costs a wasted short
//! name, not a broken stylesheet — unless the spurious name also appears in
//! markup, which is the accepted risk of a text-level tool.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Id selectors: `#` followed by word characters, with an optional trailing
/// `;` captured so the match can be discarded as a value, not a selector.
static ID_SELECTOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#(\w+)(;)?").unwrap());

/// Class selectors: `.` followed by word characters, the first of which must
/// not be a digit (class-set difference stands in for lookahead, which the
/// regex crate does not support).
static CLASS_SELECTOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.([\w--\d]\w*)").unwrap());

/// Accumulates the distinct class and id names found across every stylesheet
/// in a run.
///
/// Names are kept in first-seen order. Order does not matter for mapping
/// correctness — any stable order produces a consistent rename — but it
/// determines which name gets the shortest replacement, so it must be stable
/// for a run to be reproducible.
#[derive(Debug, Default, Clone)]
pub struct DiscoveredSelectors {
    classes: Vec<String>,
    ids: Vec<String>,
    class_seen: HashSet<String>,
    id_seen: HashSet<String>,
}

impl DiscoveredSelectors {
    /// Create an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan one stylesheet's text and merge its selectors into the
    /// accumulated sets. The input is never mutated.
    pub fn scan(&mut self, css: &str) {
        for caps in ID_SELECTOR.captures_iter(css) {
            if caps.get(2).is_some() {
                continue;
            }
            self.add_id(&caps[1]);
        }
        for caps in CLASS_SELECTOR.captures_iter(css) {
            self.add_class(&caps[1]);
        }
    }

    /// Discovered class names, first-seen order.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Discovered id names, first-seen order.
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    fn add_class(&mut self, name: &str) {
        if self.class_seen.insert(name.to_string()) {
            self.classes.push(name.to_string());
        }
    }

    fn add_id(&mut self, name: &str) {
        if self.id_seen.insert(name.to_string()) {
            self.ids.push(name.to_string());
        }
    }
}
