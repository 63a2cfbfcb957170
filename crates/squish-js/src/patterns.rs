//! Selector-access call patterns recognized by the script rewriter.

use regex::Regex;
use strum_macros::{Display, EnumString};

/// JavaScript framework presets that extend the default pattern lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Framework {
    /// Adds `$` and `jQuery` as custom selector patterns.
    Jquery,
    /// Adds `$` as an id-access pattern and `getElement` as a custom
    /// pattern.
    Mootools,
}

/// The call names whose string-literal arguments are rewritten.
///
/// Patterns come in three lists mirroring how selector-access APIs are
/// used: id accessors (`getElementById`), class accessors (`hasClass`,
/// `addClass`, …), and custom accessors that take a full CSS selector
/// string (`document.querySelector`, `$`). All three lists feed one
/// recognizer; the kind records intent and drives the framework presets.
#[derive(Debug, Clone)]
pub struct SelectorPatterns {
    id_patterns: Vec<String>,
    class_patterns: Vec<String>,
    custom_patterns: Vec<String>,
}

impl Default for SelectorPatterns {
    fn default() -> Self {
        Self {
            id_patterns: vec!["getElementById".to_string()],
            class_patterns: vec![
                "getElementsByClassName".to_string(),
                "hasClass".to_string(),
                "addClass".to_string(),
                "removeClass".to_string(),
            ],
            custom_patterns: vec!["document.querySelector".to_string()],
        }
    }
}

impl SelectorPatterns {
    /// The default pattern lists.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Extend the lists with a framework's known accessors.
    pub fn apply_framework(&mut self, framework: Framework) {
        match framework {
            Framework::Jquery => {
                self.custom_patterns.push("$".to_string());
                self.custom_patterns.push("jQuery".to_string());
            }
            Framework::Mootools => {
                self.id_patterns.push("$".to_string());
                self.custom_patterns.push("getElement".to_string());
            }
        }
    }

    /// Add an id-access call name.
    pub fn add_id_pattern(&mut self, pattern: impl Into<String>) {
        self.id_patterns.push(pattern.into());
    }

    /// Add a class-access call name.
    pub fn add_class_pattern(&mut self, pattern: impl Into<String>) {
        self.class_patterns.push(pattern.into());
    }

    /// Add a custom selector-access call name. A leading `.` (as in
    /// `.getElement` written method-style) is stripped.
    pub fn add_custom_pattern(&mut self, pattern: impl Into<String>) {
        let pattern = pattern.into();
        self.custom_patterns
            .push(pattern.trim_start_matches('.').to_string());
    }

    /// Id-access call names.
    #[must_use]
    pub fn id_patterns(&self) -> &[String] {
        &self.id_patterns
    }

    /// Class-access call names.
    #[must_use]
    pub fn class_patterns(&self) -> &[String] {
        &self.class_patterns
    }

    /// Custom selector-access call names.
    #[must_use]
    pub fn custom_patterns(&self) -> &[String] {
        &self.custom_patterns
    }

    /// Compile the recognizer for `<pattern>(<quote><text><quote>)`.
    ///
    /// Quote pairs must match; the text may not contain the closing quote
    /// character. Pattern names are escaped, so `$` and
    /// `document.querySelector` match literally.
    ///
    /// # Panics
    ///
    /// Panics if a configured pattern produces an uncompilable expression;
    /// escaping makes that unreachable for any pattern string.
    #[must_use]
    pub fn call_regex(&self) -> Regex {
        let alternation = self
            .id_patterns
            .iter()
            .chain(&self.class_patterns)
            .chain(&self.custom_patterns)
            .map(|p| regex::escape(p))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(r#"(?P<call>{alternation})\((?:"(?P<dq>[^"]*)"|'(?P<sq>[^']*)')\)"#);
        Regex::new(&pattern).unwrap()
    }
}
