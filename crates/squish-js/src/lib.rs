//! Script string-literal rewriting for renamed selectors.
//!
//! Scripts are rewritten textually, never parsed or executed. The rewriter
//! recognizes one shape: a configured selector-access call taking a single
//! quoted string literal — `getElementById("sidebar")`,
//! `$('.menu-item')` — and rewrites mapped selector names inside the
//! literal.
//!
//! # Recognized
//!
//! - Single-argument calls with a `'…'` or `"…"` literal directly inside
//!   the parentheses
//! - Any call name on the configured id/class/custom pattern lists,
//!   including names added by a [`Framework`] preset
//!
//! # Not Recognized (left untouched)
//!
//! - Multi-argument calls and calls with whitespace inside the parentheses
//! - String concatenation (`"side" + "bar"`) and template literals
//! - Literals outside a call-argument position (assignments, arrays,
//!   object keys)
//!
//! These blind spots are inherent to the text-level design: a selector
//! reference the rewriter cannot see keeps its original name and silently
//! stops matching its renamed stylesheet counterpart.

/// Selector-access pattern configuration and framework presets.
pub mod patterns;
/// The literal rewriter.
pub mod rewrite;

pub use patterns::{Framework, SelectorPatterns};
pub use rewrite::rewrite_script;
