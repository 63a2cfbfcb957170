//! Markup rewriting for renamed selectors.
//!
//! # Scope
//!
//! This crate rewrites one HTML document at a time against the run's rename
//! maps:
//!
//! - **Id attributes** — exact, quoted, whole-value `id="…"` replacement
//!   ([§ 3.2.6 the id attribute](https://html.spec.whatwg.org/multipage/dom.html#the-id-attribute)
//!   holds a single token, so whole-value matching is sound)
//! - **Class attributes** — substring replacement inside each captured
//!   `class="…"` value
//!   ([§ 3.2.6 the class attribute](https://html.spec.whatwg.org/multipage/dom.html#classes)
//!   is a space-separated token list, which substring replacement only
//!   approximates)
//! - **Embedded style blocks** — rewritten through the stylesheet rewriter
//!   and minimized, all blocks merged into the first
//! - **Embedded script blocks** — each rewritten independently through the
//!   script literal rewriter
//! - **Header stylesheet links** — optionally collapsed to a single link
//!   pointing at the combined minimized stylesheet
//!
//! Like the rest of the pipeline this is text transformation, not parsing:
//! block boundaries are found with case-sensitive regexes, attributes with
//! literal quoted patterns. Markup that doesn't match the expected shapes
//! (single quotes, unquoted values, extra attributes inside the style/script
//! open tag) passes through unchanged rather than failing.

/// Header stylesheet link collapsing.
pub mod links;
/// Attribute and embedded-block rewriting.
pub mod rewrite;

pub use links::rewrite_stylesheet_links;
pub use rewrite::{
    replace_class_attributes, replace_id_attributes, rewrite_markup, rewrite_script_blocks,
    rewrite_style_blocks,
};
