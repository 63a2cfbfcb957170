//! Selector discovery, short-name allocation, and stylesheet rewriting.
//!
//! # Scope
//!
//! This crate implements the stylesheet side of the squish pipeline:
//!
//! - **Short-Name Allocation** — deterministic, collision-free `a, b, …, z,
//!   aa, …` sequences, one counter per selector namespace
//! - **Selector Discovery** — regex extraction of every distinct class and
//!   id selector across a set of stylesheets
//! - **Rename Maps** — ordered, append-only name → short-name tables built
//!   once per run
//! - **Stylesheet Rewriting** — delimiter-bounded literal substitution of
//!   mapped selectors
//! - **Minimization** — whitespace/comment stripping behind a trait seam
//!
//! # Design
//!
//! Everything here is a pure text transformation: no I/O, no parsing.
//! Selectors are recognized by shape ([§ 6.6 Class
//! selector](https://www.w3.org/TR/selectors-4/#class-html), [§ 6.7 ID
//! selector](https://www.w3.org/TR/selectors-4/#id-selectors)) and replaced
//! by literal substring substitution, with the approximation risks that
//! implies documented on each module.

/// Whitespace/comment stripping behind the [`minimize::Minimizer`] seam.
pub mod minimize;
/// Rename map construction from discovered selectors.
pub mod rename;
/// Delimiter-bounded stylesheet rewriting.
pub mod rewrite;
/// Regex discovery of class and id selectors.
pub mod scanner;
/// Per-namespace short-name allocation.
pub mod shortname;

pub use minimize::{BasicMinimizer, Minimizer};
pub use rename::{RenameMap, RenameMaps, build_maps};
pub use rewrite::rewrite_stylesheet;
pub use scanner::DiscoveredSelectors;
pub use shortname::{NameAllocator, Namespace};
