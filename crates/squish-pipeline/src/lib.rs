//! End-to-end selector shortening runs.
//!
//! # Scope
//!
//! This crate strings the leaf crates into a pipeline:
//!
//! - **Configuration** — structured lists of stylesheet/view/script files,
//!   ignore names, selector-access patterns, output locations
//! - **Discovery then Mapping** — every stylesheet is scanned before any
//!   rename is assigned; maps are immutable once built
//! - **Artifact Writing** — combined + minimized stylesheet, rewritten
//!   views and scripts, optional JSON rename manifest
//! - **Reporting** — per-artifact byte savings for the summary output
//!
//! File I/O lives here and only here; the crates underneath transform text
//! by value and never touch the filesystem.

/// Run configuration and output-location policy.
pub mod config;
/// The pipeline error taxonomy.
pub mod error;
/// JSON rename manifest rendering.
pub mod manifest;
/// Byte-savings accounting.
pub mod report;
/// The run itself.
pub mod session;

pub use config::{Config, CssOutput, OutputTarget, list_files};
pub use error::{Error, Result};
pub use report::{FileSavings, Report};
pub use session::Session;
