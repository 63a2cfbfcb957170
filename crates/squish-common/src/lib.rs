//! Common utilities for the squish selector shortener.
//!
//! This crate provides shared infrastructure used by all pipeline components:
//! - **Warning System** - colored terminal output for lossy rewrites

pub mod warning;
