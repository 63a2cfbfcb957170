//! JSON rename manifest for downstream tooling.
//!
//! Build scripts and asset pipelines that generate markup after a run need
//! the same name mapping the run used; the manifest hands it to them as one
//! JSON object with `classes` and `ids` keys.

use std::collections::BTreeMap;

use serde::Serialize;
use squish_css::RenameMaps;

#[derive(Debug, Serialize)]
struct Manifest<'a> {
    classes: BTreeMap<&'a str, &'a str>,
    ids: BTreeMap<&'a str, &'a str>,
}

/// Render the rename maps as pretty-printed JSON. Keys are sorted, so the
/// manifest is byte-identical across reruns of the same inputs.
///
/// # Panics
///
/// Panics if JSON serialization fails, which cannot happen for
/// string-to-string maps.
#[must_use]
pub fn render(maps: &RenameMaps) -> String {
    let manifest = Manifest {
        classes: maps.classes.iter().collect(),
        ids: maps.ids.iter().collect(),
    };
    serde_json::to_string_pretty(&manifest).unwrap()
}
