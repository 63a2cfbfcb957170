//! Rename maps: discovered selector name → generated short name.

use crate::scanner::DiscoveredSelectors;
use crate::shortname::{NameAllocator, Namespace};

/// An ordered, append-only mapping from original selector names to their
/// short replacements, for a single [`Namespace`].
///
/// Names are stored without their sigil (`foo`, not `.foo`). Entries are
/// never removed or reassigned once inserted; the map lives exactly as long
/// as the run that built it. Iteration yields entries in insertion order,
/// which the rewriters rely on for deterministic output.
#[derive(Debug, Default, Clone)]
pub struct RenameMap {
    entries: Vec<(String, String)>,
}

impl RenameMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. A name that is already mapped keeps its original
    /// short name; the new one is discarded.
    pub fn insert(&mut self, name: impl Into<String>, short: impl Into<String>) {
        let name = name.into();
        if self.get(&name).is_none() {
            self.entries.push((name, short.into()));
        }
    }

    /// Look up the short name assigned to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s.as_str())
    }

    /// Iterate `(name, short)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, s)| (n.as_str(), s.as_str()))
    }

    /// Number of mapped names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The class and id maps for one run, built together and immutable afterward.
#[derive(Debug, Default, Clone)]
pub struct RenameMaps {
    /// Class selector renames.
    pub classes: RenameMap,
    /// Id selector renames.
    pub ids: RenameMap,
}

/// Build both rename maps from the discovered selectors.
///
/// Classes are assigned before ids, so with both namespaces fresh the first
/// discovered class and the first discovered id each get `a`. Names on the
/// `ignore` list receive no mapping and are left untouched by every rewriter.
///
/// Every rewrite in the run happens against the returned maps; nothing may
/// rewrite against a map that is still being built, because occurrences
/// missed by a partial map are never revisited.
#[must_use]
pub fn build_maps(
    discovered: &DiscoveredSelectors,
    ignore: &[String],
    allocator: &mut NameAllocator,
) -> RenameMaps {
    let mut maps = RenameMaps::default();

    for name in discovered.classes() {
        if ignore.iter().any(|i| i == name) {
            continue;
        }
        maps.classes.insert(name, allocator.next(Namespace::Class));
    }
    for name in discovered.ids() {
        if ignore.iter().any(|i| i == name) {
            continue;
        }
        maps.ids.insert(name, allocator.next(Namespace::Id));
    }

    maps
}
