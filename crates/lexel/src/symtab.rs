//! Append-only symbol table: identifier name to type string.

use compact_str::CompactString;
use hashbrown::HashMap;

/// Identifier store filled as a side effect of scanning.
///
/// Entries are created on first sighting and never removed. A later sighting
/// does not overwrite an existing type unless the identifier is explicitly
/// reclassified by a preceding type keyword.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    entries: HashMap<CompactString, CompactString, ahash::RandomState>,
}

impl SymbolTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `name` with `ty` if not already present. Returns `true` when
    /// the entry was created.
    pub fn declare(&mut self, name: &str, ty: &str) -> bool {
        if self.entries.contains_key(name) {
            return false;
        }
        self.entries
            .insert(CompactString::from(name), CompactString::from(ty));
        true
    }

    /// Set `name`'s type unconditionally. Only used when a type keyword
    /// immediately precedes the identifier.
    pub fn reclassify(&mut self, name: &str, ty: &str) {
        self.entries
            .insert(CompactString::from(name), CompactString::from(ty));
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    #[must_use]
    pub fn type_of(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(CompactString::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All `(name, type)` entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
