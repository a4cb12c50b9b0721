//! Interning registries for shared workbook resources
//!
//! An XLSX file references styles and strings by small integers instead of
//! repeating them per cell. The registries here assign those integers:
//! structurally equal inputs map to one entry, first registration wins the
//! index, and export order is exactly registration order. Downstream cell
//! indices point at positions, so reordering after the fact is forbidden.

use std::hash::Hash;

use ahash::AHashMap;

/// Ordered, deduplicating mapping from a setup value to its index
///
/// `register` is idempotent under structural equality: calling it twice
/// with field-for-field equal values returns the same index and does not
/// grow the registry.
#[derive(Debug)]
pub struct SetupRegistry<T> {
    entries: Vec<T>,
    index: AHashMap<T, u32>,
}

impl<T: Clone + Eq + Hash> SetupRegistry<T> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: AHashMap::new(),
        }
    }

    /// Get or create the entry for `setup`, returning its index
    pub fn register(&mut self, setup: T) -> u32 {
        if let Some(&idx) = self.index.get(&setup) {
            return idx;
        }

        let idx = self.entries.len() as u32;
        self.index.insert(setup.clone(), idx);
        self.entries.push(setup);
        idx
    }

    /// Get an entry by index
    pub fn get(&self, index: u32) -> Option<&T> {
        self.entries.get(index as usize)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in registration order
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    /// Iterate over entries with their indices
    pub fn iter(&self) -> impl Iterator<Item = (u32, &T)> {
        self.entries.iter().enumerate().map(|(i, e)| (i as u32, e))
    }
}

impl<T: Clone + Eq + Hash> Default for SetupRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Interning table for text cell values (the sharedStrings part)
///
/// Keyed by exact string content, no normalization or case folding. Only
/// text cells touch it; numeric, boolean and date cells never do.
#[derive(Debug, Default)]
pub struct SharedStringRegistry {
    inner: SetupRegistry<String>,
    /// Total registrations, including duplicates (the sst `count` attribute)
    references: u64,
}

impl SharedStringRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the entry for `text`, returning its index
    pub fn register(&mut self, text: &str) -> u32 {
        self.references += 1;
        // Lookup before allocating an owned copy for the common hit case
        if let Some(&idx) = self.inner.index.get(text) {
            return idx;
        }
        self.inner.register(text.to_string())
    }

    /// Unique strings in registration order
    pub fn strings(&self) -> &[String] {
        self.inner.entries()
    }

    /// Number of unique strings
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if no string was registered
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Total number of registrations, duplicates included
    pub fn reference_count(&self) -> u64 {
        self.references
    }
}
