//! Saved-items index.
//!
//! Tracks which product ids have been toggled to "saved" so the saved count
//! can be taken from a small map instead of scanning the catalog.

use std::collections::HashMap;

use brightcart_core::ProductId;

/// Product id → currently saved. Entries are flipped, never removed.
#[derive(Debug, Clone, Default)]
pub struct SavedIndex {
    entries: HashMap<ProductId, bool>,
}

impl SavedIndex {
    /// Flip the saved state of `id` and return the new state.
    ///
    /// An id that was never toggled reads as not saved, so its first toggle
    /// records it as saved.
    pub fn toggle(&mut self, id: &ProductId) -> bool {
        let saved = self.entries.entry(id.clone()).or_insert(false);
        *saved = !*saved;
        *saved
    }

    #[cfg(test)]
    fn is_saved(&self, id: &ProductId) -> bool {
        self.entries.get(id).copied().unwrap_or(false)
    }

    /// Number of ids currently saved.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.values().filter(|&&saved| saved).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_toggle_saves() {
        let mut index = SavedIndex::default();
        let id = ProductId::new("a");
        assert!(!index.is_saved(&id));
        assert!(index.toggle(&id));
        assert!(index.is_saved(&id));
        assert_eq!(index.count(), 1);
    }

    #[test]
    fn test_count_ignores_unsaved_entries() {
        let mut index = SavedIndex::default();
        let a = ProductId::new("a");
        let b = ProductId::new("b");
        index.toggle(&a);
        index.toggle(&b);
        index.toggle(&a);
        assert_eq!(index.count(), 1);
        assert!(!index.is_saved(&a));
        assert!(index.is_saved(&b));
    }
}
