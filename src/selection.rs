//! Selection store
//!
//! Owns the set of currently chosen activity ids. The store is the only
//! writer; the engine reads a borrowed [`Selection`] on every recompute.
//!
//! Ids are not checked against any catalog here. Stale or unknown ids are
//! tolerated and simply contribute nothing to the total.

use std::collections::BTreeSet;

/// A set of activity ids. Ordered so iteration and display are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Mutable owner of the current selection
///
/// Every mutator reports whether the selection actually changed so callers
/// can skip recomputation on no-ops.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    selection: Selection,
}

impl SelectionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`. Returns `true` if the id is now selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.selection.ids.remove(id) {
            false
        } else {
            self.selection.ids.insert(id.to_string());
            true
        }
    }

    /// Select `id`. Returns `true` if it was not selected before.
    pub fn add(&mut self, id: &str) -> bool {
        self.selection.ids.insert(id.to_string())
    }

    /// Deselect `id`. Returns `true` if it was selected before.
    pub fn remove(&mut self, id: &str) -> bool {
        self.selection.ids.remove(id)
    }

    /// Empty the selection. Returns `true` if anything was removed.
    pub fn clear(&mut self) -> bool {
        let changed = !self.selection.is_empty();
        self.selection.ids.clear();
        changed
    }

    /// Replace the selection with `ids`. Returns `true` if the result differs.
    pub fn load_preset<I, S>(&mut self, ids: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let next: Selection = ids.into_iter().collect();
        let changed = next != self.selection;
        self.selection = next;
        changed
    }

    pub fn contains(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    pub fn len(&self) -> usize {
        self.selection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    /// Borrow the current selection
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Owned copy of the current selection
    pub fn snapshot(&self) -> Selection {
        self.selection.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut store = SelectionStore::new();
        assert!(store.toggle("journaling"));
        assert!(store.contains("journaling"));
        assert!(!store.toggle("journaling"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut store = SelectionStore::new();
        assert!(store.add("reflection"));
        assert!(!store.add("reflection"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut store = SelectionStore::new();
        assert!(!store.remove("reflection"));
    }

    #[test]
    fn test_clear_reports_change() {
        let mut store = SelectionStore::new();
        assert!(!store.clear());
        store.add("a");
        assert!(store.clear());
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_preset_replaces_selection() {
        let mut store = SelectionStore::new();
        store.add("old");
        assert!(store.load_preset(["a", "b", "a"]));
        assert_eq!(store.len(), 2);
        assert!(!store.contains("old"));
        // Same contents again is not a change
        assert!(!store.load_preset(["b", "a"]));
    }

    #[test]
    fn test_snapshot_is_independent_copy() {
        let mut store = SelectionStore::new();
        store.add("journaling");
        let snapshot = store.snapshot();

        store.add("reflection");
        store.remove("journaling");

        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.contains("journaling"));
        assert!(!snapshot.contains("reflection"));
        assert_ne!(&snapshot, store.selection());
    }

    #[test]
    fn test_iteration_is_sorted() {
        let selection: Selection = ["zeta", "alpha", "mid"].into_iter().collect();
        let ids: Vec<&str> = selection.iter().collect();
        assert_eq!(ids, vec!["alpha", "mid", "zeta"]);
    }
}
