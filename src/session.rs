//! Calculator session
//!
//! Ties a catalog and a selection store together and keeps the current
//! [`Summary`] in sync: every selection change recomputes the summary and
//! notifies subscribers. Everything runs on the caller's thread.

use std::fmt;

use tracing::debug;

use crate::catalog::{Catalog, EXAMPLE_PRESET};
use crate::engine::tiers::summarize;
use crate::error::{CalcError, Result};
use crate::selection::{Selection, SelectionStore};
use crate::types::Summary;

/// Callback invoked with the fresh summary after each selection change
pub type SummaryListener = Box<dyn FnMut(&Summary)>;

/// Owns the catalog, the selection, and the summary derived from them
pub struct Calculator {
    catalog: Catalog,
    store: SelectionStore,
    summary: Summary,
    listeners: Vec<SummaryListener>,
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("catalog", &self.catalog)
            .field("store", &self.store)
            .field("summary", &self.summary)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

impl Calculator {
    /// Create a session with an empty selection
    pub fn new(catalog: Catalog) -> Self {
        let store = SelectionStore::new();
        let summary = summarize(&catalog.activities, &catalog.tiers, store.selection());
        Self {
            catalog,
            store,
            summary,
            listeners: Vec::new(),
        }
    }

    /// Register a listener called after every selection change
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&Summary) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &Selection {
        self.store.selection()
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.store.contains(id)
    }

    /// Flip one activity. Returns `true` if it is now selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        let selected = self.store.toggle(id);
        debug!(id, selected, "activity toggled");
        self.refresh();
        selected
    }

    /// Select one activity
    pub fn select(&mut self, id: &str) {
        if self.store.add(id) {
            self.refresh();
        }
    }

    /// Deselect one activity
    pub fn deselect(&mut self, id: &str) {
        if self.store.remove(id) {
            self.refresh();
        }
    }

    /// Clear the selection
    pub fn reset(&mut self) {
        if self.store.clear() {
            debug!("selection reset");
            self.refresh();
        }
    }

    /// Replace the selection with the named preset
    pub fn load_preset(&mut self, name: &str) -> Result<()> {
        let preset = self
            .catalog
            .preset(name)
            .ok_or_else(|| CalcError::UnknownPreset(name.to_string()))?;

        if self.store.load_preset(preset.activities.iter().cloned()) {
            debug!(preset = name, "preset loaded");
            self.refresh();
        }
        Ok(())
    }

    /// Load the bundled example preset
    pub fn load_example(&mut self) -> Result<()> {
        self.load_preset(EXAMPLE_PRESET)
    }

    fn refresh(&mut self) {
        self.summary = summarize(
            &self.catalog.activities,
            &self.catalog.tiers,
            self.store.selection(),
        );
        debug!(
            total = self.summary.total,
            unlocked = self.summary.unlocked.len(),
            percent = self.summary.progress.percent,
            "summary recomputed"
        );
        for listener in &mut self.listeners {
            listener(&self.summary);
        }
    }
}
