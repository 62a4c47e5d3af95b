// Pure selection logic - no Tauri imports allowed.
// Tracks which engines the next search will fan out to. Session-scoped
// state only: never persisted, thrown away on exit.

use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct SelectionState {
    selected: HashSet<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of a single engine. Two toggles are a no-op.
    pub fn toggle_engine(&mut self, name: &str) {
        if !self.selected.remove(name) {
            self.selected.insert(name.to_string());
        }
    }

    /// Bulk toggle for a group's "Select All" checkbox: union when selecting,
    /// difference when deselecting. Names already in the target state are
    /// silently tolerated.
    pub fn toggle_group<I, S>(&mut self, names: I, select_all: bool)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            if select_all {
                self.selected.insert(name.as_ref().to_string());
            } else {
                self.selected.remove(name.as_ref());
            }
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Callers must not assume iteration order.
    pub fn current(&self) -> &HashSet<String> {
        &self.selected
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
