// Shared state structs to avoid circular dependencies.
// These are used by main.rs and can be tested independently.

use std::sync::{Arc, Mutex};
use serde::Serialize;

use crate::engines::EngineDirectory;
use crate::history::HistoryStore;
use crate::modules::selection::SelectionState;

/// UI-facing view of one engine group: just the names, pre-sorted.
#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GroupView {
    pub name: String,
    pub engines: Vec<String>,
}

pub struct AppState {
    pub directory: EngineDirectory,
    pub selection: Mutex<SelectionState>,
    pub history: Arc<HistoryStore>,
}

impl AppState {
    pub fn new(directory: EngineDirectory, history: HistoryStore) -> Self {
        AppState {
            directory,
            selection: Mutex::new(SelectionState::new()),
            history: Arc::new(history),
        }
    }

    pub fn directory_view(&self) -> Vec<GroupView> {
        self.directory
            .groups()
            .iter()
            .map(|g| GroupView {
                name: g.name.clone(),
                engines: g.engines.iter().map(|e| e.name.clone()).collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::DEFAULT_MAX_HISTORY;
    use tempfile::tempdir;

    #[test]
    fn directory_view_mirrors_sorted_directory() {
        let tmp = tempdir().unwrap();
        let directory = EngineDirectory::load().unwrap();
        let history =
            HistoryStore::load(tmp.path().join("h.json"), DEFAULT_MAX_HISTORY).unwrap();
        let state = AppState::new(directory, history);

        let view = state.directory_view();
        assert_eq!(view.len(), state.directory.groups().len());
        for (group, v) in state.directory.groups().iter().zip(&view) {
            assert_eq!(group.name, v.name);
            assert_eq!(group.engines.len(), v.engines.len());
        }
    }
}
