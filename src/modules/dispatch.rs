// Pure dispatch logic - no Tauri imports allowed.
// Validates the request, fans the keyword out to every selected engine
// through an injected opener, then records the keyword exactly once.

use std::collections::HashSet;
use serde::Serialize;
use thiserror::Error;

use crate::engines::EngineDirectory;
use crate::history::HistoryStore;

#[derive(Debug, Error, PartialEq)]
pub enum SearchError {
    #[error("please enter a keyword")]
    EmptyKeyword,
    #[error("please select at least one search engine")]
    NoEngineSelected,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenFailure {
    pub engine: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub opened: usize,
    pub failures: Vec<OpenFailure>,
    pub history: Vec<String>,
    pub persist_warning: Option<String>,
}

/// Run one search: open the keyword in every selected engine, then record it.
///
/// Validation failures return early and mutate nothing. Per-engine open
/// failures are collected, never fatal to the batch; the keyword is recorded
/// exactly once after every selected engine has been attempted. `open` is the
/// browser-launch seam, injected so tests never touch a real browser.
pub fn run_search<F>(
    keyword: &str,
    selection: &HashSet<String>,
    directory: &EngineDirectory,
    history: &HistoryStore,
    mut open: F,
) -> Result<SearchResult, SearchError>
where
    F: FnMut(&str) -> Result<(), String>,
{
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Err(SearchError::EmptyKeyword);
    }
    if selection.is_empty() {
        return Err(SearchError::NoEngineSelected);
    }

    let mut opened = 0;
    let mut failures = Vec::new();

    for entry in directory.entries() {
        if !selection.contains(&entry.name) {
            continue;
        }
        let url = entry.query_url(keyword);
        match open(&url) {
            Ok(()) => {
                log::info!("[Search] Opened {} -> {}", entry.name, url);
                opened += 1;
            }
            Err(e) => {
                log::warn!("[Search] Failed to open {}: {}", entry.name, e);
                failures.push(OpenFailure {
                    engine: entry.name.clone(),
                    error: e,
                });
            }
        }
    }

    let outcome = history.record(keyword);

    Ok(SearchResult {
        opened,
        failures,
        history: outcome.entries,
        persist_warning: outcome.persist_error.map(|e| e.to_string()),
    })
}
