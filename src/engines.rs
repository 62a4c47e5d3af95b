use std::collections::{BTreeMap, HashSet};
use serde::Serialize;
use thiserror::Error;

/// The static engine directory, embedded at compile time.
/// Editing it requires a rebuild; there is deliberately no runtime reload.
const ENGINES_JSON: &str = include_str!("../resources/engines.json");

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("engine directory is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("group '{0}' has an engine with an empty name")]
    EmptyEngineName(String),
    #[error("engine '{0}' has an empty URL template")]
    EmptyTemplate(String),
    #[error("directory has an empty group name")]
    EmptyGroupName,
    #[error("engine name '{0}' appears more than once in the directory")]
    DuplicateEngine(String),
    #[error("URL template for '{0}' must contain exactly one {{}} placeholder")]
    BadTemplate(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct EngineEntry {
    pub name: String,
    pub url_template: String,
    pub group: String,
}

impl EngineEntry {
    /// Substitute the percent-encoded keyword into the template.
    pub fn query_url(&self, keyword: &str) -> String {
        let q = urlencoding::encode(keyword);
        self.url_template.replacen("{}", &q, 1)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EngineGroup {
    pub name: String,
    pub engines: Vec<EngineEntry>,
}

/// Read-only after load. Groups are sorted by name, engines sorted within
/// each group, so the UI render order and test assertions are deterministic.
#[derive(Debug, Clone)]
pub struct EngineDirectory {
    groups: Vec<EngineGroup>,
}

impl EngineDirectory {
    pub fn load() -> Result<Self, DirectoryError> {
        Self::from_json(ENGINES_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, DirectoryError> {
        // BTreeMap gives the alphabetical ordering for free.
        let raw: BTreeMap<String, BTreeMap<String, String>> = serde_json::from_str(json)?;

        let mut seen: HashSet<String> = HashSet::new();
        let mut groups = Vec::with_capacity(raw.len());

        for (group, engines) in raw {
            if group.trim().is_empty() {
                return Err(DirectoryError::EmptyGroupName);
            }
            let mut entries = Vec::with_capacity(engines.len());
            for (name, url_template) in engines {
                if name.trim().is_empty() {
                    return Err(DirectoryError::EmptyEngineName(group.clone()));
                }
                if url_template.trim().is_empty() {
                    return Err(DirectoryError::EmptyTemplate(name.clone()));
                }
                if url_template.matches("{}").count() != 1 {
                    return Err(DirectoryError::BadTemplate(name.clone()));
                }
                // Engine names are unique across the whole directory, not
                // just within a group; selection is keyed by name alone.
                if !seen.insert(name.clone()) {
                    return Err(DirectoryError::DuplicateEngine(name.clone()));
                }
                entries.push(EngineEntry {
                    name,
                    url_template,
                    group: group.clone(),
                });
            }
            groups.push(EngineGroup {
                name: group,
                engines: entries,
            });
        }

        Ok(EngineDirectory { groups })
    }

    pub fn groups(&self) -> &[EngineGroup] {
        &self.groups
    }

    /// All entries across every group, in group-then-name order.
    pub fn entries(&self) -> impl Iterator<Item = &EngineEntry> {
        self.groups.iter().flat_map(|g| g.engines.iter())
    }

    pub fn engine_count(&self) -> usize {
        self.groups.iter().map(|g| g.engines.len()).sum()
    }
}
