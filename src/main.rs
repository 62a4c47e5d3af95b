// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use tauri::{AppHandle, Manager, State};
use tauri_plugin_opener::OpenerExt;

use multisearch_lib::engines::EngineDirectory;
use multisearch_lib::history::{HistoryStore, DEFAULT_MAX_HISTORY};
use multisearch_lib::modules::dispatch::{self, SearchResult};
use multisearch_lib::state::{AppState, GroupView};

const HISTORY_FILE: &str = "search_history.json";

#[tauri::command]
fn get_directory(state: State<AppState>) -> Vec<GroupView> {
    state.directory_view()
}

#[tauri::command]
fn toggle_engine(state: State<AppState>, name: String) -> Result<(), String> {
    let mut selection = state.selection.lock().map_err(|e| e.to_string())?;
    selection.toggle_engine(&name);
    Ok(())
}

#[tauri::command]
fn toggle_group(
    state: State<AppState>,
    names: Vec<String>,
    select_all: bool,
) -> Result<(), String> {
    let mut selection = state.selection.lock().map_err(|e| e.to_string())?;
    selection.toggle_group(&names, select_all);
    Ok(())
}

#[tauri::command]
fn clear_selection(state: State<AppState>) -> Result<(), String> {
    let mut selection = state.selection.lock().map_err(|e| e.to_string())?;
    selection.clear();
    Ok(())
}

#[tauri::command]
fn get_selection(state: State<AppState>) -> Result<Vec<String>, String> {
    let selection = state.selection.lock().map_err(|e| e.to_string())?;
    Ok(selection.current().iter().cloned().collect())
}

#[tauri::command]
fn search(app: AppHandle, state: State<AppState>, keyword: String) -> Result<SearchResult, String> {
    let selection = {
        let guard = state.selection.lock().map_err(|e| e.to_string())?;
        guard.current().clone()
    };

    dispatch::run_search(&keyword, &selection, &state.directory, &state.history, |url| {
        app.opener()
            .open_url(url, None::<&str>)
            .map_err(|e| e.to_string())
    })
    .map_err(|e| e.to_string())
}

#[tauri::command]
fn get_history(state: State<AppState>) -> Vec<String> {
    state.history.entries()
}

#[tauri::command]
fn select_history_item(state: State<AppState>, index: usize) -> Result<String, String> {
    state
        .history
        .get(index)
        .ok_or_else(|| format!("no history entry at index {}", index))
}

// Relaunch the process with the same arguments and exit this instance.
#[tauri::command]
fn restart(app: AppHandle) {
    app.restart();
}

fn main() {
    tauri::Builder::default()
        .plugin(
            tauri_plugin_log::Builder::default()
                .level(log::LevelFilter::Info)
                .build(),
        )
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            // A malformed directory is fatal: no partial UI.
            let directory = EngineDirectory::load()?;
            log::info!(
                "[Startup] Loaded {} engines in {} groups",
                directory.engine_count(),
                directory.groups().len()
            );

            let history_path = app.path().app_data_dir()?.join(HISTORY_FILE);
            let history = match HistoryStore::load(&history_path, DEFAULT_MAX_HISTORY) {
                Ok(store) => store,
                Err(e) => {
                    // Unreadable history is recoverable: start empty, the
                    // file is rewritten on the next search.
                    log::warn!("[Startup] {}; starting with empty history", e);
                    HistoryStore::empty(&history_path, DEFAULT_MAX_HISTORY)
                }
            };

            app.manage(AppState::new(directory, history));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            get_directory,
            toggle_engine,
            toggle_group,
            clear_selection,
            get_selection,
            search,
            get_history,
            select_history_item,
            restart
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
