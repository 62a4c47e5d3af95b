// Multisearch Library Entry Point
// This file exposes all modules so they can be imported by main.rs
// and tested independently.

// Core modules
pub mod engines;
pub mod history;

// Shared state
pub mod state;

// Pure logic modules (no Tauri imports)
pub mod modules;
