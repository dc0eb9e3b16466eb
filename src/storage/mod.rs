//! Persistent storage
//!
//! This module handles the day-scoped entry store and application settings.

pub mod kv;
pub mod lifecycle;
pub mod settings;

use std::path::PathBuf;

/// Error type for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Could not determine the application data directory")]
    NoDataDir,
}

/// Platform data directory for the application
///
/// Linux: ~/.local/share/todaystrash
/// macOS: ~/Library/Application Support/app.TodaysTrash.TodaysTrash
/// Windows: %APPDATA%/TodaysTrash/TodaysTrash/data
pub fn get_data_dir() -> Result<PathBuf, StorageError> {
    directories::ProjectDirs::from("app", "TodaysTrash", "TodaysTrash")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(StorageError::NoDataDir)
}
