//! Unified application error type.
//! All modules (store, session, core, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Task log storage
    // ---------------------------
    #[error("Failed to read task log {path}: {source}")]
    StorageRead { path: PathBuf, source: io::Error },

    #[error("Failed to write task log {path}: {source}")]
    StorageWrite { path: PathBuf, source: io::Error },

    // ---------------------------
    // Submission validation
    // ---------------------------
    #[error("Invalid field: {0}")]
    InvalidField(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Output
    // ---------------------------
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
