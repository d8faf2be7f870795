//! Error types for AutoPM Desktop

use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("Tauri error: {0}")]
    Tauri(#[from] tauri::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Window '{0}' already exists")]
    DuplicateWindow(String),
}

/// Result type for the shell
pub type Result<T> = std::result::Result<T, Error>;
