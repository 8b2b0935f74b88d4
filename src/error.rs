//! Error types for diabalance-env
//!
//! We use `thiserror` for library-style errors that are part of the API.
//! Errors can only arise when a definitions file is named explicitly; the
//! default [`load`](crate::load) path treats a missing or unreadable file
//! as a silent no-op.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Definitions file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to parse definitions file: {0}")]
    Load(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, ConfigError>;
