//! Error types for the dashboard UI module
//!
//! Parse failures are fatal to component construction and are handed back to
//! the caller. DOM and storage failures only occur against a live browser.

use thiserror::Error;

/// Top-level error type for component construction, rendering and storage
#[derive(Debug, Error)]
pub enum UiError {
    /// Component JSON (or a stored blob) is malformed or has the wrong shape
    #[error("JSON parsing failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// The render back end refused an operation
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// The key/value store is unavailable or refused a write
    #[error("Storage operation failed: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, UiError>;
