//! Custom error types for pem-chain-order
//!
//! Fatal conditions abort the run before any transformation (unreadable
//! input) or leave the destination untouched (unwritable output).

use thiserror::Error;

/// Top-level error type for chain reordering operations
#[derive(Error, Debug)]
pub enum ChainError {
    #[error("Cannot read input file {path}: {message}")]
    InputUnavailable { path: String, message: String },

    #[error("Cannot write output file {path}: {message}")]
    OutputUnavailable { path: String, message: String },

    #[error("Unterminated certificate block at end of input ({lines} dangling line(s))")]
    UnterminatedBlock { lines: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using ChainError
pub type Result<T> = std::result::Result<T, ChainError>;
