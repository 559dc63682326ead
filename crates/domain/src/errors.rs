//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Tempo
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum TempoError {
    #[error("Storage error: {0}")]
    Storage(String),

    /// A persisted file exists but cannot be parsed. Kept distinct from
    /// [`TempoError::NotFound`] so first-run and corruption are
    /// distinguishable in logs.
    #[error("Corrupt state: {0}")]
    Corrupt(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Notification error: {0}")]
    Notification(String),

    #[error("Report error: {0}")]
    Report(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Tempo operations
pub type Result<T> = std::result::Result<T, TempoError>;
