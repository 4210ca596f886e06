//! Error types for event store operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::event::TimeRule;

/// Why the events file could not be read
#[derive(Error, Debug)]
pub enum LoadFailure {
    #[error("could not read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("file is not a valid events document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid record under '{date_key}': {reason}")]
    InvalidRecord { date_key: String, reason: String },
}

/// Errors surfaced by [`EventStore`](super::EventStore).
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid time '{input}': {rule}")]
    InvalidTime { input: String, rule: TimeRule },

    #[error("Invalid color '{input}': {reason}")]
    InvalidColor { input: String, reason: String },

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDateKey(String),

    #[error("Please select a date first")]
    NoDateSelected,

    #[error("No event selected")]
    NothingSelected,

    #[error("No event at position {index} on {date_key}")]
    NoSuchEvent { date_key: String, index: usize },

    #[error("Failed to load events from {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: LoadFailure,
    },

    #[error("Failed to save events to {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Validation and selection errors leave the store untouched and only
    /// need to be reported to the user.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            StoreError::InvalidTime { .. }
                | StoreError::InvalidColor { .. }
                | StoreError::InvalidDateKey(_)
                | StoreError::NoDateSelected
                | StoreError::NothingSelected
                | StoreError::NoSuchEvent { .. }
        )
    }
}

/// Result type alias for event store operations.
pub type StoreResult<T> = Result<T, StoreError>;
