//! Store error types.

use thiserror::Error;

use crate::game::GameId;

/// Errors reported by a key-value backend
#[derive(Debug, Error)]
pub enum KvError {
    /// The backend couldn't be reached or refused the operation
    #[error("Key-value backend unavailable: {0}")]
    Unavailable(String),

    /// A writer panicked while holding the backend lock
    #[error("Key-value backend lock poisoned")]
    Poisoned,

    /// Expiry too large to turn into a deadline
    #[error("Invalid expiry: {0:?}")]
    InvalidExpiry(std::time::Duration),
}

/// Result type for key-value backend operations
pub type KvResult<T> = Result<T, KvError>;

/// Game store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record for this game id (never saved, deleted, or expired)
    #[error("Game not found: {0}")]
    NotFound(GameId),

    /// Stored bytes aren't a well-formed game record
    #[error("Failed to decode game record: {0}")]
    Decode(#[source] serde_json::Error),

    /// The game couldn't be serialized, so nothing was written
    #[error("Failed to encode game record: {0}")]
    Encode(#[source] serde_json::Error),

    /// Backend read, write or delete failure
    #[error("Store error: {0}")]
    Backend(#[from] KvError),
}

impl StoreError {
    /// Get a client-safe error message.
    ///
    /// Missing and undecodable records look the same to users; backend
    /// details are never exposed.
    pub fn client_message(&self) -> String {
        match self {
            StoreError::NotFound(_) | StoreError::Decode(_) => {
                "Failed to get the stored game".to_string()
            }
            StoreError::Encode(_) | StoreError::Backend(_) => "Internal server error".to_string(),
        }
    }

    /// Whether the record is effectively gone from the user's point of view.
    pub fn is_missing(&self) -> bool {
        matches!(self, StoreError::NotFound(_) | StoreError::Decode(_))
    }
}

/// Result type for game store operations
pub type StoreResult<T> = Result<T, StoreError>;
