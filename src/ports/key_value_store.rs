//! Key-Value Store Port - Interface for durable client-side draft storage.
//!
//! Values are opaque strings. The draft store on top of this port decides
//! the encoding of each key.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors that can occur during key-value operations
#[derive(Debug, thiserror::Error)]
pub enum KeyValueError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("invalid key: {0}")]
    InvalidKey(String),
}

impl From<KeyValueError> for DomainError {
    fn from(err: KeyValueError) -> Self {
        let code = match &err {
            KeyValueError::InvalidKey(_) => ErrorCode::InvalidFormat,
            KeyValueError::Unavailable(_) | KeyValueError::Io(_) => ErrorCode::StorageUnavailable,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Port for durable string storage keyed by name
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value. Returns `Ok(None)` when the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueError>;

    /// Write a value, replacing any previous one.
    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueError>;

    /// Remove a key. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), KeyValueError>;
}
