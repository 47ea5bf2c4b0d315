//! In-Memory Key-Value Store Adapter
//!
//! Stores values in memory. Can be switched to an unavailable mode to
//! exercise best-effort persistence paths.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{KeyValueError, KeyValueStore};

/// In-memory key-value storage
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    values: Arc<RwLock<HashMap<String, String>>>,
    unavailable: Arc<AtomicBool>,
    writes: Arc<AtomicUsize>,
}

impl InMemoryKeyValueStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every operation fail with `KeyValueError::Unavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Seed a value directly, bypassing availability and write counting.
    pub async fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
        self.values.write().await.insert(key.into(), value.into());
    }

    /// Current value of `key`, bypassing availability.
    pub async fn peek(&self, key: &str) -> Option<String> {
        self.values.read().await.get(key).cloned()
    }

    /// Number of successful `set` calls.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub async fn len(&self) -> usize {
        self.values.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.values.read().await.is_empty()
    }

    fn check_available(&self) -> Result<(), KeyValueError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(KeyValueError::Unavailable("in-memory store disabled".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueError> {
        self.check_available()?;
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueError> {
        self.check_available()?;
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), KeyValueError> {
        self.check_available()?;
        self.values.write().await.remove(key);
        Ok(())
    }
}
