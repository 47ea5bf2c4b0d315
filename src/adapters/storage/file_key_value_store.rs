//! File-based Key-Value Store Adapter
//!
//! Stores each key as a file named `<key>.value` under a base directory.
//! Writes go to a temporary file first and are renamed into place, so a crash
//! mid-write leaves the previous value intact.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::config::StorageConfig;
use crate::ports::{KeyValueError, KeyValueStore};

/// File-based key-value storage
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    base_path: PathBuf,
}

impl FileKeyValueStore {
    /// Create a new store rooted at `base_path`. The directory is created on first write.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn value_path(&self, key: &str) -> Result<PathBuf, KeyValueError> {
        validate_key(key)?;
        Ok(self.base_path.join(format!("{key}.value")))
    }

    async fn ensure_dir(&self) -> Result<(), KeyValueError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| KeyValueError::Io(e.to_string()))
    }
}

impl From<&StorageConfig> for FileKeyValueStore {
    fn from(config: &StorageConfig) -> Self {
        Self::new(&config.draft_dir)
    }
}

/// Keys become file names, so only a conservative character set is allowed.
fn validate_key(key: &str) -> Result<(), KeyValueError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(KeyValueError::InvalidKey(key.to_string()))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueError> {
        let path = self.value_path(key)?;
        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(KeyValueError::Io(e.to_string())),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueError> {
        let path = self.value_path(key)?;
        self.ensure_dir().await?;

        let tmp = path.with_extension("value.tmp");
        fs::write(&tmp, value)
            .await
            .map_err(|e| KeyValueError::Io(e.to_string()))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| KeyValueError::Io(e.to_string()))?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), KeyValueError> {
        let path = self.value_path(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(KeyValueError::Io(e.to_string())),
        }
    }
}
