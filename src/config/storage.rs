//! Draft storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Draft storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the draft files
    #[serde(default = "default_draft_dir")]
    pub draft_dir: PathBuf,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.draft_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.draft_dir"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            draft_dir: default_draft_dir(),
        }
    }
}

fn default_draft_dir() -> PathBuf {
    PathBuf::from("./data/drafts")
}
