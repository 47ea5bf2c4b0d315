//! Submission pacing configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Submission pacing and audit settings
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionConfig {
    /// Interval between cosmetic progress ticks in milliseconds
    #[serde(default = "default_progress_tick")]
    pub progress_tick_ms: u64,

    /// Minimum time the progress view stays up, in milliseconds (0 disables)
    #[serde(default = "default_min_display")]
    pub min_display_ms: u64,

    /// Number of "preparing" ticks before category labels are shown
    #[serde(default = "default_preparing_ticks")]
    pub preparing_ticks: u32,

    /// Upper bound on the post-success audit write, in seconds
    #[serde(default = "default_audit_timeout")]
    pub audit_timeout_secs: u64,
}

impl SubmissionConfig {
    pub fn progress_tick(&self) -> Duration {
        Duration::from_millis(self.progress_tick_ms)
    }

    pub fn min_display(&self) -> Duration {
        Duration::from_millis(self.min_display_ms)
    }

    pub fn audit_timeout(&self) -> Duration {
        Duration::from_secs(self.audit_timeout_secs)
    }

    /// No artificial pacing; useful for tests and batch use.
    pub fn immediate() -> Self {
        Self {
            progress_tick_ms: 1,
            min_display_ms: 0,
            preparing_ticks: 0,
            audit_timeout_secs: default_audit_timeout(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.progress_tick_ms == 0 {
            return Err(ValidationError::InvalidProgressTick);
        }
        if self.audit_timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            progress_tick_ms: default_progress_tick(),
            min_display_ms: default_min_display(),
            preparing_ticks: default_preparing_ticks(),
            audit_timeout_secs: default_audit_timeout(),
        }
    }
}

fn default_progress_tick() -> u64 {
    150
}

fn default_min_display() -> u64 {
    2000
}

fn default_preparing_ticks() -> u32 {
    3
}

fn default_audit_timeout() -> u64 {
    10
}
