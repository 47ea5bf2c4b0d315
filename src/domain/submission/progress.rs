//! Coarse submission progress.
//!
//! Progress is cosmetic, but it must never run backwards and must never claim
//! completion before the real result is known. `ProgressTracker` enforces both.

use serde::{Deserialize, Serialize};

/// Progress as shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub current: u32,
    pub total: u32,
    pub label: String,
}

impl Progress {
    pub fn new(current: u32, total: u32, label: impl Into<String>) -> Self {
        Self {
            current,
            total,
            label: label.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.current >= self.total
    }

    /// Share of work done, 0-100.
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.current.min(self.total) as u64 * 100) / self.total as u64) as u8
    }
}

/// Monotone progress counter capped below `total` until `finish`.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    current: u32,
    total: u32,
    finished: bool,
}

impl ProgressTracker {
    /// Starts at zero. A zero total is raised to one.
    pub fn new(total: u32) -> Self {
        Self {
            current: 0,
            total: total.max(1),
            finished: false,
        }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    /// Highest value reachable before the result arrives.
    pub fn ceiling(&self) -> u32 {
        if self.finished {
            self.total
        } else {
            self.total - 1
        }
    }

    /// Advances by one, unless capped. Returns the new progress if it moved.
    pub fn advance(&mut self, label: impl Into<String>) -> Option<Progress> {
        if self.current >= self.ceiling() {
            return None;
        }
        self.current += 1;
        Some(self.snapshot(label))
    }

    /// Marks the result as known; lifts the cap to `total`.
    pub fn finish(&mut self) {
        self.finished = true;
    }

    pub fn snapshot(&self, label: impl Into<String>) -> Progress {
        Progress::new(self.current, self.total, label)
    }
}
