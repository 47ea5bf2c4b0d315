//! Submission lifecycle.
//!
//! ```text
//! Idle → Preparing → InFlight → Succeeded
//!          │            │
//!          └──→ Failed ←┘
//!                 │
//!                 └──→ Idle   (explicit retry)
//! ```
//!
//! `SubmissionMarker` is the session's dedupe flag. It is flipped from
//! `NotStarted` to `InProgress` synchronously before any remote work, so a
//! second invocation sees it set and stays an observer.

use serde::{Deserialize, Serialize};

use super::progress::Progress;
use super::result::ClassificationResult;
use crate::domain::foundation::StateMachine;

/// Data-free status, used for transition checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubmissionStatus {
    Idle,
    Preparing,
    InFlight,
    Succeeded,
    Failed,
}

impl StateMachine for SubmissionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SubmissionStatus::*;
        matches!(
            (self, target),
            (Idle, Preparing)
                | (Preparing, InFlight)
                | (Preparing, Failed)
                | (InFlight, Succeeded)
                | (InFlight, Failed)
                | (Failed, Idle)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SubmissionStatus::*;
        match self {
            Idle => vec![Preparing],
            Preparing => vec![InFlight, Failed],
            InFlight => vec![Succeeded, Failed],
            Succeeded => vec![],
            Failed => vec![Idle],
        }
    }
}

/// Observable submission state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SubmissionState {
    Idle,
    Preparing,
    InFlight { progress: Progress },
    Succeeded { result: ClassificationResult },
    Failed { message: String },
}

impl SubmissionState {
    pub fn status(&self) -> SubmissionStatus {
        match self {
            SubmissionState::Idle => SubmissionStatus::Idle,
            SubmissionState::Preparing => SubmissionStatus::Preparing,
            SubmissionState::InFlight { .. } => SubmissionStatus::InFlight,
            SubmissionState::Succeeded { .. } => SubmissionStatus::Succeeded,
            SubmissionState::Failed { .. } => SubmissionStatus::Failed,
        }
    }

    pub fn progress(&self) -> Option<&Progress> {
        match self {
            SubmissionState::InFlight { progress } => Some(progress),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&ClassificationResult> {
        match self {
            SubmissionState::Succeeded { result } => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed { message } => Some(message),
            _ => None,
        }
    }
}

impl Default for SubmissionState {
    fn default() -> Self {
        SubmissionState::Idle
    }
}

/// Session-scoped dedupe flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubmissionMarker {
    NotStarted,
    InProgress,
    Done,
    Failed,
}

impl StateMachine for SubmissionMarker {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SubmissionMarker::*;
        matches!(
            (self, target),
            (NotStarted, InProgress)
                | (InProgress, Done)
                | (InProgress, Failed)
                | (Failed, NotStarted)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SubmissionMarker::*;
        match self {
            NotStarted => vec![InProgress],
            InProgress => vec![Done, Failed],
            Done => vec![],
            Failed => vec![NotStarted],
        }
    }
}

impl Default for SubmissionMarker {
    fn default() -> Self {
        SubmissionMarker::NotStarted
    }
}

impl SubmissionMarker {
    /// Test-and-set: claims the session if no submission has started.
    ///
    /// Returns true for exactly one caller per `NotStarted` period.
    pub fn try_claim(&mut self) -> bool {
        match self.transition_to(SubmissionMarker::InProgress) {
            Ok(next) => {
                *self = next;
                true
            }
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_transitions_are_allowed() {
        let status = SubmissionStatus::Idle
            .transition_to(SubmissionStatus::Preparing)
            .and_then(|s| s.transition_to(SubmissionStatus::InFlight))
            .and_then(|s| s.transition_to(SubmissionStatus::Succeeded));
        assert_eq!(status, Ok(SubmissionStatus::Succeeded));
        assert!(SubmissionStatus::Succeeded.is_terminal());
    }

    #[test]
    fn only_failed_returns_to_idle() {
        assert!(SubmissionStatus::Failed.can_transition_to(&SubmissionStatus::Idle));
        assert!(!SubmissionStatus::Succeeded.can_transition_to(&SubmissionStatus::Idle));
        assert!(!SubmissionStatus::InFlight.can_transition_to(&SubmissionStatus::Idle));
    }

    #[test]
    fn skipping_in_flight_is_rejected() {
        assert!(SubmissionStatus::Idle
            .transition_to(SubmissionStatus::Succeeded)
            .is_err());
    }

    #[test]
    fn marker_claim_succeeds_once() {
        let mut marker = SubmissionMarker::default();
        assert!(marker.try_claim());
        assert!(!marker.try_claim());
        assert_eq!(marker, SubmissionMarker::InProgress);
    }

    #[test]
    fn failed_marker_cannot_be_claimed_until_reset() {
        let mut marker = SubmissionMarker::Failed;
        assert!(!marker.try_claim());

        marker = marker.transition_to(SubmissionMarker::NotStarted).unwrap();
        assert!(marker.try_claim());
    }

    #[test]
    fn state_serializes_with_tag() {
        let state = SubmissionState::Failed {
            message: "offline".into(),
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["state"], "failed");
        assert_eq!(state.error(), Some("offline"));
    }
}
