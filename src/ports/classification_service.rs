//! Classification Service Port - Interface for the remote risk classifier.
//!
//! The service evaluates a complete answer set against every clinical
//! category it knows and returns one risk assessment per category.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::questionnaire::AnswerSet;
use crate::domain::submission::ClassificationResult;

/// Message shown when the service gives no usable detail.
pub const DEFAULT_CLASSIFICATION_FAILURE: &str = "Failed to classify patient data";

/// Port for remote classification.
#[async_trait]
pub trait ClassificationService: Send + Sync {
    /// Enumerate the category names the service evaluates.
    ///
    /// Only used to size progress; callers tolerate failure.
    async fn list_categories(&self) -> Result<Vec<String>, ClassificationError>;

    /// Classify an answer set across all categories.
    async fn classify(&self, answers: &AnswerSet) -> Result<ClassificationResult, ClassificationError>;
}

/// Errors from the classification service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassificationError {
    /// Service answered with a non-success status.
    #[error("classification rejected ({status}): {}", detail.as_deref().unwrap_or(DEFAULT_CLASSIFICATION_FAILURE))]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// `detail` field of the error body, if any.
        detail: Option<String>,
    },

    /// Request did not complete.
    #[error("network error: {0}")]
    Network(String),

    /// Request exceeded the configured timeout.
    #[error("classification timed out")]
    Timeout,

    /// Response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// Service is not reachable or not configured.
    #[error("classification service unavailable: {0}")]
    Unavailable(String),
}

impl ClassificationError {
    /// Operator-facing message: the service detail when present.
    pub fn user_message(&self) -> String {
        match self {
            ClassificationError::Rejected {
                detail: Some(detail),
                ..
            } if !detail.trim().is_empty() => detail.clone(),
            _ => DEFAULT_CLASSIFICATION_FAILURE.to_string(),
        }
    }

    /// Whether repeating the same request might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClassificationError::Rejected { status, .. } => *status >= 500,
            ClassificationError::Network(_)
            | ClassificationError::Timeout
            | ClassificationError::Unavailable(_) => true,
            ClassificationError::Parse(_) => false,
        }
    }
}

impl From<ClassificationError> for DomainError {
    fn from(err: ClassificationError) -> Self {
        DomainError::new(ErrorCode::ClassificationFailed, err.user_message())
            .with_detail("cause", err.to_string())
            .with_detail("retryable", err.is_retryable().to_string())
    }
}
