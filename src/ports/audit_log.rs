//! Audit Log Port - Interface for the remote audit trail.
//!
//! Audit writes are best-effort. A failing audit never changes what the
//! operator sees.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::questionnaire::AnswerSet;
use crate::domain::submission::ClassificationResult;

/// Errors from the audit log.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuditError {
    #[error("audit write rejected ({status}): {detail}")]
    Rejected { status: u16, detail: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("audit write timed out")]
    Timeout,
}

impl From<AuditError> for DomainError {
    fn from(err: AuditError) -> Self {
        let domain = DomainError::new(ErrorCode::AuditFailed, err.to_string());
        match err {
            AuditError::Rejected { status, .. } => domain.with_detail("status", status.to_string()),
            _ => domain,
        }
    }
}

/// Port for audit writes.
#[async_trait]
pub trait AuditLog: Send + Sync {
    /// Record the answers exactly as submitted, before classification.
    async fn record_raw_input(&self, answers: &AnswerSet) -> Result<(), AuditError>;

    /// Record a completed submission with its result.
    async fn record_submission(
        &self,
        answers: &AnswerSet,
        result: &ClassificationResult,
        session_id: SessionId,
    ) -> Result<(), AuditError>;
}
