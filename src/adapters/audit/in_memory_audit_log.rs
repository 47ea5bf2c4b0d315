//! In-memory audit log for tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::foundation::SessionId;
use crate::domain::questionnaire::AnswerSet;
use crate::domain::submission::ClassificationResult;
use crate::ports::{AuditError, AuditLog};

/// A recorded audit write.
#[derive(Debug, Clone, PartialEq)]
pub enum AuditRecord {
    RawInput(AnswerSet),
    Submission {
        answers: AnswerSet,
        result: ClassificationResult,
        session_id: SessionId,
    },
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryAuditLog {
    records: Arc<Mutex<Vec<AuditRecord>>>,
    failure: Option<AuditError>,
    delay: Duration,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl InMemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every write fails with `error`. Attempts are still recorded.
    pub fn failing_with(mut self, error: AuditError) -> Self {
        self.failure = Some(error);
        self
    }

    /// Every write waits `delay` before completing.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn records(&self) -> Vec<AuditRecord> {
        lock(&self.records).clone()
    }

    pub fn raw_input_count(&self) -> usize {
        lock(&self.records)
            .iter()
            .filter(|r| matches!(r, AuditRecord::RawInput(_)))
            .count()
    }

    pub fn submission_count(&self) -> usize {
        lock(&self.records)
            .iter()
            .filter(|r| matches!(r, AuditRecord::Submission { .. }))
            .count()
    }

    async fn write(&self, record: AuditRecord) -> Result<(), AuditError> {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        lock(&self.records).push(record);
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AuditLog for InMemoryAuditLog {
    async fn record_raw_input(&self, answers: &AnswerSet) -> Result<(), AuditError> {
        self.write(AuditRecord::RawInput(answers.clone())).await
    }

    async fn record_submission(
        &self,
        answers: &AnswerSet,
        result: &ClassificationResult,
        session_id: SessionId,
    ) -> Result<(), AuditError> {
        self.write(AuditRecord::Submission {
            answers: answers.clone(),
            result: result.clone(),
            session_id,
        })
        .await
    }
}
