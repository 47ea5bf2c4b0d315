//! DraftStore - best-effort persistence of the in-progress answers and step.
//!
//! Two keys are used: the answers as JSON under [`ANSWERS_KEY`] and the step
//! number as a decimal string under [`STEP_KEY`]. Every failure is logged and
//! swallowed; a draft that cannot be read is reported as absent.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::questionnaire::AnswerSet;
use crate::ports::KeyValueStore;

pub const ANSWERS_KEY: &str = "patientFormDraft";
pub const STEP_KEY: &str = "patientFormStep";

/// A readable draft.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub answers: AnswerSet,
    /// Step to resume at, if one was stored and is in range.
    pub step: Option<usize>,
}

#[derive(Clone)]
pub struct DraftStore {
    store: Arc<dyn KeyValueStore>,
}

impl DraftStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn save_answers(&self, answers: &AnswerSet) {
        let json = match serde_json::to_string(answers) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize draft answers");
                return;
            }
        };
        if let Err(e) = self.store.set(ANSWERS_KEY, &json).await {
            tracing::warn!(error = %DomainError::from(e), "Failed to save draft answers");
        }
    }

    /// Absent when nothing is stored, the store fails, or the JSON is unreadable.
    pub async fn load_answers(&self) -> Option<AnswerSet> {
        let raw = match self.store.get(ANSWERS_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %DomainError::from(e), "Failed to read draft answers");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(answers) => Some(answers),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable draft answers");
                None
            }
        }
    }

    pub async fn save_step(&self, step: usize) {
        if let Err(e) = self.store.set(STEP_KEY, &step.to_string()).await {
            tracing::warn!(error = %DomainError::from(e), step, "Failed to save draft step");
        }
    }

    /// Absent when nothing is stored, the store fails, or the value is not a
    /// positive integer.
    pub async fn load_step(&self) -> Option<usize> {
        let raw = match self.store.get(STEP_KEY).await {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(error = %DomainError::from(e), "Failed to read draft step");
                return None;
            }
        };

        match raw.trim().parse::<usize>() {
            Ok(step) if step >= 1 => Some(step),
            _ => {
                tracing::warn!(value = %raw, "Discarding invalid draft step");
                None
            }
        }
    }

    /// Loads answers and step together.
    ///
    /// A step is only honoured alongside readable answers and when it lies in
    /// `1..=step_count`.
    pub async fn load(&self, step_count: usize) -> Option<Draft> {
        let answers = self.load_answers().await?;
        let step = self
            .load_step()
            .await
            .filter(|step| (1..=step_count).contains(step));
        Some(Draft { answers, step })
    }

    /// Removes both keys.
    pub async fn clear(&self) {
        for key in [ANSWERS_KEY, STEP_KEY] {
            if let Err(e) = self.store.remove(key).await {
                tracing::warn!(error = %DomainError::from(e), key, "Failed to clear draft key");
            }
        }
    }
}
