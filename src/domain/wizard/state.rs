//! WizardState - current step, accumulated answers and per-step validity.
//!
//! Pure state transitions; persistence is layered on by the controller.

use serde::{Deserialize, Serialize};

use crate::domain::questionnaire::{
    reconcile, retracted_fields, AnswerField, AnswerPatch, AnswerSet, Questionnaire,
};

/// Outcome of a `next`/`previous` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepTransition {
    /// The wizard moved between steps.
    Moved { from: usize, to: usize },
    /// The current step is incomplete; nothing changed.
    Blocked { step: usize, missing: Vec<AnswerField> },
    /// Already at the first/last step; nothing changed.
    AtBoundary { step: usize },
}

impl StepTransition {
    pub fn moved(&self) -> bool {
        matches!(self, StepTransition::Moved { .. })
    }
}

/// Snapshot of the wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardState {
    current_step: usize,
    answers: AnswerSet,
    step_validity: Vec<bool>,
}

impl WizardState {
    /// Fresh state at step 1 with no answers.
    pub fn new(questionnaire: &Questionnaire) -> Self {
        Self::restore(questionnaire, AnswerSet::new(), 1)
    }

    /// State rebuilt from a draft.
    ///
    /// The answers are reconciled, and a step outside the questionnaire falls
    /// back to step 1.
    pub fn restore(questionnaire: &Questionnaire, answers: AnswerSet, step: usize) -> Self {
        let answers = reconcile(answers);
        let current_step = if questionnaire.contains(step) { step } else { 1 };
        let step_validity = questionnaire.validity(&answers);
        Self {
            current_step,
            answers,
            step_validity,
        }
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn step_validity(&self) -> &[bool] {
        &self.step_validity
    }

    /// Validity of the current step.
    pub fn is_current_step_valid(&self) -> bool {
        self.step_validity
            .get(self.current_step - 1)
            .copied()
            .unwrap_or(false)
    }

    pub fn is_first_step(&self) -> bool {
        self.current_step == 1
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step == self.step_validity.len()
    }

    /// Merges `patch`, clears inapplicable follow-ups and re-validates.
    ///
    /// Returns the follow-up fields that were cleared.
    pub fn apply(&mut self, questionnaire: &Questionnaire, patch: AnswerPatch) -> Vec<AnswerField> {
        let mut merged = self.answers.clone();
        merged.merge(patch);

        let cleared = retracted_fields(&merged);
        self.answers = reconcile(merged);
        self.step_validity = questionnaire.validity(&self.answers);
        cleared
    }

    /// Moves forward when the current step is complete.
    pub fn next(&mut self, questionnaire: &Questionnaire) -> StepTransition {
        let from = self.current_step;
        if self.is_last_step() {
            return StepTransition::AtBoundary { step: from };
        }

        if !self.is_current_step_valid() {
            let missing = questionnaire
                .step(from)
                .map(|step| step.missing(&self.answers))
                .unwrap_or_default();
            return StepTransition::Blocked {
                step: from,
                missing,
            };
        }

        self.current_step = from + 1;
        StepTransition::Moved {
            from,
            to: self.current_step,
        }
    }

    /// Moves back one step; a no-op at step 1.
    pub fn previous(&mut self) -> StepTransition {
        let from = self.current_step;
        if self.is_first_step() {
            return StepTransition::AtBoundary { step: from };
        }

        self.current_step = from - 1;
        StepTransition::Moved {
            from,
            to: self.current_step,
        }
    }
}
