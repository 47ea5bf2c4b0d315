//! WizardController - the questionnaire wizard with draft persistence.
//!
//! The controller is only constructed through [`WizardController::open`],
//! which reads the draft before anything else. No draft write can therefore
//! precede the initial load.

use crate::application::draft_store::DraftStore;
use crate::application::submission_coordinator::{SubmissionCoordinator, SubmissionOutcome};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::questionnaire::{AnswerField, AnswerPatch, AnswerSet, Questionnaire};
use crate::domain::wizard::{StepTransition, WizardState};

/// Why `submit` did not reach the coordinator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("step {step} is incomplete: {missing:?}")]
    Incomplete {
        step: usize,
        missing: Vec<AnswerField>,
    },
}

impl From<SubmitError> for DomainError {
    fn from(err: SubmitError) -> Self {
        match &err {
            SubmitError::Incomplete { step, missing } => {
                let fields = missing.iter().map(AnswerField::key).collect::<Vec<_>>();
                DomainError::new(ErrorCode::StepIncomplete, err.to_string())
                    .with_detail("step", step.to_string())
                    .with_detail("missing", fields.join(","))
            }
        }
    }
}

pub struct WizardController {
    questionnaire: Questionnaire,
    drafts: DraftStore,
    state: WizardState,
    has_existing_draft: bool,
}

impl WizardController {
    /// Rehydrates from the draft store, falling back to an empty wizard.
    pub async fn open(questionnaire: Questionnaire, drafts: DraftStore) -> Self {
        let draft = drafts.load(questionnaire.step_count()).await;

        let (state, has_existing_draft) = match draft {
            Some(draft) => {
                let resumed = !draft.answers.is_empty();
                let state = WizardState::restore(
                    &questionnaire,
                    draft.answers,
                    draft.step.unwrap_or(1),
                );
                (state, resumed)
            }
            None => (WizardState::new(&questionnaire), false),
        };

        tracing::debug!(
            step = state.current_step(),
            has_existing_draft,
            "Wizard opened"
        );

        Self {
            questionnaire,
            drafts,
            state,
            has_existing_draft,
        }
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn answers(&self) -> &AnswerSet {
        self.state.answers()
    }

    pub fn current_step(&self) -> usize {
        self.state.current_step()
    }

    /// True when a non-empty draft was restored. Advisory only.
    pub fn has_existing_draft(&self) -> bool {
        self.has_existing_draft
    }

    /// Hides the resume notice without touching the draft.
    pub fn dismiss_draft_notice(&mut self) {
        self.has_existing_draft = false;
    }

    pub fn can_advance(&self) -> bool {
        self.state.is_current_step_valid()
    }

    /// Required fields still unanswered on the current step.
    pub fn missing_fields(&self) -> Vec<AnswerField> {
        self.questionnaire
            .step(self.current_step())
            .map(|step| step.missing(self.answers()))
            .unwrap_or_default()
    }

    /// Merges `patch`, clears inapplicable follow-ups and saves the draft.
    ///
    /// Returns the follow-up fields that were cleared.
    pub async fn update_answers(&mut self, patch: AnswerPatch) -> Vec<AnswerField> {
        let cleared = self.state.apply(&self.questionnaire, patch);
        if !cleared.is_empty() {
            tracing::debug!(?cleared, "Cleared inapplicable answers");
        }
        self.drafts.save_answers(self.state.answers()).await;
        cleared
    }

    pub async fn next(&mut self) -> StepTransition {
        let transition = self.state.next(&self.questionnaire);
        self.persist_step(&transition).await;
        transition
    }

    pub async fn previous(&mut self) -> StepTransition {
        let transition = self.state.previous();
        self.persist_step(&transition).await;
        transition
    }

    /// Clears everything when `confirm` agrees. Returns whether it did.
    pub async fn reset<F>(&mut self, confirm: F) -> bool
    where
        F: FnOnce() -> bool,
    {
        if !confirm() {
            return false;
        }
        self.discard().await;
        tracing::info!("Wizard reset by operator");
        true
    }

    /// Hands the completed answers to `coordinator`.
    ///
    /// The draft is discarded only when this call produced a result. A failed
    /// or duplicate submission leaves the answers in place.
    pub async fn submit(
        &mut self,
        coordinator: &SubmissionCoordinator,
    ) -> Result<SubmissionOutcome, SubmitError> {
        if let Some(step) = self.first_incomplete_step() {
            let missing = self
                .questionnaire
                .step(step)
                .map(|s| s.missing(self.answers()))
                .unwrap_or_default();
            return Err(SubmitError::Incomplete { step, missing });
        }

        let outcome = coordinator.submit(self.answers().clone()).await;
        if matches!(outcome, SubmissionOutcome::Completed(_)) {
            self.discard().await;
        }
        Ok(outcome)
    }

    fn first_incomplete_step(&self) -> Option<usize> {
        self.state
            .step_validity()
            .iter()
            .position(|valid| !valid)
            .map(|index| index + 1)
    }

    async fn persist_step(&self, transition: &StepTransition) {
        if let StepTransition::Moved { to, .. } = transition {
            self.drafts.save_step(*to).await;
        }
    }

    async fn discard(&mut self) {
        self.state = WizardState::new(&self.questionnaire);
        self.has_existing_draft = false;
        self.drafts.clear().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryKeyValueStore;
    use crate::application::draft_store::{ANSWERS_KEY, STEP_KEY};
    use crate::domain::questionnaire::{FieldUpdate, JawWiring, PainScore};
    use std::sync::Arc;

    async fn open_with(store: &InMemoryKeyValueStore) -> WizardController {
        WizardController::open(
            Questionnaire::post_operative(),
            DraftStore::new(Arc::new(store.clone())),
        )
        .await
    }

    fn basic_info() -> AnswerPatch {
        AnswerPatch::new()
            .with(FieldUpdate::Age(Some(30)))
            .with(FieldUpdate::Gender(Some("หญิง".into())))
            .with(FieldUpdate::Hn(Some("HN42".into())))
            .with(FieldUpdate::Procedures(Some(vec!["ผ่าฟันคุด".into()])))
            .with(FieldUpdate::SurgeryDate(Some("2026-10-01".into())))
    }

    #[tokio::test]
    async fn opens_empty_without_draft() {
        let store = InMemoryKeyValueStore::new();
        let wizard = open_with(&store).await;

        assert_eq!(wizard.current_step(), 1);
        assert!(wizard.answers().is_empty());
        assert!(!wizard.has_existing_draft());
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test]
    async fn resumes_saved_draft() {
        let store = InMemoryKeyValueStore::new();
        store.insert(ANSWERS_KEY, r#"{"age": 51, "hn": "HN7"}"#).await;
        store.insert(STEP_KEY, "2").await;

        let wizard = open_with(&store).await;
        assert!(wizard.has_existing_draft());
        assert_eq!(wizard.current_step(), 2);
        assert_eq!(wizard.answers().age, Some(51));
    }

    #[tokio::test]
    async fn dismissing_notice_keeps_draft() {
        let store = InMemoryKeyValueStore::new();
        store.insert(ANSWERS_KEY, r#"{"age": 51}"#).await;

        let mut wizard = open_with(&store).await;
        assert!(wizard.has_existing_draft());

        wizard.dismiss_draft_notice();
        assert!(!wizard.has_existing_draft());
        assert_eq!(wizard.answers().age, Some(51));
        assert!(store.peek(ANSWERS_KEY).await.is_some());
    }

    #[tokio::test]
    async fn update_persists_answers() {
        let store = InMemoryKeyValueStore::new();
        let mut wizard = open_with(&store).await;

        wizard.update_answers(basic_info()).await;

        let saved = store.peek(ANSWERS_KEY).await.unwrap();
        let saved: AnswerSet = serde_json::from_str(&saved).unwrap();
        assert_eq!(&saved, wizard.answers());
        assert!(wizard.can_advance());
    }

    #[tokio::test]
    async fn next_is_blocked_until_step_complete() {
        let store = InMemoryKeyValueStore::new();
        let mut wizard = open_with(&store).await;

        let blocked = wizard.next().await;
        assert!(matches!(blocked, StepTransition::Blocked { step: 1, .. }));
        assert_eq!(store.peek(STEP_KEY).await, None);

        wizard.update_answers(basic_info()).await;
        assert_eq!(wizard.next().await, StepTransition::Moved { from: 1, to: 2 });
        assert_eq!(store.peek(STEP_KEY).await, Some("2".to_string()));
    }

    #[tokio::test]
    async fn previous_is_noop_at_first_step() {
        let store = InMemoryKeyValueStore::new();
        let mut wizard = open_with(&store).await;
        assert_eq!(wizard.previous().await, StepTransition::AtBoundary { step: 1 });
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test]
    async fn retracting_gate_clears_dependent_answer() {
        let store = InMemoryKeyValueStore::new();
        let mut wizard = open_with(&store).await;

        wizard
            .update_answers(
                AnswerPatch::new()
                    .with(FieldUpdate::HasImf(Some(JawWiring::Wired)))
                    .with(FieldUpdate::ImfWireStatus(Some("ลวดหลุด".into()))),
            )
            .await;
        let cleared = wizard
            .update_answers(FieldUpdate::HasImf(Some(JawWiring::NotWired)).into())
            .await;

        assert!(cleared.contains(&AnswerField::ImfWireStatus));
        assert_eq!(wizard.answers().imf_wire_status, None);
    }

    #[tokio::test]
    async fn reset_requires_confirmation() {
        let store = InMemoryKeyValueStore::new();
        let mut wizard = open_with(&store).await;
        wizard.update_answers(basic_info()).await;

        assert!(!wizard.reset(|| false).await);
        assert_eq!(wizard.answers().age, Some(30));

        assert!(wizard.reset(|| true).await);
        assert!(wizard.answers().is_empty());
        assert_eq!(wizard.current_step(), 1);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn missing_fields_lists_conditional_follow_up() {
        let store = InMemoryKeyValueStore::new();
        let mut wizard = open_with(&store).await;
        wizard.update_answers(basic_info()).await;
        wizard.next().await;
        wizard
            .update_answers(FieldUpdate::PainScore(Some(PainScore::new(6).unwrap())).into())
            .await;

        assert!(wizard
            .missing_fields()
            .contains(&AnswerField::PainMedicationEffective));
    }

    #[test]
    fn incomplete_submit_maps_to_step_incomplete() {
        let err: DomainError = SubmitError::Incomplete {
            step: 2,
            missing: vec![AnswerField::WalkingStatus],
        }
        .into();
        assert_eq!(err.code, ErrorCode::StepIncomplete);
        assert_eq!(err.details.get("step"), Some(&"2".to_string()));
        assert_eq!(err.details.get("missing"), Some(&"walking_status".to_string()));
    }
}
