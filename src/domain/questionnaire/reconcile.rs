//! Dependent-field cleanup.
//!
//! Runs after every mutation. Any follow-up whose gate has closed is removed,
//! so an answer set never carries a description without its parent or a
//! follow-up for a condition that no longer holds.

use super::answers::{AnswerField, AnswerSet, DESCRIBED_FIELDS};

/// Returns `answers` with every inapplicable follow-up cleared.
///
/// Idempotent: reconciling a reconciled set changes nothing.
pub fn reconcile(mut answers: AnswerSet) -> AnswerSet {
    if !answers.pain_score.is_some_and(|score| score.indicates_pain()) {
        answers.pain_medication_effective = None;
    }

    if !answers.has_imf.is_some_and(|wiring| wiring.is_wired()) {
        answers.imf_wire_status = None;
        answers.imf_wire_description = None;
    }

    if !answers
        .antibiotic_compliance
        .is_some_and(|compliance| compliance.needs_missed_dose_count())
    {
        answers.antibiotic_description = None;
    }

    for (parent, description) in DESCRIBED_FIELDS {
        if !answers.has(*parent) {
            answers.clear(*description);
        }
    }

    answers
}

/// Fields that `reconcile` would clear, without modifying `answers`.
pub fn retracted_fields(answers: &AnswerSet) -> Vec<AnswerField> {
    let reconciled = reconcile(answers.clone());
    AnswerField::ALL
        .iter()
        .copied()
        .filter(|field| answers.has(*field) && !reconciled.has(*field))
        .collect()
}
