//! Questionnaire module - the answer schema and its pure rules.
//!
//! - `answers` - `AnswerSet`, field keys and typed updates
//! - `options` - option labels, closed enums for gating questions
//! - `validation` - per-step completion rules
//! - `reconcile` - dependent-field cleanup after each edit
//! - `steps` - step layout of the wizard

#[macro_use]
mod macros;

mod answers;
mod options;
mod reconcile;
mod steps;
mod validation;

pub use answers::{
    Answer, AnswerField, AnswerPatch, AnswerSet, FieldUpdate, PainScore, DESCRIBED_FIELDS,
};
pub use options::*;
pub use reconcile::{reconcile, retracted_fields};
pub use steps::{Questionnaire, StepDefinition};
pub use validation::{
    basic_info_complete, basic_info_requirements, daily_life_complete, daily_life_requirements,
    is_satisfied, missing_fields, symptoms_complete, symptoms_requirements, RequirementList,
    StepRule,
};
