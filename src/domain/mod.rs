//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machine)
//! - `questionnaire` - Answer schema, validation rules and dependent-field cleanup
//! - `wizard` - Step progression over the questionnaire
//! - `submission` - Submission lifecycle, progress and classification results

pub mod foundation;
pub mod questionnaire;
pub mod submission;
pub mod wizard;
