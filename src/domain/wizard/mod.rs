//! Wizard module - multi-step progression over the questionnaire.

mod state;

pub use state::{StepTransition, WizardState};
