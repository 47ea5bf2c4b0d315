//! Application layer - controllers that coordinate the domain and ports.
//!
//! - `draft_store` - best-effort draft persistence over a `KeyValueStore`
//! - `wizard_controller` - step navigation, edits and reset
//! - `submission_coordinator` - deduplicated classification with progress
//! - `result_report` - overall risk, coverage and export of a result

pub mod draft_store;
pub mod result_report;
pub mod submission_coordinator;
pub mod wizard_controller;

pub use draft_store::{Draft, DraftStore, ANSWERS_KEY, STEP_KEY};
pub use result_report::{
    display_or_unspecified, export, export_file_name, CategoryRow, OverallRisk, PreviewRow,
    ReportExport, ResultReport, NOT_SPECIFIED,
};
pub use submission_coordinator::{
    SubmissionCoordinator, SubmissionOutcome, SubmissionSession, FINISHED_LABEL, PREPARING_LABEL,
};
pub use wizard_controller::{SubmitError, WizardController};
