//! Submission module - lifecycle, dedupe marker, progress and result types.

mod progress;
mod result;
mod status;

pub use progress::{Progress, ProgressTracker};
pub use result::{ClassificationResult, RiskAssessment, RiskLevel};
pub use status::{SubmissionMarker, SubmissionState, SubmissionStatus};
