//! Postop Intake - Post-operative patient questionnaire
//!
//! A three-step wizard collects post-operative answers, keeps a recoverable
//! draft, submits the completed answers once for remote risk classification
//! and presents the per-category results.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
