//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `KeyValueStore` - Durable storage for the in-progress draft
//! - `ClassificationService` - Remote risk classification
//! - `AuditLog` - Best-effort audit trail of submissions

mod audit_log;
mod classification_service;
mod key_value_store;

pub use audit_log::{AuditError, AuditLog};
pub use classification_service::{
    ClassificationError, ClassificationService, DEFAULT_CLASSIFICATION_FAILURE,
};
pub use key_value_store::{KeyValueError, KeyValueStore};
