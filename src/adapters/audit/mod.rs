//! Audit Adapters
//!
//! - **HttpAuditLog** - Posts audit records to the remote service
//! - **InMemoryAuditLog** - Records writes for assertions in tests

mod http_audit_log;
mod in_memory_audit_log;

pub use http_audit_log::HttpAuditLog;
pub use in_memory_audit_log::{AuditRecord, InMemoryAuditLog};
