//! Adapters - Implementations of ports for external systems.
//!
//! ## Storage
//!
//! - `FileKeyValueStore` - One file per key under a directory
//! - `InMemoryKeyValueStore` - Process-local store for tests and previews
//!
//! ## Remote service
//!
//! - `HttpClassificationService` / `MockClassificationService`
//! - `HttpAuditLog` / `InMemoryAuditLog`

pub mod audit;
pub mod classification;
pub mod http_client;
pub mod storage;

pub use audit::{HttpAuditLog, InMemoryAuditLog};
pub use classification::{HttpClassificationService, MockClassificationService};
pub use http_client::{HttpClientError, RemoteServiceConfig};
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};
