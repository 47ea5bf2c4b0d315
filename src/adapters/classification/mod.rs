//! Classification Adapters
//!
//! - **HttpClassificationService** - Talks to the remote classifier over HTTP
//! - **MockClassificationService** - Scripted responses for tests

mod http_classification_service;
mod mock_classification_service;

pub use http_classification_service::HttpClassificationService;
pub use mock_classification_service::{MockClassification, MockClassificationService};
