//! HTTP Classification Service - ClassificationService over the remote API.
//!
//! # Endpoints
//!
//! - `GET  /flows` returns `{"flows": ["<category>", ...]}`
//! - `POST /classify-all-flows` takes `{"data": <answers>}` and returns
//!   `{"<category>": {"risk_level", "reason", "recommendation"}, ...}`
//!
//! Non-success responses carry a `detail` field which is surfaced verbatim.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

use crate::adapters::http_client::{read_error_detail, HttpClientError, RemoteServiceConfig};
use crate::domain::questionnaire::AnswerSet;
use crate::domain::submission::ClassificationResult;
use crate::ports::{ClassificationError, ClassificationService};

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    data: &'a AnswerSet,
}

#[derive(Deserialize)]
struct FlowsResponse {
    flows: Vec<String>,
}

/// Remote classifier client.
#[derive(Debug, Clone)]
pub struct HttpClassificationService {
    config: RemoteServiceConfig,
    client: Client,
}

impl HttpClassificationService {
    pub fn new(config: RemoteServiceConfig) -> Result<Self, HttpClientError> {
        let client = config.build_client()?;
        Ok(Self { config, client })
    }

    fn map_transport_error(e: reqwest::Error) -> ClassificationError {
        if e.is_timeout() {
            ClassificationError::Timeout
        } else {
            ClassificationError::Network(e.to_string())
        }
    }

    async fn check_status(response: Response) -> Result<Response, ClassificationError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let detail = read_error_detail(response).await;
        tracing::warn!(status = status.as_u16(), detail = ?detail, "Classification service returned error");
        Err(ClassificationError::Rejected {
            status: status.as_u16(),
            detail,
        })
    }
}

#[async_trait]
impl ClassificationService for HttpClassificationService {
    async fn list_categories(&self) -> Result<Vec<String>, ClassificationError> {
        let response = self
            .client
            .get(self.config.url("flows"))
            .send()
            .await
            .map_err(Self::map_transport_error)?;
        let response = Self::check_status(response).await?;

        let body: FlowsResponse = response
            .json()
            .await
            .map_err(|e| ClassificationError::Parse(e.to_string()))?;
        Ok(body.flows)
    }

    #[tracing::instrument(skip(self, answers))]
    async fn classify(&self, answers: &AnswerSet) -> Result<ClassificationResult, ClassificationError> {
        let response = self
            .client
            .post(self.config.url("classify-all-flows"))
            .json(&ClassifyRequest { data: answers })
            .send()
            .await
            .map_err(Self::map_transport_error)?;
        let response = Self::check_status(response).await?;

        let result: ClassificationResult = response
            .json()
            .await
            .map_err(|e| ClassificationError::Parse(e.to_string()))?;
        tracing::debug!(categories = result.len(), "Classification received");
        Ok(result)
    }
}
