//! HTTP Audit Log
//!
//! - `POST /log/raw-input` with the answers as the body
//! - `POST /log/submission` with `{"form_data", "results", "session_id"}`

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;

use crate::adapters::http_client::{read_error_detail, HttpClientError, RemoteServiceConfig};
use crate::domain::foundation::SessionId;
use crate::domain::questionnaire::AnswerSet;
use crate::domain::submission::ClassificationResult;
use crate::ports::{AuditError, AuditLog};

#[derive(Serialize)]
struct SubmissionRecord<'a> {
    form_data: &'a AnswerSet,
    results: &'a ClassificationResult,
    session_id: String,
}

/// Remote audit log client.
#[derive(Debug, Clone)]
pub struct HttpAuditLog {
    config: RemoteServiceConfig,
    client: Client,
}

impl HttpAuditLog {
    pub fn new(config: RemoteServiceConfig) -> Result<Self, HttpClientError> {
        let client = config.build_client()?;
        Ok(Self { config, client })
    }

    async fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<(), AuditError> {
        let response = self
            .client
            .post(self.config.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AuditError::Timeout
                } else {
                    AuditError::Network(e.to_string())
                }
            })?;
        Self::check_status(response).await
    }

    async fn check_status(response: Response) -> Result<(), AuditError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let detail = read_error_detail(response)
            .await
            .unwrap_or_else(|| status.to_string());
        Err(AuditError::Rejected {
            status: status.as_u16(),
            detail,
        })
    }
}

#[async_trait]
impl AuditLog for HttpAuditLog {
    async fn record_raw_input(&self, answers: &AnswerSet) -> Result<(), AuditError> {
        self.post("log/raw-input", answers).await
    }

    async fn record_submission(
        &self,
        answers: &AnswerSet,
        result: &ClassificationResult,
        session_id: SessionId,
    ) -> Result<(), AuditError> {
        let record = SubmissionRecord {
            form_data: answers,
            results: result,
            session_id: session_id.to_string(),
        };
        self.post("log/submission", &record).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    type Seen = Arc<Mutex<Vec<(String, Value)>>>;

    async fn serve(seen: Seen) -> String {
        let raw = seen.clone();
        let submission = seen.clone();
        let app = Router::new()
            .route(
                "/log/raw-input",
                post(move |Json(body): Json<Value>| {
                    let seen = raw.clone();
                    async move {
                        seen.lock().unwrap().push(("raw".into(), body));
                        Json(json!({"status": "ok"}))
                    }
                }),
            )
            .route(
                "/log/submission",
                post(move |Json(body): Json<Value>| {
                    let seen = submission.clone();
                    async move {
                        seen.lock().unwrap().push(("submission".into(), body));
                        Json(json!({"status": "ok"}))
                    }
                }),
            );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn raw_input_posts_answers_as_body() {
        let seen: Seen = Arc::default();
        let log = HttpAuditLog::new(RemoteServiceConfig::new(serve(seen.clone()).await)).unwrap();

        let answers = AnswerSet {
            hn: Some("HN9".into()),
            ..Default::default()
        };
        log.record_raw_input(&answers).await.unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "raw");
        assert_eq!(seen[0].1["hn"], "HN9");
    }

    #[tokio::test]
    async fn submission_carries_session_id() {
        let seen: Seen = Arc::default();
        let log = HttpAuditLog::new(RemoteServiceConfig::new(serve(seen.clone()).await)).unwrap();

        let session_id = SessionId::new();
        log.record_submission(&AnswerSet::default(), &ClassificationResult::default(), session_id)
            .await
            .unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].0, "submission");
        assert_eq!(seen[0].1["session_id"], session_id.to_string());
        assert!(seen[0].1["form_data"].is_object());
        assert!(seen[0].1["results"].is_object());
    }

    #[tokio::test]
    async fn rejection_uses_detail() {
        let app = Router::new().route(
            "/log/raw-input",
            post(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"detail": "Failed to log raw input: sheet locked"})),
                )
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let log = HttpAuditLog::new(RemoteServiceConfig::new(format!("http://{}", addr))).unwrap();
        let err = log.record_raw_input(&AnswerSet::default()).await.unwrap_err();
        assert_eq!(
            err,
            AuditError::Rejected {
                status: 500,
                detail: "Failed to log raw input: sheet locked".into()
            }
        );
    }
}
