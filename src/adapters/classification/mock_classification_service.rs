//! Mock Classification Service for testing.
//!
//! - Pre-configured results, consumed in order
//! - Simulated latency for progress and concurrency tests
//! - Error injection
//! - Call tracking

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::questionnaire::AnswerSet;
use crate::domain::submission::ClassificationResult;
use crate::ports::{ClassificationError, ClassificationService};

/// A configured mock classification outcome.
#[derive(Debug, Clone)]
pub enum MockClassification {
    Success(ClassificationResult),
    Error(ClassificationError),
}

/// Mock classifier.
#[derive(Debug, Clone)]
pub struct MockClassificationService {
    responses: Arc<Mutex<VecDeque<MockClassification>>>,
    categories: Result<Vec<String>, ClassificationError>,
    delay: Duration,
    calls: Arc<Mutex<Vec<AnswerSet>>>,
}

impl Default for MockClassificationService {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockClassificationService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            categories: Ok(Vec::new()),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues a successful result.
    pub fn with_result(self, result: ClassificationResult) -> Self {
        lock(&self.responses).push_back(MockClassification::Success(result));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: ClassificationError) -> Self {
        lock(&self.responses).push_back(MockClassification::Error(error));
        self
    }

    /// Sets the category list returned by `list_categories`.
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = Ok(categories.into_iter().map(Into::into).collect());
        self
    }

    /// Makes `list_categories` fail.
    pub fn with_category_error(mut self, error: ClassificationError) -> Self {
        self.categories = Err(error);
        self
    }

    /// Sets simulated latency for `classify`.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Number of `classify` calls made.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Answer sets received by `classify`, in call order.
    pub fn get_calls(&self) -> Vec<AnswerSet> {
        lock(&self.calls).clone()
    }

    fn next_response(&self) -> MockClassification {
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| MockClassification::Success(ClassificationResult::default()))
    }
}

#[async_trait]
impl ClassificationService for MockClassificationService {
    async fn list_categories(&self) -> Result<Vec<String>, ClassificationError> {
        self.categories.clone()
    }

    async fn classify(&self, answers: &AnswerSet) -> Result<ClassificationResult, ClassificationError> {
        lock(&self.calls).push(answers.clone());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response() {
            MockClassification::Success(result) => Ok(result),
            MockClassification::Error(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::submission::RiskAssessment;

    fn result(category: &str) -> ClassificationResult {
        [(
            category.to_string(),
            RiskAssessment {
                risk_level: "ความเสี่ยงต่ำ".into(),
                reason: String::new(),
                recommendation: String::new(),
            },
        )]
        .into_iter()
        .collect()
    }

    #[tokio::test]
    async fn responses_are_consumed_in_order() {
        let mock = MockClassificationService::new()
            .with_result(result("pain"))
            .with_error(ClassificationError::Timeout);

        assert!(mock.classify(&AnswerSet::default()).await.unwrap().get("pain").is_some());
        assert_eq!(
            mock.classify(&AnswerSet::default()).await,
            Err(ClassificationError::Timeout)
        );
        assert!(mock.classify(&AnswerSet::default()).await.unwrap().is_empty());
        assert_eq!(mock.call_count(), 3);
    }

    #[tokio::test]
    async fn categories_can_fail() {
        let mock = MockClassificationService::new()
            .with_category_error(ClassificationError::Network("down".into()));
        assert!(mock.list_categories().await.is_err());
    }
}
