//! SubmissionCoordinator - at most one classification call per session.
//!
//! A [`SubmissionSession`] outlives any single coordinator. Remounting the
//! result view builds a new coordinator over the same session; the session's
//! marker is claimed synchronously on entry, so only the first `submit` ever
//! reaches the remote service. Later callers observe the session state.
//!
//! Once claimed, the pipeline runs on its own task. Dropping the caller's
//! future detaches from it; the call still completes and stores its result
//! on the session, where a remount finds it.
//!
//! Progress is paced by a ticker while the classification call is pending.
//! It is capped one short of `total` until the real result is in hand.
//!
//! Audit writes are spawned and never awaited by `submit`.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval, sleep, timeout, Instant, MissedTickBehavior};
use tracing::Instrument;

use crate::config::SubmissionConfig;
use crate::domain::foundation::{DomainError, SessionId, StateMachine};
use crate::domain::questionnaire::AnswerSet;
use crate::domain::submission::{
    ClassificationResult, Progress, ProgressTracker, SubmissionMarker, SubmissionState,
    SubmissionStatus,
};
use crate::ports::{
    AuditLog, ClassificationError, ClassificationService, DEFAULT_CLASSIFICATION_FAILURE,
};

pub const PREPARING_LABEL: &str = "กำลังเตรียมข้อมูล...";
pub const FINISHED_LABEL: &str = "เสร็จสิ้น";

const PROGRESS_CHANNEL_CAPACITY: usize = 128;

fn analysing_label(category: &str) -> String {
    format!("กำลังวิเคราะห์: {category}")
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Session-scoped submission state shared across coordinator instances.
pub struct SubmissionSession {
    id: SessionId,
    marker: Mutex<SubmissionMarker>,
    result: Mutex<Option<ClassificationResult>>,
    state: watch::Sender<SubmissionState>,
    progress: broadcast::Sender<Progress>,
    audits: Mutex<Vec<JoinHandle<()>>>,
}

impl SubmissionSession {
    pub fn new() -> Arc<Self> {
        Self::with_id(SessionId::new())
    }

    pub fn with_id(id: SessionId) -> Arc<Self> {
        let (state, _) = watch::channel(SubmissionState::Idle);
        let (progress, _) = broadcast::channel(PROGRESS_CHANNEL_CAPACITY);
        Arc::new(Self {
            id,
            marker: Mutex::new(SubmissionMarker::NotStarted),
            result: Mutex::new(None),
            state,
            progress,
            audits: Mutex::new(Vec::new()),
        })
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn marker(&self) -> SubmissionMarker {
        *lock(&self.marker)
    }

    pub fn state(&self) -> SubmissionState {
        self.state.borrow().clone()
    }

    /// Result stored for this session, if classification succeeded.
    pub fn result(&self) -> Option<ClassificationResult> {
        lock(&self.result).clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    /// Every progress update published from now on, in order.
    pub fn progress_updates(&self) -> broadcast::Receiver<Progress> {
        self.progress.subscribe()
    }

    /// Waits until the session reaches `Succeeded` or `Failed`.
    pub async fn settled(&self) -> SubmissionState {
        let mut rx = self.subscribe();
        loop {
            let current = rx.borrow_and_update().clone();
            if matches!(
                current.status(),
                SubmissionStatus::Succeeded | SubmissionStatus::Failed
            ) {
                return current;
            }
            if rx.changed().await.is_err() {
                return self.state();
            }
        }
    }

    /// Waits for every audit write spawned so far.
    pub async fn flush_audit(&self) {
        let pending = std::mem::take(&mut *lock(&self.audits));
        for handle in pending {
            if let Err(e) = handle.await {
                tracing::warn!(error = %e, "Audit task ended abnormally");
            }
        }
    }

    fn track_audit(&self, handle: JoinHandle<()>) {
        let mut audits = lock(&self.audits);
        audits.retain(|pending| !pending.is_finished());
        audits.push(handle);
    }

    /// Test-and-set on the marker. No await happens while the lock is held.
    fn try_claim(&self) -> bool {
        lock(&self.marker).try_claim()
    }

    fn set_marker(&self, next: SubmissionMarker) {
        let mut marker = lock(&self.marker);
        match marker.transition_to(next) {
            Ok(next) => *marker = next,
            Err(e) => tracing::error!(error = %e, from = ?*marker, to = ?next, "Invalid marker transition"),
        }
    }

    /// Moves to `next` if the lifecycle allows it.
    fn publish(&self, next: SubmissionState) {
        let target = next.status();
        self.state.send_if_modified(|state| {
            if state.status().can_transition_to(&target) {
                *state = next;
                true
            } else {
                tracing::error!(from = ?state.status(), to = ?target, "Invalid submission transition");
                false
            }
        });
    }

    /// Replaces the progress of an in-flight submission.
    fn publish_progress(&self, progress: Progress) {
        let _ = self.progress.send(progress.clone());
        self.state.send_if_modified(|state| match state {
            SubmissionState::InFlight { progress: current } => {
                *current = progress;
                true
            }
            _ => false,
        });
    }
}

impl std::fmt::Debug for SubmissionSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionSession")
            .field("id", &self.id)
            .field("marker", &self.marker())
            .field("state", &self.state().status())
            .finish()
    }
}

/// What a call to [`SubmissionCoordinator::submit`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// This call classified the answers.
    Completed(ClassificationResult),
    /// This call reached the service and it failed.
    Failed { message: String },
    /// The session was already claimed; nothing was sent.
    AlreadySubmitted(SubmissionState),
}

/// Drives one session's submission.
#[derive(Clone)]
pub struct SubmissionCoordinator {
    session: Arc<SubmissionSession>,
    classifier: Arc<dyn ClassificationService>,
    audit: Arc<dyn AuditLog>,
    config: SubmissionConfig,
}

impl SubmissionCoordinator {
    pub fn new(
        session: Arc<SubmissionSession>,
        classifier: Arc<dyn ClassificationService>,
        audit: Arc<dyn AuditLog>,
        config: SubmissionConfig,
    ) -> Self {
        Self {
            session,
            classifier,
            audit,
            config,
        }
    }

    pub fn session(&self) -> &Arc<SubmissionSession> {
        &self.session
    }

    /// Submits `answers` unless this session already has a submission.
    #[tracing::instrument(skip(self, answers), fields(session_id = %self.session.id()))]
    pub async fn submit(&self, answers: AnswerSet) -> SubmissionOutcome {
        if !self.session.try_claim() {
            tracing::debug!(marker = ?self.session.marker(), "Submission already claimed");
            return SubmissionOutcome::AlreadySubmitted(self.session.state());
        }

        let pipeline = self.clone();
        let task = tokio::spawn(
            async move { pipeline.run(answers).await }.instrument(tracing::Span::current()),
        );

        match task.await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, "Submission task ended abnormally");
                self.fail(DEFAULT_CLASSIFICATION_FAILURE.to_string())
            }
        }
    }

    async fn run(&self, answers: AnswerSet) -> SubmissionOutcome {
        let started = Instant::now();
        self.session.publish(SubmissionState::Preparing);
        self.spawn_raw_input_audit(&answers);

        let categories = self.enumerate_categories().await;
        let mut tracker = ProgressTracker::new(categories.len() as u32);
        self.session.publish(SubmissionState::InFlight {
            progress: tracker.snapshot(PREPARING_LABEL),
        });

        let outcome = self
            .classify_with_progress(&answers, &categories, &mut tracker)
            .await;

        match outcome {
            Ok(result) => {
                self.complete_progress(&categories, &mut tracker);
                self.hold_for_min_display(started).await;

                *lock(&self.session.result) = Some(result.clone());
                self.session.set_marker(SubmissionMarker::Done);
                self.session.publish(SubmissionState::Succeeded {
                    result: result.clone(),
                });
                tracing::info!(categories = result.len(), "Submission succeeded");

                self.spawn_submission_audit(answers, result.clone());
                SubmissionOutcome::Completed(result)
            }
            Err(e) => {
                let message = e.user_message();
                let error = DomainError::from(e);
                tracing::error!(code = %error.code, details = ?error.details, "Classification failed");
                self.fail(message)
            }
        }
    }

    fn fail(&self, message: String) -> SubmissionOutcome {
        self.session.set_marker(SubmissionMarker::Failed);
        self.session.publish(SubmissionState::Failed {
            message: message.clone(),
        });
        SubmissionOutcome::Failed { message }
    }

    /// Re-arms a failed session. Returns false in any other state.
    pub fn retry(&self) -> bool {
        let mut marker = lock(&self.session.marker);
        if *marker != SubmissionMarker::Failed {
            return false;
        }
        *marker = SubmissionMarker::NotStarted;
        drop(marker);

        self.session.publish(SubmissionState::Idle);
        tracing::info!(session_id = %self.session.id(), "Submission re-armed for retry");
        true
    }

    async fn enumerate_categories(&self) -> Vec<String> {
        match self.classifier.list_categories().await {
            Ok(categories) => categories,
            Err(e) => {
                tracing::warn!(error = %e, "Could not enumerate categories; progress total falls back to 1");
                Vec::new()
            }
        }
    }

    async fn classify_with_progress(
        &self,
        answers: &AnswerSet,
        categories: &[String],
        tracker: &mut ProgressTracker,
    ) -> Result<ClassificationResult, ClassificationError> {
        let classify = self.classifier.classify(answers);
        tokio::pin!(classify);

        let mut ticker = interval(self.config.progress_tick());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // First tick fires immediately.
        ticker.tick().await;

        let mut ticks = 0u32;
        loop {
            tokio::select! {
                result = &mut classify => return result,
                _ = ticker.tick() => {
                    ticks += 1;
                    if ticks <= self.config.preparing_ticks {
                        continue;
                    }
                    let label = next_label(categories, tracker.current());
                    if let Some(progress) = tracker.advance(label) {
                        self.session.publish_progress(progress);
                    }
                }
            }
        }
    }

    fn complete_progress(&self, categories: &[String], tracker: &mut ProgressTracker) {
        tracker.finish();
        while tracker.current() + 1 < tracker.total() {
            let label = next_label(categories, tracker.current());
            match tracker.advance(label) {
                Some(progress) => self.session.publish_progress(progress),
                None => break,
            }
        }
        if let Some(progress) = tracker.advance(FINISHED_LABEL) {
            self.session.publish_progress(progress);
        }
    }

    async fn hold_for_min_display(&self, started: Instant) {
        let min = self.config.min_display();
        let elapsed = started.elapsed();
        if elapsed < min {
            sleep(min - elapsed).await;
        }
    }

    fn spawn_raw_input_audit(&self, answers: &AnswerSet) {
        let audit = self.audit.clone();
        let answers = answers.clone();
        let limit = self.config.audit_timeout();

        let handle = tokio::spawn(
            async move {
                match timeout(limit, audit.record_raw_input(&answers)).await {
                    Ok(Ok(())) => tracing::debug!("Raw input recorded"),
                    Ok(Err(e)) => {
                        tracing::warn!(error = %DomainError::from(e), "Failed to record raw input")
                    }
                    Err(_) => tracing::warn!("Timed out recording raw input"),
                }
            }
            .instrument(tracing::Span::current()),
        );
        self.session.track_audit(handle);
    }

    fn spawn_submission_audit(&self, answers: AnswerSet, result: ClassificationResult) {
        let audit = self.audit.clone();
        let session_id = self.session.id();
        let limit = self.config.audit_timeout();

        let handle = tokio::spawn(
            async move {
                let write = audit.record_submission(&answers, &result, session_id);
                match timeout(limit, write).await {
                    Ok(Ok(())) => tracing::debug!("Submission recorded"),
                    Ok(Err(e)) => {
                        tracing::warn!(error = %DomainError::from(e), "Failed to record submission")
                    }
                    Err(_) => tracing::warn!("Timed out recording submission"),
                }
            }
            .instrument(tracing::Span::current()),
        );
        self.session.track_audit(handle);
    }
}

/// Label for the category about to be analysed.
fn next_label(categories: &[String], current: u32) -> String {
    categories
        .get(current as usize)
        .map(|category| analysing_label(category))
        .unwrap_or_else(|| PREPARING_LABEL.to_string())
}
