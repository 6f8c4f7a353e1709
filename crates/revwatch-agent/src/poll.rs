// SPDX-FileCopyrightText: 2026 Revwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The poll loop: fetch, validate, detect, report, sleep, forever.
//!
//! Every recoverable failure is caught at the cycle boundary, turned into an
//! error notification, and followed by the same fixed sleep as a successful
//! cycle. The cursor only moves forward once a snapshot has been validated
//! and its most recent homework understood.

use std::sync::Arc;
use std::time::Duration;

use revwatch_config::model::PollConfig;
use revwatch_core::{Clock, Cursor, FailureKind, Notification, RevwatchError, ReviewSource};
use revwatch_practicum::validate;
use strum::Display;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::detector::{Detection, detect, render};
use crate::metrics;
use crate::notifier::Notifier;

/// Where the loop currently is within a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum PollState {
    Idle,
    Fetching,
    Validating,
    Reporting,
    Sleeping,
}

/// Result of one [`PollLoop::run_cycle`] pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A status change was found and a notification was attempted.
    Reported,
    /// The window held no changes.
    NoChange,
    /// The cycle failed; an error notification was attempted.
    Failed(FailureKind),
}

impl CycleOutcome {
    /// Metrics label for this outcome.
    pub fn label(&self) -> String {
        match self {
            Self::Reported => "reported".to_string(),
            Self::NoChange => "no_change".to_string(),
            Self::Failed(kind) => format!("failed_{kind}"),
        }
    }
}

/// Fixed-interval poller that owns the cursor.
pub struct PollLoop {
    source: Arc<dyn ReviewSource>,
    notifier: Notifier,
    clock: Arc<dyn Clock>,
    interval: Duration,
    cursor: Cursor,
    state: PollState,
}

impl PollLoop {
    /// Creates a loop starting at `config.from_date`, or at the current time
    /// when none is configured.
    pub fn new(
        source: Arc<dyn ReviewSource>,
        notifier: Notifier,
        clock: Arc<dyn Clock>,
        config: &PollConfig,
    ) -> Self {
        let cursor = config.from_date.unwrap_or_else(|| clock.now());
        info!(
            cursor,
            interval_secs = config.interval_secs,
            source = source.name(),
            "poll loop initialized"
        );

        Self {
            source,
            notifier,
            clock,
            interval: Duration::from_secs(config.interval_secs),
            cursor,
            state: PollState::Idle,
        }
    }

    /// Lower bound of the next query window.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn state(&self) -> PollState {
        self.state
    }

    /// Sleep between cycles.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Runs cycles until `cancel` fires.
    ///
    /// Cancellation is observed only while sleeping, so a started cycle
    /// always finishes, including its notification.
    pub async fn run(&mut self, cancel: CancellationToken) {
        info!("poll loop started");
        loop {
            self.run_cycle().await;

            self.set_state(PollState::Sleeping);
            tokio::select! {
                _ = cancel.cancelled() => {
                    info!(cursor = self.cursor, "shutdown requested, poll loop stopping");
                    break;
                }
                _ = self.clock.sleep(self.interval) => {}
            }
            self.set_state(PollState::Idle);
        }
        self.set_state(PollState::Idle);
    }

    /// Runs one fetch..report pass. Never fails; failures are reported and
    /// returned as [`CycleOutcome::Failed`].
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        let outcome = match self.poll_once().await {
            Ok(Detection::Changed(assignment)) => {
                info!(
                    homework = %assignment.name,
                    status = %assignment.status,
                    cursor = self.cursor,
                    "homework status changed"
                );
                self.set_state(PollState::Reporting);
                self.notifier.notify(&render(&assignment)).await;
                CycleOutcome::Reported
            }
            Ok(Detection::NoChange) => {
                info!(cursor = self.cursor, "no new homework statuses");
                CycleOutcome::NoChange
            }
            Err(err) => {
                let kind = err.kind();
                error!(
                    kind = %kind,
                    cursor = self.cursor,
                    error = %err,
                    "{}",
                    failure_summary(&err)
                );
                self.set_state(PollState::Reporting);
                self.notifier.notify(&Notification::failure(&err)).await;
                CycleOutcome::Failed(kind)
            }
        };

        metrics::record_cycle(&outcome);
        outcome
    }

    async fn poll_once(&mut self) -> Result<Detection, RevwatchError> {
        self.set_state(PollState::Fetching);
        let raw = self.source.fetch(self.cursor).await?;

        self.set_state(PollState::Validating);
        let snapshot = validate(&raw)?;
        let detection = detect(&snapshot)?;

        self.advance(snapshot.current_date);
        Ok(detection)
    }

    fn advance(&mut self, next: Cursor) {
        if next < self.cursor {
            warn!(
                cursor = self.cursor,
                current_date = next,
                "server timestamp is behind the cursor"
            );
        }
        debug!(from = self.cursor, to = next, "cursor advanced");
        self.cursor = next;
    }

    fn set_state(&mut self, state: PollState) {
        if self.state != state {
            debug!(from = %self.state, to = %state, "poll state");
            self.state = state;
        }
    }
}

fn failure_summary(err: &RevwatchError) -> &'static str {
    match err {
        RevwatchError::Transport(_) => "review API request failed",
        RevwatchError::Shape(_) => "review API returned an unexpected payload",
        RevwatchError::UnknownStatus { .. } => "review API reported an unknown status",
        RevwatchError::MalformedAssignment(_) => "review API returned a malformed homework",
        RevwatchError::Config(_) | RevwatchError::Delivery { .. } => "poll cycle failed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use revwatch_core::TransportFailure;
    use revwatch_test_utils::{ManualClock, MockChannel, MockSource};
    use serde_json::json;

    const START: Cursor = 1_000;

    fn poll_config() -> PollConfig {
        PollConfig {
            interval_secs: 600,
            from_date: Some(START),
        }
    }

    fn build(
        source: &Arc<MockSource>,
        channel: &Arc<MockChannel>,
        clock: &Arc<ManualClock>,
    ) -> PollLoop {
        PollLoop::new(
            source.clone(),
            Notifier::new(channel.clone(), "424242"),
            clock.clone(),
            &poll_config(),
        )
    }

    #[tokio::test]
    async fn change_is_reported_and_cursor_advances() {
        let source = Arc::new(MockSource::new());
        source
            .push_response(json!({
                "homeworks": [{"homework_name": "hw1", "status": "approved"}],
                "current_date": 2_000,
            }))
            .await;
        let channel = Arc::new(MockChannel::new());
        let clock = Arc::new(ManualClock::new(5_000));
        let mut poll = build(&source, &channel, &clock);

        assert_eq!(poll.run_cycle().await, CycleOutcome::Reported);
        assert_eq!(poll.cursor(), 2_000);
        assert_eq!(source.requested_cursors().await, vec![START]);
        assert_eq!(
            channel.sent_texts().await,
            vec!["Изменился статус проверки работы \"hw1\". Работа проверена: ревьюеру всё понравилось. Ура!"]
        );
    }

    #[tokio::test]
    async fn transport_failure_keeps_cursor() {
        let source = Arc::new(MockSource::new());
        source
            .push_failure(TransportFailure::Status { code: 503 })
            .await;
        let channel = Arc::new(MockChannel::new());
        let clock = Arc::new(ManualClock::new(5_000));
        let mut poll = build(&source, &channel, &clock);

        assert_eq!(
            poll.run_cycle().await,
            CycleOutcome::Failed(FailureKind::Transport)
        );
        assert_eq!(poll.cursor(), START);
        let texts = channel.sent_texts().await;
        assert_eq!(texts.len(), 1);
        assert!(texts[0].starts_with("Сбой в работе программы: "));
        assert!(texts[0].contains("503"));
    }

    #[tokio::test]
    async fn delivery_failure_does_not_hold_cursor_back() {
        let source = Arc::new(MockSource::new());
        source
            .push_response(json!({
                "homeworks": [{"homework_name": "hw1", "status": "reviewing"}],
                "current_date": 3_000,
            }))
            .await;
        let channel = Arc::new(MockChannel::failing());
        let clock = Arc::new(ManualClock::new(5_000));
        let mut poll = build(&source, &channel, &clock);

        assert_eq!(poll.run_cycle().await, CycleOutcome::Reported);
        assert_eq!(poll.cursor(), 3_000);
    }

    #[tokio::test]
    async fn cursor_defaults_to_clock_time() {
        let source = Arc::new(MockSource::new());
        let channel = Arc::new(MockChannel::new());
        let clock = Arc::new(ManualClock::new(1_549_962_000));
        let poll = PollLoop::new(
            source,
            Notifier::new(channel, "424242"),
            clock,
            &PollConfig::default(),
        );
        assert_eq!(poll.cursor(), 1_549_962_000);
        assert_eq!(poll.interval(), Duration::from_secs(600));
        assert_eq!(poll.state(), PollState::Idle);
    }

    #[tokio::test]
    async fn run_sleeps_after_every_cycle_and_stops_on_cancel() {
        let source = Arc::new(MockSource::new());
        source
            .push_response(json!({"homeworks": [], "current_date": 1_100}))
            .await;
        source
            .push_failure(TransportFailure::Request {
                message: "connection refused".into(),
            })
            .await;
        source
            .push_response(json!({"homeworks": [], "current_date": 1_300}))
            .await;
        let channel = Arc::new(MockChannel::new());
        let cancel = CancellationToken::new();
        let clock = Arc::new(ManualClock::new(5_000).cancel_after(3, cancel.clone()));
        let mut poll = build(&source, &channel, &clock);

        poll.run(cancel.clone()).await;

        assert!(cancel.is_cancelled());
        assert_eq!(source.fetch_count().await, 3);
        assert_eq!(source.requested_cursors().await, vec![START, 1_100, 1_100]);
        assert_eq!(clock.sleeps(), vec![Duration::from_secs(600); 3]);
        assert_eq!(poll.cursor(), 1_300);
        assert_eq!(channel.sent_count().await, 1);
    }

    #[test]
    fn outcome_labels() {
        assert_eq!(CycleOutcome::Reported.label(), "reported");
        assert_eq!(CycleOutcome::NoChange.label(), "no_change");
        assert_eq!(
            CycleOutcome::Failed(FailureKind::UnknownStatus).label(),
            "failed_unknown_status"
        );
    }
}
