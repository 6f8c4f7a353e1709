// SPDX-FileCopyrightText: 2026 Revwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end poll loop testing.
//!
//! `TestHarness` assembles a [`PollLoop`] with a [`MockSource`], a
//! [`MockChannel`], and a [`ManualClock`], and exposes all of them for
//! scripting and assertions.

use std::sync::Arc;
use std::time::Duration;

use revwatch_agent::{CycleOutcome, Notifier, PollLoop};
use revwatch_config::model::PollConfig;
use revwatch_core::Cursor;
use tokio_util::sync::CancellationToken;

use crate::manual_clock::ManualClock;
use crate::mock_channel::MockChannel;
use crate::mock_source::MockSource;

/// Chat id every harness notification is addressed to.
pub const TEST_CHAT_ID: &str = "424242";

/// Builder for creating test environments with configurable options.
pub struct TestHarnessBuilder {
    from_date: Option<Cursor>,
    now: Cursor,
    interval: Duration,
    failing_channel: bool,
    cancel_after: Option<usize>,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            from_date: None,
            now: 1_549_962_000,
            interval: Duration::from_secs(600),
            failing_channel: false,
            cancel_after: None,
        }
    }

    /// Start the cursor at `from_date` instead of the clock time.
    pub fn with_from_date(mut self, from_date: Cursor) -> Self {
        self.from_date = Some(from_date);
        self
    }

    /// Time the manual clock reports at startup.
    pub fn with_now(mut self, now: Cursor) -> Self {
        self.now = now;
        self
    }

    /// Sleep between cycles.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Make every notification delivery fail.
    pub fn with_failing_channel(mut self) -> Self {
        self.failing_channel = true;
        self
    }

    /// Fire the harness cancellation token during sleep number `sleeps`.
    pub fn cancel_after_sleeps(mut self, sleeps: usize) -> Self {
        self.cancel_after = Some(sleeps);
        self
    }

    /// Build the harness.
    pub fn build(self) -> TestHarness {
        let cancel = CancellationToken::new();

        let mut clock = ManualClock::new(self.now);
        if let Some(sleeps) = self.cancel_after {
            clock = clock.cancel_after(sleeps, cancel.clone());
        }
        let clock = Arc::new(clock);

        let source = Arc::new(MockSource::new());
        let channel = Arc::new(if self.failing_channel {
            MockChannel::failing()
        } else {
            MockChannel::new()
        });

        let config = PollConfig {
            interval_secs: self.interval.as_secs(),
            from_date: self.from_date,
        };
        let poll = PollLoop::new(
            source.clone(),
            Notifier::new(channel.clone(), TEST_CHAT_ID),
            clock.clone(),
            &config,
        );

        TestHarness {
            poll,
            source,
            channel,
            clock,
            cancel,
        }
    }
}

/// A complete poll loop running against mock adapters.
pub struct TestHarness {
    /// The loop under test.
    pub poll: PollLoop,
    /// Scripted review source.
    pub source: Arc<MockSource>,
    /// Capturing channel.
    pub channel: Arc<MockChannel>,
    /// Clock driving the loop's sleeps.
    pub clock: Arc<ManualClock>,
    /// Token passed to [`PollLoop::run`] by [`TestHarness::run`].
    pub cancel: CancellationToken,
}

impl TestHarness {
    /// Create a new builder.
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// Queue a response body for the next fetch.
    pub async fn respond(&self, body: serde_json::Value) {
        self.source.push_response(body).await;
    }

    /// Run a single cycle.
    pub async fn cycle(&mut self) -> CycleOutcome {
        self.poll.run_cycle().await
    }

    /// Run the loop until the harness token is cancelled.
    ///
    /// Requires [`TestHarnessBuilder::cancel_after_sleeps`], otherwise the
    /// loop never stops.
    pub async fn run(&mut self) {
        let cancel = self.cancel.clone();
        self.poll.run(cancel).await;
    }

    /// Current cursor of the loop.
    pub fn cursor(&self) -> Cursor {
        self.poll.cursor()
    }

    /// Text of every delivered notification.
    pub async fn notifications(&self) -> Vec<String> {
        self.channel.sent_texts().await
    }
}
