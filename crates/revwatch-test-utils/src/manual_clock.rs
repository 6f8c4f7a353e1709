// SPDX-FileCopyrightText: 2026 Revwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Manually driven clock.
//!
//! Sleeps return immediately, advance the reported time, and are recorded.
//! Optionally the clock fires a cancellation token during the N-th sleep and
//! then never wakes, which is exactly what a shutdown signal arriving
//! mid-sleep looks like to the poll loop.

use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use revwatch_core::{Clock, Cursor};

/// A [`Clock`] for tests.
pub struct ManualClock {
    now: AtomicI64,
    sleeps: Mutex<Vec<Duration>>,
    cancel_after: Option<(usize, CancellationToken)>,
}

impl ManualClock {
    /// Create a clock reporting `now` as the current Unix time.
    pub fn new(now: Cursor) -> Self {
        Self {
            now: AtomicI64::new(now),
            sleeps: Mutex::new(Vec::new()),
            cancel_after: None,
        }
    }

    /// Cancel `token` during sleep number `sleeps` (1-based) and block that
    /// sleep forever.
    pub fn cancel_after(mut self, sleeps: usize, token: CancellationToken) -> Self {
        self.cancel_after = Some((sleeps, token));
        self
    }

    /// Move the clock forward without sleeping.
    pub fn advance(&self, by: Duration) {
        self.now.fetch_add(secs(by), Ordering::SeqCst);
    }

    /// Every sleep requested so far.
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }

    /// Number of sleeps requested so far.
    pub fn sleep_count(&self) -> usize {
        self.sleeps.lock().map(|s| s.len()).unwrap_or_default()
    }
}

fn secs(duration: Duration) -> i64 {
    i64::try_from(duration.as_secs()).unwrap_or(i64::MAX)
}

#[async_trait]
impl Clock for ManualClock {
    fn now(&self) -> Cursor {
        self.now.load(Ordering::SeqCst)
    }

    async fn sleep(&self, duration: Duration) {
        let count = match self.sleeps.lock() {
            Ok(mut sleeps) => {
                sleeps.push(duration);
                sleeps.len()
            }
            Err(_) => 0,
        };
        self.advance(duration);

        if let Some((limit, token)) = &self.cancel_after
            && count >= *limit
        {
            token.cancel();
            std::future::pending::<()>().await;
        }

        tokio::task::yield_now().await;
    }
}
