// SPDX-FileCopyrightText: 2026 Revwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Injectable time source for the poll loop.

use std::time::Duration;

use async_trait::async_trait;

use crate::types::Cursor;

/// Wall clock and sleep used by the poll loop.
///
/// Tests swap this for a manual clock so cycles run without real delays.
#[async_trait]
pub trait Clock: Send + Sync + 'static {
    /// Current Unix time in seconds.
    fn now(&self) -> Cursor;

    /// Waits for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// [`Clock`] backed by the system time and the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    fn now(&self) -> Cursor {
        chrono::Utc::now().timestamp()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_reports_a_recent_timestamp() {
        // 2024-01-01T00:00:00Z
        assert!(SystemClock.now() > 1_704_067_200);
    }

    #[tokio::test(start_paused = true)]
    async fn system_clock_sleeps_on_the_tokio_timer() {
        let start = tokio::time::Instant::now();
        SystemClock.sleep(Duration::from_secs(600)).await;
        assert!(start.elapsed() >= Duration::from_secs(600));
    }
}
