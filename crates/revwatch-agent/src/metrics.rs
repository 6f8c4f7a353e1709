// SPDX-FileCopyrightText: 2026 Revwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Metric registration and recording helpers.
//!
//! Uses the metrics-rs facade; without an installed recorder every call is a
//! no-op.

use metrics::describe_counter;

use crate::poll::CycleOutcome;

/// Register all revwatch metric descriptions.
///
/// Called once at startup.
pub fn register_metrics() {
    describe_counter!(
        "revwatch_cycles_total",
        "Poll cycles completed, by outcome"
    );
    describe_counter!(
        "revwatch_notifications_total",
        "Notification delivery attempts, by result"
    );
}

/// Record a finished poll cycle.
pub fn record_cycle(outcome: &CycleOutcome) {
    metrics::counter!("revwatch_cycles_total", "outcome" => outcome.label()).increment(1);
}

/// Record a notification delivery attempt.
pub fn record_notification(delivered: bool) {
    let result = if delivered { "delivered" } else { "failed" };
    metrics::counter!("revwatch_notifications_total", "result" => result).increment(1);
}
