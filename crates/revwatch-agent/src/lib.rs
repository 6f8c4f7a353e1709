// SPDX-FileCopyrightText: 2026 Revwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Poll loop and notification pipeline for revwatch.
//!
//! The [`PollLoop`] is the central coordinator that:
//! - Queries the review source with the current cursor
//! - Validates the snapshot and detects the latest status change
//! - Reports changes and classified failures through the [`Notifier`]
//! - Sleeps a fixed interval and repeats until shut down

pub mod detector;
pub mod metrics;
pub mod notifier;
pub mod poll;
pub mod shutdown;

pub use detector::{Detection, detect, render};
pub use notifier::Notifier;
pub use poll::{CycleOutcome, PollLoop, PollState};
pub use shutdown::install_signal_handler;
