// SPDX-FileCopyrightText: 2026 Revwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for revwatch integration tests.
//!
//! Provides mock adapters and a test harness for fast, deterministic tests
//! without network access or real waiting.
//!
//! # Components
//!
//! - [`MockSource`] - Review source replaying scripted responses
//! - [`MockChannel`] - Messaging channel capturing sent messages
//! - [`ManualClock`] - Clock whose sleeps return at once and are recorded
//! - [`TestHarness`] - A poll loop wired to all three

pub mod harness;
pub mod manual_clock;
pub mod mock_channel;
pub mod mock_source;

pub use harness::TestHarness;
pub use manual_clock::ManualClock;
pub use mock_channel::MockChannel;
pub use mock_source::MockSource;
