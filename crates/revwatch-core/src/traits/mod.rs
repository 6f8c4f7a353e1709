// SPDX-FileCopyrightText: 2026 Revwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions.
//!
//! Every outbound collaborator of the poll loop sits behind one of these
//! traits and uses `#[async_trait]` for dynamic dispatch.

pub mod adapter;
pub mod channel;
pub mod clock;
pub mod source;

pub use adapter::PluginAdapter;
pub use channel::ChannelAdapter;
pub use clock::{Clock, SystemClock};
pub use source::ReviewSource;
