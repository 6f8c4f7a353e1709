// SPDX-FileCopyrightText: 2026 Revwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Channel adapter trait for messaging platform integrations.

use async_trait::async_trait;

use crate::error::RevwatchError;
use crate::traits::adapter::PluginAdapter;
use crate::types::{MessageId, OutboundMessage};

/// Adapter for delivering notifications to a messaging platform.
#[async_trait]
pub trait ChannelAdapter: PluginAdapter {
    /// Sends a message through the channel.
    ///
    /// Failures are reported as [`RevwatchError::Delivery`].
    async fn send(&self, msg: OutboundMessage) -> Result<MessageId, RevwatchError>;
}
