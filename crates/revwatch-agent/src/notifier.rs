// SPDX-FileCopyrightText: 2026 Revwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Best-effort notification delivery.

use std::sync::Arc;

use revwatch_core::{ChannelAdapter, Notification, OutboundMessage};
use tracing::{debug, error};

use crate::metrics;

/// Sends notifications to one fixed destination.
///
/// Delivery failures are logged and swallowed: a notification that cannot be
/// sent must never stop the poll loop.
pub struct Notifier {
    channel: Arc<dyn ChannelAdapter>,
    recipient: String,
}

impl Notifier {
    pub fn new(channel: Arc<dyn ChannelAdapter>, recipient: impl Into<String>) -> Self {
        Self {
            channel,
            recipient: recipient.into(),
        }
    }

    /// Sends `notification`. Never fails.
    pub async fn notify(&self, notification: &Notification) {
        let msg = OutboundMessage {
            recipient: self.recipient.clone(),
            content: notification.text().to_string(),
        };

        match self.channel.send(msg).await {
            Ok(message_id) => {
                metrics::record_notification(true);
                debug!(
                    channel = self.channel.name(),
                    message_id = %message_id.0,
                    text = notification.text(),
                    "notification delivered"
                );
            }
            Err(e) => {
                metrics::record_notification(false);
                error!(
                    channel = self.channel.name(),
                    kind = %e.kind(),
                    error = %e,
                    "failed to deliver notification"
                );
            }
        }
    }
}
