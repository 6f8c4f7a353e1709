// SPDX-FileCopyrightText: 2026 Revwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock channel adapter for deterministic testing.
//!
//! `MockChannel` implements `ChannelAdapter` and captures outbound messages
//! for assertion in tests. Failure can be switched on to exercise delivery
//! error paths.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use revwatch_core::RevwatchError;
use revwatch_core::traits::{ChannelAdapter, PluginAdapter};
use revwatch_core::types::{AdapterType, HealthStatus, MessageId, OutboundMessage};

/// A mock messaging channel for testing.
///
/// Keeps two logs:
/// - **attempts**: every message passed to `send()`
/// - **sent**: only the messages that were accepted
pub struct MockChannel {
    attempts: Arc<Mutex<Vec<OutboundMessage>>>,
    sent: Arc<Mutex<Vec<OutboundMessage>>>,
    failing: AtomicBool,
}

impl MockChannel {
    /// Create a mock channel that accepts every message.
    pub fn new() -> Self {
        Self {
            attempts: Arc::new(Mutex::new(Vec::new())),
            sent: Arc::new(Mutex::new(Vec::new())),
            failing: AtomicBool::new(false),
        }
    }

    /// Create a mock channel that rejects every message.
    pub fn failing() -> Self {
        let channel = Self::new();
        channel.set_failing(true);
        channel
    }

    /// Switch delivery failure on or off.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Get all messages that were accepted by `send()`.
    pub async fn sent_messages(&self) -> Vec<OutboundMessage> {
        self.sent.lock().await.clone()
    }

    /// Text of every accepted message, in order.
    pub async fn sent_texts(&self) -> Vec<String> {
        self.sent
            .lock()
            .await
            .iter()
            .map(|m| m.content.clone())
            .collect()
    }

    /// Get the count of accepted messages.
    pub async fn sent_count(&self) -> usize {
        self.sent.lock().await.len()
    }

    /// Get the count of `send()` calls, accepted or not.
    pub async fn attempt_count(&self) -> usize {
        self.attempts.lock().await.len()
    }

    /// Clear both logs.
    pub async fn clear_sent(&self) {
        self.attempts.lock().await.clear();
        self.sent.lock().await.clear();
    }
}

impl Default for MockChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PluginAdapter for MockChannel {
    fn name(&self) -> &str {
        "mock-channel"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Channel
    }

    async fn health_check(&self) -> Result<HealthStatus, RevwatchError> {
        Ok(HealthStatus::Healthy)
    }
}

#[async_trait]
impl ChannelAdapter for MockChannel {
    async fn send(&self, msg: OutboundMessage) -> Result<MessageId, RevwatchError> {
        self.attempts.lock().await.push(msg.clone());

        if self.failing.load(Ordering::SeqCst) {
            return Err(RevwatchError::Delivery {
                message: "mock channel is failing".into(),
                source: None,
            });
        }

        let id = format!("mock-msg-{}", uuid::Uuid::new_v4());
        self.sent.lock().await.push(msg);
        Ok(MessageId(id))
    }
}
