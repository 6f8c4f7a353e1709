// SPDX-FileCopyrightText: 2026 Revwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the adapters and the poll loop.

use std::fmt;

use strum::{Display, EnumString};

use crate::error::RevwatchError;
use crate::status::HomeworkStatus;

/// Lower bound (Unix seconds) of the next query window.
pub type Cursor = i64;

/// Unique identifier for a delivered message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageId(pub String);

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is not operational.
    Unhealthy(String),
}

/// Identifies the role an adapter plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum AdapterType {
    /// Review API the poll loop reads from.
    Source,
    /// Messaging channel notifications are delivered through.
    Channel,
}

/// A plain-text message addressed to one destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    /// Channel-specific destination (Telegram chat id or `@channel`).
    pub recipient: String,
    /// Message body, sent without markup.
    pub content: String,
}

/// A structurally valid API response.
///
/// Produced only by the snapshot validator; the homework entries themselves
/// are left raw and checked by the transition detector.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Homework records, most recent first.
    pub homeworks: Vec<serde_json::Value>,
    /// Server timestamp, the next cursor value.
    pub current_date: Cursor,
}

/// The most recent homework, once its name and status have been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub name: String,
    pub status: HomeworkStatus,
}

/// Immutable text message produced by one cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification(String);

impl Notification {
    /// Status-change message for a homework.
    pub fn status_changed(assignment: &Assignment) -> Self {
        Self(format!(
            "Изменился статус проверки работы \"{}\". {}",
            assignment.name,
            assignment.status.verdict()
        ))
    }

    /// Error report for a failed cycle.
    pub fn failure(error: &RevwatchError) -> Self {
        Self(format!("Сбой в работе программы: {error}"))
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    pub fn into_text(self) -> String {
        self.0
    }
}

impl From<String> for Notification {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for Notification {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
