// SPDX-FileCopyrightText: 2026 Revwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock review source for deterministic testing.
//!
//! `MockSource` returns scripted responses in FIFO order and records the
//! cursor of every request.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use revwatch_core::error::{RevwatchError, TransportFailure};
use revwatch_core::traits::{PluginAdapter, ReviewSource};
use revwatch_core::types::{AdapterType, Cursor, HealthStatus};

type Scripted = Result<serde_json::Value, TransportFailure>;

/// A mock review source with a queue of scripted results.
///
/// When the queue runs dry every fetch fails with a request failure, so a
/// test that polls more often than it scripted sees it immediately.
pub struct MockSource {
    responses: Arc<Mutex<VecDeque<Scripted>>>,
    cursors: Arc<Mutex<Vec<Cursor>>>,
}

impl MockSource {
    /// Create a mock source with an empty queue.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            cursors: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a decoded response body.
    pub async fn push_response(&self, body: serde_json::Value) {
        self.responses.lock().await.push_back(Ok(body));
    }

    /// Queue a transport failure.
    pub async fn push_failure(&self, failure: TransportFailure) {
        self.responses.lock().await.push_back(Err(failure));
    }

    /// Cursor passed to each `fetch()` call, in order.
    pub async fn requested_cursors(&self) -> Vec<Cursor> {
        self.cursors.lock().await.clone()
    }

    /// Number of `fetch()` calls so far.
    pub async fn fetch_count(&self) -> usize {
        self.cursors.lock().await.len()
    }

    /// Number of scripted results not yet consumed.
    pub async fn remaining(&self) -> usize {
        self.responses.lock().await.len()
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PluginAdapter for MockSource {
    fn name(&self) -> &str {
        "mock-source"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Source
    }

    async fn health_check(&self) -> Result<HealthStatus, RevwatchError> {
        Ok(HealthStatus::Healthy)
    }
}

#[async_trait]
impl ReviewSource for MockSource {
    async fn fetch(&self, from_date: Cursor) -> Result<serde_json::Value, TransportFailure> {
        self.cursors.lock().await.push(from_date);
        self.responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportFailure::Request {
                    message: "mock source has no scripted response".into(),
                })
            })
    }
}
