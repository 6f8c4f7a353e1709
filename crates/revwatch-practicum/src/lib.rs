// SPDX-FileCopyrightText: 2026 Revwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Practicum review-source adapter for revwatch.
//!
//! This crate implements [`ReviewSource`] for the Practicum homework-status
//! API and provides the structural validator for its responses.

pub mod client;
pub mod snapshot;

use std::time::Duration;

use async_trait::async_trait;
use revwatch_config::model::PracticumConfig;
use revwatch_core::error::{RevwatchError, TransportFailure};
use revwatch_core::traits::{Clock, PluginAdapter, ReviewSource, SystemClock};
use revwatch_core::types::{AdapterType, Cursor, HealthStatus};
use tracing::{debug, info};

use crate::client::PracticumClient;

pub use snapshot::validate;

/// Review source backed by the Practicum homework-status API.
pub struct PracticumSource {
    client: PracticumClient,
}

impl PracticumSource {
    /// Creates a source from the `[practicum]` config section.
    ///
    /// The token must already be present; `validate_config` guarantees that
    /// before the adapters are built.
    pub fn new(config: &PracticumConfig) -> Result<Self, RevwatchError> {
        let token = config
            .token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| RevwatchError::Config("practicum.token is not set".into()))?;

        let client = PracticumClient::new(
            token.trim(),
            &config.endpoint,
            Duration::from_secs(config.timeout_secs),
        )?;

        info!(endpoint = %client.endpoint(), "practicum source initialized");

        Ok(Self { client })
    }
}

#[async_trait]
impl PluginAdapter for PracticumSource {
    fn name(&self) -> &str {
        "practicum"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Source
    }

    /// Issues one request for the current instant and checks the envelope.
    async fn health_check(&self) -> Result<HealthStatus, RevwatchError> {
        let raw = match self.client.homework_statuses(SystemClock.now()).await {
            Ok(raw) => raw,
            Err(e) => return Ok(HealthStatus::Unhealthy(e.to_string())),
        };
        match validate(&raw) {
            Ok(_) => Ok(HealthStatus::Healthy),
            Err(e) => Ok(HealthStatus::Unhealthy(format!(
                "unexpected response shape: {e}"
            ))),
        }
    }
}

#[async_trait]
impl ReviewSource for PracticumSource {
    async fn fetch(&self, from_date: Cursor) -> Result<serde_json::Value, TransportFailure> {
        debug!(from_date, "fetching homework statuses");
        self.client.homework_statuses(from_date).await
    }
}
