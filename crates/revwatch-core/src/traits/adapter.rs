// SPDX-FileCopyrightText: 2026 Revwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base adapter trait shared by the review source and the messaging channel.

use async_trait::async_trait;

use crate::error::RevwatchError;
use crate::types::{AdapterType, HealthStatus};

/// The base trait for all revwatch adapters.
///
/// Provides identity and a health check used by `revwatch doctor`.
#[async_trait]
pub trait PluginAdapter: Send + Sync + 'static {
    /// Returns the human-readable name of this adapter instance.
    fn name(&self) -> &str;

    /// Returns the semantic version of this adapter.
    fn version(&self) -> semver::Version;

    /// Returns the role of this adapter.
    fn adapter_type(&self) -> AdapterType;

    /// Performs a health check and returns the adapter's current status.
    async fn health_check(&self) -> Result<HealthStatus, RevwatchError>;
}
