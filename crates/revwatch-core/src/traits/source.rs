// SPDX-FileCopyrightText: 2026 Revwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Review source trait for the homework-status API.

use async_trait::async_trait;

use crate::error::TransportFailure;
use crate::traits::adapter::PluginAdapter;
use crate::types::Cursor;

/// Adapter for the remote review-status API.
#[async_trait]
pub trait ReviewSource: PluginAdapter {
    /// Requests every status change since `from_date`.
    ///
    /// Returns the decoded JSON body without any structural checks; shape
    /// validation is the caller's job. Implementations never retry.
    async fn fetch(&self, from_date: Cursor) -> Result<serde_json::Value, TransportFailure>;
}
