// SPDX-FileCopyrightText: 2026 Revwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for revwatch.
//!
//! Every failure a poll cycle can run into is one variant of [`RevwatchError`].
//! The poll loop matches on [`RevwatchError::kind`] instead of catching
//! everything generically, so each failure mode stays inspectable.

use strum::{Display, EnumString};
use thiserror::Error;

/// The primary error type used across revwatch adapters and the poll loop.
#[derive(Debug, Error)]
pub enum RevwatchError {
    /// Missing or invalid configuration. Fatal, raised before the loop starts.
    #[error("configuration error: {0}")]
    Config(String),

    /// The review API could not be queried or answered with a non-OK status.
    #[error("transport failure: {0}")]
    Transport(#[from] TransportFailure),

    /// The decoded payload does not have the documented structure.
    #[error("unexpected response shape: {0}")]
    Shape(#[from] ShapeError),

    /// The most recent homework carries a status outside the catalog.
    #[error("{}", describe_unknown_status(status.as_deref()))]
    UnknownStatus { status: Option<String> },

    /// The most recent homework record is missing a required field.
    #[error("malformed homework record: {0}")]
    MalformedAssignment(String),

    /// The messaging channel could not deliver a message.
    #[error("delivery failed: {message}")]
    Delivery {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl RevwatchError {
    /// Classifies the error for log fields, metrics labels, and matching.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Config(_) => FailureKind::Configuration,
            Self::Transport(_) => FailureKind::Transport,
            Self::Shape(_) => FailureKind::Shape,
            Self::UnknownStatus { .. } => FailureKind::UnknownStatus,
            Self::MalformedAssignment(_) => FailureKind::MalformedAssignment,
            Self::Delivery { .. } => FailureKind::Delivery,
        }
    }
}

fn describe_unknown_status(status: Option<&str>) -> String {
    match status {
        Some(s) => format!("unknown homework status `{s}`"),
        None => "homework status is missing".to_string(),
    }
}

/// Failure of the outbound request to the review API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportFailure {
    /// The endpoint answered with anything other than 200 OK.
    #[error("endpoint returned HTTP {code}")]
    Status { code: u16 },

    /// The request could not be completed (connect, DNS, TLS, body read).
    #[error("request could not be completed: {message}")]
    Request { message: String },

    /// The body could not be decoded as JSON.
    #[error("malformed payload: {message}")]
    MalformedPayload { message: String },
}

/// Structural problem found while validating a raw API payload.
///
/// The variants follow the order in which the validator checks the payload,
/// so the first problem found is the one reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("expected a JSON object at the top level, found {found}")]
    NotAnObject { found: &'static str },

    #[error("response has no `homeworks` key")]
    MissingAssignments,

    #[error("`homeworks` must be an array, found {found}")]
    AssignmentsNotAList { found: &'static str },

    #[error("response has no `current_date` key")]
    MissingCurrentDate,

    #[error("`current_date` must be an integer, found {found}")]
    CurrentDateNotInteger { found: &'static str },

    #[error("`current_date` {value} is out of range for a timestamp")]
    CurrentDateOutOfRange { value: u64 },
}

/// Closed classification of [`RevwatchError`] variants.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum FailureKind {
    Configuration,
    Transport,
    Shape,
    UnknownStatus,
    MalformedAssignment,
    Delivery,
}
