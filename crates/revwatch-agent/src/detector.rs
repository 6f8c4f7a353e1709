// SPDX-FileCopyrightText: 2026 Revwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transition detection.
//!
//! Looks only at the first (most recent) homework of a validated snapshot.
//! There is no memory of what was reported before: the cursor already makes
//! the server filter out updates from earlier windows.

use revwatch_core::{Assignment, HomeworkStatus, Notification, RevwatchError, Snapshot};
use serde_json::Value;

/// Wire key of the homework identifier.
const NAME_KEY: &str = "homework_name";

/// Wire key of the review status code.
const STATUS_KEY: &str = "status";

/// What a snapshot says about the most recent homework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    /// The most recent homework has a known status and must be reported.
    Changed(Assignment),
    /// No homework changed in the queried window.
    NoChange,
}

/// Extracts the most recent homework from `snapshot`.
///
/// The status is checked before the name, so a record with neither is
/// reported as an unknown status.
pub fn detect(snapshot: &Snapshot) -> Result<Detection, RevwatchError> {
    let Some(first) = snapshot.homeworks.first() else {
        return Ok(Detection::NoChange);
    };

    let record = first.as_object().ok_or_else(|| {
        RevwatchError::MalformedAssignment("homework record is not an object".into())
    })?;

    let code = match record.get(STATUS_KEY) {
        Some(Value::String(code)) => code.as_str(),
        Some(other) => {
            return Err(RevwatchError::UnknownStatus {
                status: Some(other.to_string()),
            });
        }
        None => return Err(RevwatchError::UnknownStatus { status: None }),
    };
    let status = HomeworkStatus::from_code(code).ok_or_else(|| RevwatchError::UnknownStatus {
        status: Some(code.to_string()),
    })?;

    let name = record
        .get(NAME_KEY)
        .and_then(Value::as_str)
        .ok_or_else(|| {
            RevwatchError::MalformedAssignment(format!("`{NAME_KEY}` is missing or not a string"))
        })?;

    Ok(Detection::Changed(Assignment {
        name: name.to_string(),
        status,
    }))
}

/// Renders the status-change message for `assignment`.
pub fn render(assignment: &Assignment) -> Notification {
    Notification::status_changed(assignment)
}
