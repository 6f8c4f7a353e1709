// SPDX-FileCopyrightText: 2026 Revwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structural validation of a decoded homework-status response.
//!
//! Only the envelope is checked here. The individual homework records stay
//! raw and are inspected by the transition detector.

use revwatch_core::{ShapeError, Snapshot};
use serde_json::Value;

/// Key holding the list of homework records.
pub const HOMEWORKS_KEY: &str = "homeworks";

/// Key holding the server timestamp used as the next cursor.
pub const CURRENT_DATE_KEY: &str = "current_date";

/// Checks that `raw` is an object with a `homeworks` list and an integer
/// `current_date`, and turns it into a [`Snapshot`].
///
/// An empty list is valid. Extra keys are ignored.
pub fn validate(raw: &Value) -> Result<Snapshot, ShapeError> {
    let object = raw.as_object().ok_or(ShapeError::NotAnObject {
        found: json_kind(raw),
    })?;

    let homeworks = match object.get(HOMEWORKS_KEY) {
        None => return Err(ShapeError::MissingAssignments),
        Some(Value::Array(items)) => items.clone(),
        Some(other) => {
            return Err(ShapeError::AssignmentsNotAList {
                found: json_kind(other),
            });
        }
    };

    let current_date = match object.get(CURRENT_DATE_KEY) {
        None => return Err(ShapeError::MissingCurrentDate),
        Some(value) => match (value.as_i64(), value.as_u64()) {
            (Some(date), _) => date,
            (None, Some(value)) => return Err(ShapeError::CurrentDateOutOfRange { value }),
            (None, None) => {
                return Err(ShapeError::CurrentDateNotInteger {
                    found: json_kind(value),
                });
            }
        },
    };

    Ok(Snapshot {
        homeworks,
        current_date,
    })
}

/// Human-readable name of a JSON value's kind, for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
