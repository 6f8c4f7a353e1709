// SPDX-FileCopyrightText: 2026 Revwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation.
//!
//! Checks what serde attributes cannot express: the three credentials the
//! poll loop cannot start without, and the sanity of intervals and URLs.

use crate::diagnostic::ConfigError;
use crate::model::RevwatchConfig;

/// Validate a deserialized configuration.
///
/// Collects every problem instead of stopping at the first one.
pub fn validate_config(config: &RevwatchConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let required = [
        ("practicum.token", &config.practicum.token),
        ("telegram.bot_token", &config.telegram.bot_token),
        ("telegram.chat_id", &config.telegram.chat_id),
    ];
    for (key, value) in required {
        if value.as_deref().is_none_or(|v| v.trim().is_empty()) {
            errors.push(ConfigError::missing(key));
        }
    }

    if let Some(chat_id) = config.telegram.chat_id.as_deref()
        && !chat_id.trim().is_empty()
        && !is_valid_chat_id(chat_id)
    {
        errors.push(ConfigError::Validation {
            message: format!(
                "telegram.chat_id `{chat_id}` must be a numeric chat id or an @channel username"
            ),
        });
    }

    let endpoint = config.practicum.endpoint.trim();
    if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
        errors.push(ConfigError::Validation {
            message: format!("practicum.endpoint `{endpoint}` must be an http(s) URL"),
        });
    }

    if config.practicum.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "practicum.timeout_secs must be greater than zero".to_string(),
        });
    }

    if config.poll.interval_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "poll.interval_secs must be greater than zero".to_string(),
        });
    }

    if let Some(from_date) = config.poll.from_date
        && from_date < 0
    {
        errors.push(ConfigError::Validation {
            message: format!("poll.from_date must not be negative, got {from_date}"),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_valid_chat_id(chat_id: &str) -> bool {
    let chat_id = chat_id.trim();
    match chat_id.strip_prefix('@') {
        Some(username) => {
            !username.is_empty() && username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => chat_id.parse::<i64>().is_ok(),
    }
}
