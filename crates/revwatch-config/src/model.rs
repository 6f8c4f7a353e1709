// SPDX-FileCopyrightText: 2026 Revwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a misspelled key is an
//! error at startup instead of a silently ignored setting.

use serde::{Deserialize, Deserializer, Serialize};

/// Default Practicum homework-status endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Top-level revwatch configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RevwatchConfig {
    /// Process-wide settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Review API settings.
    #[serde(default)]
    pub practicum: PracticumConfig,

    /// Telegram delivery settings.
    #[serde(default)]
    pub telegram: TelegramConfig,

    /// Poll scheduling settings.
    #[serde(default)]
    pub poll: PollConfig,
}

/// Process-wide settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Practicum homework-status API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PracticumConfig {
    /// OAuth token sent as `Authorization: OAuth <token>`. Required.
    #[serde(default, deserialize_with = "lenient_string")]
    pub token: Option<String>,

    /// Endpoint URL queried with `?from_date=<cursor>`.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for PracticumConfig {
    fn default() -> Self {
        Self {
            token: None,
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Telegram bot configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TelegramConfig {
    /// Telegram Bot API token. Required.
    #[serde(default, deserialize_with = "lenient_string")]
    pub bot_token: Option<String>,

    /// Destination chat: a numeric chat id or an `@channel` username. Required.
    #[serde(default, deserialize_with = "lenient_string")]
    pub chat_id: Option<String>,
}

/// Poll scheduling configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PollConfig {
    /// Seconds to sleep after every cycle, successful or not.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// Initial cursor. Defaults to the current time at startup.
    #[serde(default)]
    pub from_date: Option<i64>,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            from_date: None,
        }
    }
}

fn default_interval_secs() -> u64 {
    600
}

/// Accepts a string or an integer.
///
/// Environment values such as `TELEGRAM_CHAT_ID=12345` reach serde as
/// integers, while TOML usually quotes them.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        Text(String),
        Signed(i64),
        Unsigned(u64),
    }

    Ok(
        Option::<Lenient>::deserialize(deserializer)?.map(|value| match value {
            Lenient::Text(s) => s,
            Lenient::Signed(n) => n.to_string(),
            Lenient::Unsigned(n) => n.to_string(),
        }),
    )
}
