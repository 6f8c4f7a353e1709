// SPDX-FileCopyrightText: 2026 Revwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Merge order (later overrides earlier):
//! 1. Compiled defaults
//! 2. `/etc/revwatch/revwatch.toml`
//! 3. `~/.config/revwatch/revwatch.toml`
//! 4. `./revwatch.toml`
//! 5. `PRACTICUM_TOKEN`, `TELEGRAM_TOKEN`, `TELEGRAM_CHAT_ID`
//! 6. `REVWATCH_*` environment variables

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::RevwatchConfig;

/// System-wide config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/revwatch/revwatch.toml";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "revwatch.toml";

/// Unprefixed variables and the keys they set.
const BARE_ENV_VARS: &[(&str, &str)] = &[
    ("practicum_token", "practicum.token"),
    ("telegram_token", "telegram.bot_token"),
    ("telegram_chat_id", "telegram.chat_id"),
];

/// Load configuration from the standard hierarchy with env var overrides.
pub fn load_config() -> Result<RevwatchConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no files, no environment).
pub fn load_config_from_str(toml_content: &str) -> Result<RevwatchConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(RevwatchConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<RevwatchConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(RevwatchConfig::default()))
        .merge(Toml::file(path))
        .merge(bare_env_provider())
        .merge(env_provider())
        .extract()
}

/// The figment behind [`load_config`], before extraction.
pub fn build_figment() -> Figment {
    layered_figment(&config_paths())
}

/// Defaults, then each file in `paths`, then both environment layers.
fn layered_figment(paths: &[PathBuf]) -> Figment {
    let mut figment = Figment::new().merge(Serialized::defaults(RevwatchConfig::default()));
    for path in paths {
        figment = figment.merge(Toml::file(path));
    }
    figment.merge(bare_env_provider()).merge(env_provider())
}

/// Config file locations, lowest priority first. Missing files are skipped by figment.
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(SYSTEM_CONFIG_PATH)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("revwatch").join(LOCAL_CONFIG_FILE));
    }
    paths.push(PathBuf::from(LOCAL_CONFIG_FILE));
    paths
}

/// Provider for the unprefixed credential variables.
fn bare_env_provider() -> Env {
    Env::raw()
        .filter(|key| {
            BARE_ENV_VARS
                .iter()
                .any(|(name, _)| key.as_str().eq_ignore_ascii_case(name))
        })
        .map(|key| {
            BARE_ENV_VARS
                .iter()
                .find(|(name, _)| key.as_str().eq_ignore_ascii_case(name))
                .map(|(_, dotted)| (*dotted).to_string())
                .unwrap_or_else(|| key.as_str().to_string())
                .into()
        })
}

/// Provider for `REVWATCH_*` variables.
///
/// Uses `Env::map()` rather than `Env::split("_")`: `REVWATCH_TELEGRAM_BOT_TOKEN`
/// must become `telegram.bot_token`, not `telegram.bot.token`.
fn env_provider() -> Env {
    Env::prefixed("REVWATCH_").map(|key| {
        // Keys keep the case they had in the environment.
        let key_str = key.as_str().to_ascii_lowercase();
        let mapped = ["agent", "practicum", "telegram", "poll"]
            .iter()
            .find_map(|section| {
                key_str
                    .strip_prefix(section)
                    .and_then(|rest| rest.strip_prefix('_'))
                    .map(|field| format!("{section}.{field}"))
            })
            .unwrap_or(key_str);
        mapped.into()
    })
}
