// SPDX-FileCopyrightText: 2026 Revwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for revwatch.
//!
//! TOML files and environment variables are merged with Figment, checked
//! strictly (`deny_unknown_fields`), validated, and any failure is rendered
//! as miette diagnostics with typo suggestions.
//!
//! # Usage
//!
//! ```no_run
//! use revwatch_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("polling every {}s", config.poll.interval_secs);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

pub use diagnostic::{render_errors, ConfigError};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::RevwatchConfig;

/// Load configuration from the standard hierarchy and validate it.
pub fn load_and_validate() -> Result<RevwatchConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(
            err,
            &collect_toml_sources(),
        )),
    }
}

/// Load configuration from a TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<RevwatchConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources = vec![("<inline>".to_string(), toml_content.to_string())];
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Contents of the config files that exist, keyed the way figment reports them.
fn collect_toml_sources() -> Vec<(String, String)> {
    loader::config_paths()
        .into_iter()
        .filter_map(|path| {
            let content = std::fs::read_to_string(&path).ok()?;
            let absolute = if path.is_absolute() {
                path
            } else {
                std::env::current_dir().ok()?.join(path)
            };
            Some((absolute.display().to_string(), content))
        })
        .collect()
}
