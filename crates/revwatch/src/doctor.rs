// SPDX-FileCopyrightText: 2026 Revwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `revwatch doctor` command implementation.
//!
//! Validates configuration and checks that both remote services accept the
//! configured credentials.

use std::io::IsTerminal;
use std::time::{Duration, Instant};

use revwatch_config::RevwatchConfig;
use revwatch_core::{HealthStatus, PluginAdapter, RevwatchError};
use revwatch_practicum::PracticumSource;
use revwatch_telegram::TelegramChannel;

/// Status of a diagnostic check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed successfully.
    Pass,
    /// Check failed.
    Fail,
}

/// Result of a single diagnostic check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the check.
    pub name: String,
    /// Check status.
    pub status: CheckStatus,
    /// Human-readable message.
    pub message: String,
    /// Duration the check took.
    pub duration: Duration,
}

/// Run the `revwatch doctor` command.
///
/// Returns an error when any check fails. With `plain`, disables colored output.
pub async fn run_doctor(plain: bool) -> Result<(), RevwatchError> {
    let use_color = !plain && std::io::stdout().is_terminal();

    let (config_result, config) = check_config();
    let mut results = vec![config_result];

    match config {
        Some(config) => {
            results.push(check_practicum(&config).await);
            results.push(check_telegram(&config).await);
        }
        None => {
            for name in ["Practicum API", "Telegram"] {
                results.push(CheckResult {
                    name: name.to_string(),
                    status: CheckStatus::Fail,
                    message: "skipped: configuration is invalid".to_string(),
                    duration: Duration::ZERO,
                });
            }
        }
    }

    println!();
    println!("  revwatch doctor");
    println!("  {}", "-".repeat(50));
    for result in &results {
        println!("{}", format_line(result, use_color));
    }
    println!();

    let fail_count = results
        .iter()
        .filter(|r| r.status == CheckStatus::Fail)
        .count();

    if fail_count > 0 {
        let issue_word = if fail_count == 1 { "issue" } else { "issues" };
        println!("  {fail_count} {issue_word} found.");
        println!();
        return Err(RevwatchError::Config(format!(
            "{fail_count} doctor check(s) failed"
        )));
    }

    println!("  All checks passed.");
    println!();
    Ok(())
}

fn format_line(result: &CheckResult, use_color: bool) -> String {
    let duration_ms = result.duration.as_millis();

    match (&result.status, use_color) {
        (CheckStatus::Pass, true) => {
            use colored::Colorize;
            format!(
                "    {} {:<20} {} ({duration_ms}ms)",
                "✓".green(),
                result.name,
                result.message
            )
        }
        (CheckStatus::Fail, true) => {
            use colored::Colorize;
            format!(
                "    {} {:<20} {} ({duration_ms}ms)",
                "✗".red(),
                result.name,
                result.message.red()
            )
        }
        (CheckStatus::Pass, false) => format!(
            "    [OK]   {:<20} {} ({duration_ms}ms)",
            result.name, result.message
        ),
        (CheckStatus::Fail, false) => format!(
            "    [FAIL] {:<20} {} ({duration_ms}ms)",
            result.name, result.message
        ),
    }
}

/// Check configuration loads and validates.
fn check_config() -> (CheckResult, Option<RevwatchConfig>) {
    let start = Instant::now();
    match revwatch_config::load_and_validate() {
        Ok(config) => (
            CheckResult {
                name: "Configuration".to_string(),
                status: CheckStatus::Pass,
                message: "valid".to_string(),
                duration: start.elapsed(),
            },
            Some(config),
        ),
        Err(errors) => {
            revwatch_config::render_errors(&errors);
            (
                CheckResult {
                    name: "Configuration".to_string(),
                    status: CheckStatus::Fail,
                    message: format!("{} error(s)", errors.len()),
                    duration: start.elapsed(),
                },
                None,
            )
        }
    }
}

async fn check_practicum(config: &RevwatchConfig) -> CheckResult {
    let start = Instant::now();
    match PracticumSource::new(&config.practicum) {
        Ok(source) => check_adapter("Practicum API", &source).await,
        Err(e) => setup_failure("Practicum API", &e, start),
    }
}

async fn check_telegram(config: &RevwatchConfig) -> CheckResult {
    let start = Instant::now();
    match TelegramChannel::new(&config.telegram) {
        Ok(channel) => check_adapter("Telegram", &channel).await,
        Err(e) => setup_failure("Telegram", &e, start),
    }
}

fn setup_failure(name: &str, error: &RevwatchError, start: Instant) -> CheckResult {
    CheckResult {
        name: name.to_string(),
        status: CheckStatus::Fail,
        message: error.to_string(),
        duration: start.elapsed(),
    }
}

/// Run an adapter's health check.
async fn check_adapter(name: &str, adapter: &dyn PluginAdapter) -> CheckResult {
    let start = Instant::now();
    let (status, message) = match adapter.health_check().await {
        Ok(HealthStatus::Healthy) => (CheckStatus::Pass, "reachable".to_string()),
        Ok(HealthStatus::Unhealthy(reason)) => (CheckStatus::Fail, reason),
        Err(e) => (CheckStatus::Fail, e.to_string()),
    };
    CheckResult {
        name: name.to_string(),
        status,
        message,
        duration: start.elapsed(),
    }
}
