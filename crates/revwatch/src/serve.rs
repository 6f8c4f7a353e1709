// SPDX-FileCopyrightText: 2026 Revwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `revwatch serve` command implementation.
//!
//! Builds the Practicum source and the Telegram channel from configuration,
//! then runs the poll loop until SIGINT or SIGTERM.

use std::sync::Arc;

use revwatch_agent::{Notifier, PollLoop, install_signal_handler, metrics};
use revwatch_config::RevwatchConfig;
use revwatch_core::{RevwatchError, SystemClock};
use revwatch_practicum::PracticumSource;
use revwatch_telegram::TelegramChannel;
use tracing::info;

/// Runs the poll loop with the given configuration.
///
/// Returns only after a shutdown signal, or on an adapter setup error.
pub async fn run_serve(config: RevwatchConfig) -> Result<(), RevwatchError> {
    init_tracing(&config.agent.log_level);

    info!(version = env!("CARGO_PKG_VERSION"), "starting revwatch");
    metrics::register_metrics();

    let recipient = config
        .telegram
        .chat_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| RevwatchError::Config("telegram.chat_id is not set".into()))?
        .to_string();

    let source = Arc::new(PracticumSource::new(&config.practicum)?);
    let channel = Arc::new(TelegramChannel::new(&config.telegram)?);
    info!("telegram channel initialized");

    let notifier = Notifier::new(channel, recipient);
    let mut poll = PollLoop::new(source, notifier, Arc::new(SystemClock), &config.poll);

    let cancel = install_signal_handler();
    poll.run(cancel).await;

    info!("revwatch stopped");
    Ok(())
}

/// Installs the fmt subscriber writing to stdout.
///
/// `RUST_LOG` wins over `agent.log_level` when set.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("revwatch={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
