// SPDX-FileCopyrightText: 2026 Revwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! revwatch - watches homework review statuses and reports changes to Telegram.
//!
//! This is the binary entry point.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod doctor;
mod serve;

use clap::{Parser, Subcommand};
use tracing::error;

/// revwatch - watches homework review statuses and reports changes to Telegram.
#[derive(Parser, Debug)]
#[command(name = "revwatch", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Run the poll loop (default).
    Serve,
    /// Check configuration and connectivity, then exit.
    Doctor {
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let config = match revwatch_config::load_and_validate() {
                Ok(config) => config,
                Err(errors) => {
                    serve::init_tracing("info");
                    error!(
                        critical = true,
                        errors = errors.len(),
                        "configuration is incomplete, refusing to start"
                    );
                    revwatch_config::render_errors(&errors);
                    std::process::exit(1);
                }
            };

            if let Err(e) = serve::run_serve(config).await {
                error!(critical = true, error = %e, "revwatch stopped on a fatal error");
                std::process::exit(1);
            }
        }
        Commands::Doctor { plain } => {
            if doctor::run_doctor(plain).await.is_err() {
                std::process::exit(1);
            }
        }
    }
}
