//! # linksplit - Link-Prediction Split Preparation
//!
//! The main binary for preparing train/test splits of SNAP networks.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 apps/linksplit (THE BINARY)              │
//! │                                                          │
//! │  ┌─────────────┐   ┌──────────────┐   ┌──────────────┐   │
//! │  │    CLI      │   │    Config    │   │   Download   │   │
//! │  │   (clap)    │   │    (toml)    │   │  (reqwest)   │   │
//! │  └──────┬──────┘   └──────┬───────┘   └──────┬───────┘   │
//! │         └─────────────────┼──────────────────┘           │
//! │                           ▼                              │
//! │                  ┌─────────────────┐                     │
//! │                  │ linksplit-core  │                     │
//! │                  │   (THE LOGIC)   │                     │
//! │                  └─────────────────┘                     │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Full pipeline with defaults (seed 42, 20% test, k_train 2, k_test 1)
//! linksplit run
//!
//! # Step by step
//! linksplit download
//! linksplit preprocess
//! linksplit split --seed 7 --test-frac 0.1 --k-train 3
//! ```

use clap::Parser;
use linksplit::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // Parse CLI arguments first so --verbose / --quiet can pick the log level.
    let cli = cli::Cli::parse();

    // LINKSPLIT_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("LINKSPLIT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = cli.default_log_filter();
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    // Logs go to stderr; stdout carries command output.
    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    // Execute command
    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}
