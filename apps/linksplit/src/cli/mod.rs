//! # linksplit CLI Module
//!
//! This module implements the CLI interface for linksplit.
//!
//! ## Available Commands
//!
//! - `download` - Fetch the raw edge list (skipped if already present)
//! - `preprocess` - Parse the raw edge list into `processed/edges.csv`
//! - `split` - Write train edges, core test edges and core nodes
//! - `run` - download + preprocess + split
//! - `stats` - Show node, edge and degree counts of an edge table

mod commands;

use crate::config::{AppConfig, SplitOverrides};
use clap::{Args, Parser, Subcommand};
use linksplit_core::SplitError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// linksplit - link-prediction split preparation
///
/// Splits an undirected network into train and test edges and restricts the
/// test edges to nodes that are well connected on both sides.
#[derive(Parser, Debug)]
#[command(name = "linksplit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Root data directory (overrides the configuration file)
    #[arg(short = 'D', long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download the raw edge list
    Download {
        /// Source URL (overrides the configuration file)
        #[arg(short, long)]
        url: Option<String>,

        /// Download again even if the file exists
        #[arg(short, long)]
        force: bool,
    },

    /// Parse the raw edge list into a de-duplicated edge table
    Preprocess {
        /// Raw SNAP edge list, plain or gzip (default: data/raw/<url name>)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output edge table (default: data/processed/edges.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Split the edge table into train/test artifacts
    Split {
        /// Input edge table (default: data/processed/edges.csv)
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[command(flatten)]
        params: SplitArgs,
    },

    /// Download, preprocess and split in one go
    Run {
        #[command(flatten)]
        params: SplitArgs,
    },

    /// Show node, edge and degree counts of an edge table
    Stats {
        /// Input edge table (default: data/processed/edges.csv)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

/// Split parameters accepted on the command line.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct SplitArgs {
    /// Permutation seed
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Fraction of edges held out for testing, in [0, 1)
    #[arg(short = 'f', long)]
    pub test_frac: Option<f64>,

    /// Minimum train degree of a core node
    #[arg(long)]
    pub k_train: Option<usize>,

    /// Minimum test degree of a core node
    #[arg(long)]
    pub k_test: Option<usize>,
}

impl From<SplitArgs> for SplitOverrides {
    fn from(args: SplitArgs) -> Self {
        Self {
            seed: args.seed,
            test_frac: args.test_frac,
            k_train: args.k_train,
            k_test: args.k_test,
        }
    }
}

impl Cli {
    /// Log filter used when `RUST_LOG` is not set.
    #[must_use]
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "linksplit=debug,linksplit_core=debug"
        } else if self.quiet {
            "linksplit=warn,linksplit_core=warn"
        } else {
            "linksplit=info,linksplit_core=info"
        }
    }
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), SplitError> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    let json_mode = cli.json_mode;

    match cli.command {
        Commands::Download { url, force } => {
            if let Some(url) = url {
                config.url = url;
            }
            cmd_download(&config, force, json_mode).await
        }
        Commands::Preprocess { input, output } => {
            cmd_preprocess(&config, input.as_deref(), output.as_deref(), json_mode)
        }
        Commands::Split { input, params } => {
            config.apply_overrides(&params.into())?;
            cmd_split(&config, input.as_deref(), json_mode)
        }
        Commands::Run { params } => {
            config.apply_overrides(&params.into())?;
            cmd_run(&config, json_mode).await
        }
        Commands::Stats { input } => cmd_stats(&config, input.as_deref(), json_mode),
    }
}
