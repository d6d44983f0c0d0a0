//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Seilens CLI.
#[derive(Parser, Debug)]
#[command(name = "seilens")]
#[command(author = "Seilens Contributors")]
#[command(version)]
#[command(about = "Sei network wallet analysis over MCP and HTTP")]
#[command(
    long_about = "Seilens analyzes Sei wallets and network health from live blockchain data \
and serves identical results over an MCP tool interface and an HTTP API.\n\n\
Run 'seilens init' to write a default configuration file."
)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (human or json).
    #[arg(short, long, global = true, default_value = "human")]
    pub format: OutputFormatArg,

    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Serve deterministic sample data instead of querying the chain.
    /// Results are visibly marked as non-live.
    #[arg(long, global = true)]
    pub offline: bool,
}

/// Output format argument for clap.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormatArg {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default configuration file.
    Init {
        /// Overwrite an existing configuration file.
        #[arg(short, long)]
        force: bool,
    },

    /// Analyze a single wallet address.
    Analyze {
        /// The Sei wallet address (starts with "sei1").
        address: String,
    },

    /// Compare several wallet addresses.
    Compare {
        /// The addresses to compare (between 2 and 10).
        #[arg(required = true, num_args = 2..)]
        addresses: Vec<String>,
    },

    /// Show current network health.
    Network,

    /// Start the HTTP API server.
    Http {
        /// Listen address, overriding the configuration.
        #[arg(short, long)]
        listen: Option<String>,
    },

    /// Start the MCP server on stdio.
    Mcp,
}
