//! Seilens CLI binary entry point.

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use seilens_cli::{
    cli::{Cli, Commands},
    commands,
    config::{default_config_path, CliConfig},
    error::{CliError, CliResult},
    output::OutputFormat,
};

fn main() {
    let cli = Cli::parse();

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    rt.block_on(async_main(cli));
}

async fn async_main(cli: Cli) {
    // Initialize logging based on --verbose flag or RUST_LOG env var.
    // Logs go to stderr so the MCP stdio transport stays clean.
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if cli.verbose || has_rust_log {
        let filter = if cli.verbose {
            EnvFilter::from_default_env().add_directive("seilens=debug".parse().unwrap())
        } else {
            EnvFilter::from_default_env()
        };
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
    }

    if let Err(e) = run(cli).await {
        print_error(&e);
        std::process::exit(e.exit_code());
    }
}

/// Print a user-friendly error message with error code and recovery hint.
fn print_error(e: &CliError) {
    let code = e.error_code();

    eprintln!(
        "{} [{}]: {}",
        "Error".red().bold(),
        code.to_string().yellow(),
        e
    );

    if let Some(suggestion) = code.suggestion() {
        eprintln!("{}: {}", "Hint".cyan(), suggestion);
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    // Load configuration once; everything downstream gets pieces by value
    let config_path = cli.config.unwrap_or_else(default_config_path);
    let config = CliConfig::load(&config_path)?;

    let format: OutputFormat = cli.format.into();

    let output = match cli.command {
        Commands::Init { force } => commands::init(&config_path, force)?,
        Commands::Analyze { address } => {
            commands::analyze(&config, format, cli.offline, &address).await?
        }
        Commands::Compare { addresses } => {
            commands::compare(&config, format, cli.offline, &addresses).await?
        }
        Commands::Network => commands::network(&config, format, cli.offline).await?,
        Commands::Http { listen } => {
            commands::http_server(&config, cli.offline, listen).await?
        }
        Commands::Mcp => commands::mcp_server(&config, cli.offline).await?,
    };

    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}
