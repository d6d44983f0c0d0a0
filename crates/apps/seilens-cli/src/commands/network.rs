//! Network command: one-shot network health summary.

use colored::Colorize;

use seilens_types::{AnalysisResult, NetworkStatus, Report};

use crate::commands::analyze::provenance_label;
use crate::commands::build_service;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;

/// Summarize network health and render the result.
pub async fn network(
    config: &CliConfig,
    format: OutputFormat,
    offline: bool,
) -> CliResult<String> {
    let service = build_service(config, offline)?;
    let result = service.network_health().await?;

    match format {
        OutputFormat::Json => format.to_json(&result),
        OutputFormat::Human => render(&result),
    }
}

fn render(result: &AnalysisResult) -> CliResult<String> {
    let Report::Network(ref report) = result.report else {
        return Err(CliError::user("unexpected report kind".to_string()));
    };

    let status = report.status.to_string();
    let status = match report.status {
        NetworkStatus::Excellent | NetworkStatus::Good => status.green().bold(),
        NetworkStatus::Degraded => status.yellow().bold(),
        _ => status.red().bold(),
    };

    let mut out = String::new();
    out.push_str(&format!(
        "{} {}  {}\n",
        "Network".bold(),
        report.chain_id,
        provenance_label(result.live_data)
    ));
    out.push_str(&format!(
        "  Status:        {status} (score {:.3})\n",
        report.health_score
    ));
    out.push_str(&format!("  Block height:  {}\n", report.block_height));
    out.push_str(&format!("  Validators:    {}\n", report.validator_count));
    out.push_str(&format!(
        "  Staking:       {} of supply bonded\n",
        report.staking_participation
    ));
    out.push_str(&format!("  Security:      {:?}\n", report.security));

    Ok(out.trim_end().to_string())
}
