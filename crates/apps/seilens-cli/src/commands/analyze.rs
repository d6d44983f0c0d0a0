//! Analyze command: one-shot wallet analysis.

use colored::Colorize;

use seilens_types::{AnalysisResult, Report, WalletReport};

use crate::commands::build_service;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;

/// Analyze a single wallet and render the result.
pub async fn analyze(
    config: &CliConfig,
    format: OutputFormat,
    offline: bool,
    address: &str,
) -> CliResult<String> {
    let service = build_service(config, offline)?;
    let result = service.analyze_wallet(address).await?;

    match format {
        OutputFormat::Json => format.to_json(&result),
        OutputFormat::Human => render(&result),
    }
}

fn render(result: &AnalysisResult) -> CliResult<String> {
    let Report::Wallet(ref report) = result.report else {
        return Err(CliError::user("unexpected report kind".to_string()));
    };

    let mut out = String::new();
    out.push_str(&format!(
        "{} {}  {}\n",
        "Wallet".bold(),
        report.address,
        provenance_label(result.live_data)
    ));
    out.push_str(&format!(
        "  Category:      {}\n",
        report.category.to_string().green().bold()
    ));
    out.push_str(&format!(
        "  Balance:       {} SEI\n",
        report.metrics.balance_sei
    ));
    out.push_str(&format!(
        "  Transactions:  {} ({} staking, {} rewards)\n",
        report.metrics.transaction_count,
        report.metrics.staking_transactions,
        report.metrics.reward_transactions
    ));
    out.push_str(&format!(
        "  Scores:        whale {:.3}  risk {:.3}  influence {:.3}  overall {:.3}\n",
        report.scores.whale_score,
        report.scores.risk_factor,
        report.scores.influence_score,
        report.scores.overall_score
    ));

    render_recommendations(&mut out, report);

    Ok(out.trim_end().to_string())
}

fn render_recommendations(out: &mut String, report: &WalletReport) {
    if report.recommendations.is_empty() {
        return;
    }
    out.push_str(&format!("  {}:\n", "Recommendations".bold()));
    for recommendation in &report.recommendations {
        out.push_str(&format!("    - {recommendation}\n"));
    }
}

/// Shared provenance marker for human output.
pub(crate) fn provenance_label(live: bool) -> String {
    if live {
        "[live data]".green().to_string()
    } else {
        "[sample data]".yellow().to_string()
    }
}
