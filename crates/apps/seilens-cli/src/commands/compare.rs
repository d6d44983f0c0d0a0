//! Compare command: one-shot multi-wallet comparison.

use colored::Colorize;

use seilens_types::{AnalysisResult, Report};

use crate::commands::analyze::provenance_label;
use crate::commands::build_service;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;

/// Compare several wallets and render the result.
pub async fn compare(
    config: &CliConfig,
    format: OutputFormat,
    offline: bool,
    addresses: &[String],
) -> CliResult<String> {
    let service = build_service(config, offline)?;
    let result = service.compare_wallets(addresses).await?;

    match format {
        OutputFormat::Json => format.to_json(&result),
        OutputFormat::Human => render(&result),
    }
}

fn render(result: &AnalysisResult) -> CliResult<String> {
    let Report::Comparison(ref report) = result.report else {
        return Err(CliError::user("unexpected report kind".to_string()));
    };

    let mut out = String::new();
    out.push_str(&format!(
        "{} {} wallets  {}\n",
        "Comparison".bold(),
        report.summary.total_addresses,
        provenance_label(result.live_data)
    ));
    out.push_str(&format!(
        "  Combined:      {} SEI (avg {}, range {} - {})\n",
        report.summary.combined_balance_sei,
        report.summary.average_balance_sei,
        report.summary.lowest_balance_sei,
        report.summary.highest_balance_sei
    ));
    out.push_str(&format!(
        "  Similarity:    {:.3}   Influence: {:?}\n",
        report.summary.balance_similarity, report.insights.combined_influence
    ));

    for wallet in &report.wallets {
        out.push_str(&format!(
            "  {}  {}  {} SEI  {} txs  whale {:.3}\n",
            wallet.address,
            wallet.category.to_string().green(),
            wallet.balance_sei,
            wallet.transaction_count,
            wallet.whale_score
        ));
    }

    Ok(out.trim_end().to_string())
}
