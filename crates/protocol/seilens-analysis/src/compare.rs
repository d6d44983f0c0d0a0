//! Multi-wallet comparison aggregation.
//!
//! Builds a comparison report from wallet reports produced by the shared
//! classifier, so every per-wallet number here is identical to what a
//! single-wallet analysis of the same snapshot would return.

use seilens_types::{
    ComparisonEntry, ComparisonInsights, ComparisonReport, ComparisonSummary, InfluenceLevel,
    WalletReport,
};

use crate::round3;

/// Whale score above which a wallet counts toward the whale tally.
const WHALE_INSIGHT_SCORE: f64 = 0.7;

/// Transaction count above which a wallet counts as high-activity.
const HIGH_ACTIVITY_TXS: u32 = 100;

/// Combined balance above which the set has high influence (SEI).
const HIGH_INFLUENCE_SEI: f64 = 1_000_000.0;

/// Combined balance above which the set has medium influence (SEI).
const MEDIUM_INFLUENCE_SEI: f64 = 100_000.0;

/// Aggregate a set of wallet reports into a comparison report.
///
/// Callers guarantee at least two reports; the service enforces the
/// request-level bounds.
pub fn build_comparison(reports: &[WalletReport]) -> ComparisonReport {
    let balances: Vec<f64> = reports.iter().map(|r| r.metrics.balance_sei).collect();

    let combined: f64 = balances.iter().sum();
    let mean = combined / balances.len() as f64;
    let highest = balances.iter().cloned().fold(f64::MIN, f64::max);
    let lowest = balances.iter().cloned().fold(f64::MAX, f64::min);

    // Coefficient of variation, folded into a similarity score: identical
    // balances score 1, widely spread balances approach 0.
    let similarity = if mean > 0.0 {
        1.0 - (stdev(&balances) / mean).min(1.0)
    } else {
        0.0
    };

    let highest_whale_score = reports
        .iter()
        .map(|r| r.scores.whale_score)
        .fold(0.0, f64::max);

    let wallets: Vec<ComparisonEntry> = reports
        .iter()
        .map(|r| ComparisonEntry {
            address: r.address.clone(),
            category: r.category,
            balance_sei: r.metrics.balance_sei,
            whale_score: r.scores.whale_score,
            transaction_count: r.metrics.transaction_count,
            risk_factor: r.scores.risk_factor,
        })
        .collect();

    let whale_count = reports
        .iter()
        .filter(|r| r.scores.whale_score > WHALE_INSIGHT_SCORE)
        .count() as u32;
    let high_activity_count = reports
        .iter()
        .filter(|r| r.metrics.transaction_count > HIGH_ACTIVITY_TXS)
        .count() as u32;

    let combined_influence = if combined > HIGH_INFLUENCE_SEI {
        InfluenceLevel::High
    } else if combined > MEDIUM_INFLUENCE_SEI {
        InfluenceLevel::Medium
    } else {
        InfluenceLevel::Low
    };

    ComparisonReport {
        summary: ComparisonSummary {
            total_addresses: reports.len() as u32,
            highest_balance_sei: highest,
            lowest_balance_sei: lowest,
            average_balance_sei: round3(mean),
            combined_balance_sei: combined,
            highest_whale_score,
            balance_similarity: round3(similarity),
        },
        wallets,
        insights: ComparisonInsights {
            whale_count,
            high_activity_count,
            combined_influence,
        },
    }
}

/// Sample standard deviation.
fn stdev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance = values
        .iter()
        .map(|v| (v - mean).powi(2))
        .sum::<f64>()
        / (values.len() - 1) as f64;
    variance.sqrt()
}
