//! Derived reports and the transport-neutral `AnalysisResult` envelope.
//!
//! Both transport adapters serialize these types directly, so the "same
//! data over both interfaces" guarantee is structural: there is exactly one
//! serde model, and neither adapter defines its own response shapes.

use serde::{Deserialize, Serialize};

use crate::snapshot::TransferRecord;
use crate::Amount;

/// Wallet category, selected by the classifier's ordered threshold rules.
///
/// Exactly one category applies to any (balance, transaction_count) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum WalletCategory {
    /// Balance at or above the whale threshold.
    Whale,
    /// Balance at or above the large-holder threshold.
    LargeHolder,
    /// Transaction count at or above the activity threshold.
    Active,
    /// No transactions yet.
    New,
    /// Some history, low balance, low activity.
    Dormant,
}

impl std::fmt::Display for WalletCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WalletCategory::Whale => write!(f, "Whale"),
            WalletCategory::LargeHolder => write!(f, "Large Holder"),
            WalletCategory::Active => write!(f, "Active"),
            WalletCategory::New => write!(f, "New"),
            WalletCategory::Dormant => write!(f, "Dormant"),
        }
    }
}

/// Network health status, selected from the health score cutoffs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum NetworkStatus {
    /// Score at or above the excellent cutoff.
    Excellent,
    /// Score at or above the good cutoff.
    Good,
    /// Score at or above the degraded cutoff.
    Degraded,
    /// Score below the degraded cutoff.
    Critical,
}

impl std::fmt::Display for NetworkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetworkStatus::Excellent => write!(f, "Excellent"),
            NetworkStatus::Good => write!(f, "Good"),
            NetworkStatus::Degraded => write!(f, "Degraded"),
            NetworkStatus::Critical => write!(f, "Critical"),
        }
    }
}

/// Network security level derived from the staking ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityLevel {
    /// Staking ratio at or above target.
    High,
    /// Staking ratio between half the target and the target.
    Medium,
    /// Staking ratio below half the target.
    Low,
}

/// Combined influence level of a wallet group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfluenceLevel {
    /// Combined balance above the high cutoff.
    High,
    /// Combined balance above the medium cutoff.
    Medium,
    /// Combined balance below the medium cutoff.
    Low,
}

/// Derived scores for a wallet, each in [0,1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletScores {
    /// Balance relative to the whale-score divisor, capped at 1.
    pub whale_score: f64,
    /// Risk estimate from activity and failure patterns.
    pub risk_factor: f64,
    /// Transfer volume relative to balance, halved and capped.
    pub influence_score: f64,
    /// Weighted combination of the above.
    pub overall_score: f64,
}

/// Wallet-level metrics echoed in a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletMetrics {
    /// Balance in display SEI.
    pub balance_sei: f64,
    /// Balance in usei.
    pub balance_usei: Amount,
    /// Total transactions considered.
    pub transaction_count: u32,
    /// Staking transactions in the fetched history.
    pub staking_transactions: u32,
    /// Reward transactions in the fetched history.
    pub reward_transactions: u32,
    /// On-chain account number, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<u64>,
    /// On-chain sequence, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<u64>,
}

/// Aggregates over a wallet's fetched transfer history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionAnalysis {
    /// Transactions in the fetched history.
    pub total_transactions: u32,
    /// Transactions that executed successfully.
    pub successful_transactions: u32,
    /// Transactions that failed.
    pub failed_transactions: u32,
    /// Total volume moved, in display SEI.
    pub total_volume_sei: f64,
    /// Average transfer amount, in display SEI.
    pub average_amount_sei: f64,
    /// Timestamp of the most recent transaction, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_timestamp: Option<String>,
}

/// Full classification report for a single wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletReport {
    /// The analyzed address.
    pub address: String,
    /// Selected category.
    pub category: WalletCategory,
    /// Derived scores.
    pub scores: WalletScores,
    /// Wallet-level metrics.
    pub metrics: WalletMetrics,
    /// History aggregates.
    pub transactions: TransactionAnalysis,
    /// The most recent transfers, newest first.
    pub recent_transactions: Vec<TransferRecord>,
    /// Rule-derived recommendations for the caller.
    pub recommendations: Vec<String>,
}

/// Normalized network health report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkReport {
    /// Selected status label.
    pub status: NetworkStatus,
    /// Health score in [0,1].
    pub health_score: f64,
    /// Chain identifier.
    pub chain_id: String,
    /// Latest block height.
    pub block_height: u64,
    /// Latest block timestamp, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_time: Option<String>,
    /// Bonded validator count.
    pub validator_count: u32,
    /// Bonded / supply fraction.
    pub staking_ratio: f64,
    /// The staking ratio formatted as a percentage, e.g. "52.1%".
    pub staking_participation: String,
    /// Total bonded tokens in display SEI.
    pub total_bonded_sei: f64,
    /// Total supply in display SEI.
    pub total_supply_sei: f64,
    /// Security level derived from the staking ratio.
    pub security: SecurityLevel,
}

/// Aggregate statistics over a set of compared wallets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    /// Number of wallets compared.
    pub total_addresses: u32,
    /// Highest balance in the set, display SEI.
    pub highest_balance_sei: f64,
    /// Lowest balance in the set, display SEI.
    pub lowest_balance_sei: f64,
    /// Mean balance, display SEI.
    pub average_balance_sei: f64,
    /// Sum of all balances, display SEI.
    pub combined_balance_sei: f64,
    /// Highest whale score in the set.
    pub highest_whale_score: f64,
    /// 1 minus the coefficient of variation of balances, clamped to [0,1].
    /// Higher means the balances are more alike.
    pub balance_similarity: f64,
}

/// Per-wallet entry of a comparison report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    /// Wallet address.
    pub address: String,
    /// Category from the shared classifier.
    pub category: WalletCategory,
    /// Balance in display SEI.
    pub balance_sei: f64,
    /// Whale score.
    pub whale_score: f64,
    /// Transaction count.
    pub transaction_count: u32,
    /// Risk factor.
    pub risk_factor: f64,
}

/// Pattern insights over a comparison set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonInsights {
    /// Wallets with a whale score above 0.7.
    pub whale_count: u32,
    /// Wallets with more than 100 transactions.
    pub high_activity_count: u32,
    /// Combined influence of the set.
    pub combined_influence: InfluenceLevel,
}

/// Multi-wallet comparison report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Aggregate statistics.
    pub summary: ComparisonSummary,
    /// One entry per compared wallet.
    pub wallets: Vec<ComparisonEntry>,
    /// Pattern insights.
    pub insights: ComparisonInsights,
}

/// Echo of the request that produced a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum RequestEcho {
    /// Single-wallet analysis.
    AnalyzeWallet {
        /// The requested address.
        address: String,
    },
    /// Network health summary.
    NetworkHealth,
    /// Multi-wallet comparison.
    CompareWallets {
        /// The requested addresses, in request order.
        addresses: Vec<String>,
    },
}

/// The report payload of an [`AnalysisResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    /// Wallet classification report.
    Wallet(WalletReport),
    /// Network health report.
    Network(NetworkReport),
    /// Multi-wallet comparison report.
    Comparison(ComparisonReport),
}

/// Transport-neutral analysis result.
///
/// Constructed fresh per request by the response formatter and never
/// mutated afterwards. `timestamp_ms` is stamped at formatting time, not at
/// fetch time. `live_data` is copied verbatim from the snapshot(s) that
/// produced the report; a fallback source can never appear live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Echo of the request parameters.
    pub request: RequestEcho,
    /// True only if every contributing fetch came from a live source.
    pub live_data: bool,
    /// Unix milliseconds at formatting time.
    pub timestamp_ms: u64,
    /// The report payload.
    pub report: Report,
}
