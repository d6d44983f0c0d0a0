//! Data structures for the Seilens wallet-analysis service.
//!
//! This crate provides all data types shared between the analysis pipeline
//! and the transport adapters. It contains no business logic, only type
//! definitions with serialization support.
//!
//! # Module Organization
//!
//! - [`constants`] - Protocol constants (denomination, limits, policy defaults)
//! - [`denom`] - usei ↔ SEI conversion helpers
//! - [`error`] - Error codes and the main error type
//! - [`snapshot`] - Raw chain data (wallet and network snapshots)
//! - [`report`] - Derived reports and the `AnalysisResult` envelope
//! - [`policy`] - Injectable classification and health policies
//!
//! # Type Conventions
//!
//! - Derive `Debug`, `Clone`, `PartialEq` where appropriate
//! - Derive `Serialize`, `Deserialize` for wire format
//! - Use `#[serde(rename_all = "snake_case")]` for consistent JSON
//! - Monetary values are `Amount` (u64) in usei; display conversion to SEI
//!   happens only when building reports

/// Crate version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod constants;
pub mod denom;
pub mod error;
pub mod policy;
pub mod report;
pub mod snapshot;

// Re-export all public types at the crate root for convenience

// Constants
pub use constants::*;

// Denomination helpers
pub use denom::{sei_to_usei, usei_to_sei};

// Error types
pub use error::{AnalysisError, ErrorCode, Result};

// Policies
pub use policy::{ClassifierPolicy, HealthPolicy};

// Snapshot types
pub use snapshot::{
    Direction, NetworkSnapshot, TransferKind, TransferRecord, TxStatus, WalletSnapshot,
};

// Report types
pub use report::{
    AnalysisResult, ComparisonEntry, ComparisonInsights, ComparisonReport, ComparisonSummary,
    InfluenceLevel, NetworkReport, NetworkStatus, Report, RequestEcho, SecurityLevel,
    TransactionAnalysis, WalletCategory, WalletMetrics, WalletReport, WalletScores,
};

/// Amount in usei (10^-6 SEI).
///
/// This is the standard type for all monetary values in the service.
/// One SEI equals 1,000,000 (10^6) usei.
pub type Amount = u64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_to_report_types_interop() {
        let snapshot = WalletSnapshot::new("sei1exampleaddress", 5_000_000 * USEI_PER_SEI)
            .with_transaction_count(1247);

        assert_eq!(snapshot.balance, 5_000_000_000_000);
        assert_eq!(snapshot.transaction_count, 1247);
        assert!(!snapshot.live);

        let echo = RequestEcho::AnalyzeWallet {
            address: snapshot.address.clone(),
        };
        let json = serde_json::to_value(&echo).unwrap();
        assert_eq!(json["operation"], "analyze_wallet");
        assert_eq!(json["address"], "sei1exampleaddress");
    }

    #[test]
    fn test_amount_is_usei() {
        let one_sei: Amount = USEI_PER_SEI;
        assert_eq!(usei_to_sei(one_sei), 1.0);
    }
}
