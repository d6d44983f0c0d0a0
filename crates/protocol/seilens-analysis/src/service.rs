//! The shared analysis pipeline.
//!
//! Every transport adapter holds one [`AnalysisService`] and calls these
//! methods; the "both interfaces return the same data" guarantee follows
//! from there being exactly one pipeline. The service holds no mutable
//! state — the only await points are chain fetches, which carry their own
//! timeouts, so concurrent requests never contend on anything.

use std::sync::Arc;

use futures::future::try_join_all;
use tracing::{debug, info};

use seilens_chain::ChainDataSource;
use seilens_types::{
    AnalysisError, AnalysisResult, ClassifierPolicy, HealthPolicy, NetworkSnapshot, Report,
    RequestEcho, Result, WalletSnapshot, DEFAULT_TX_LIMIT, MAX_COMPARE_ADDRESSES, MAX_TX_LIMIT,
    MIN_COMPARE_ADDRESSES,
};

use crate::classify::Classifier;
use crate::compare::build_comparison;
use crate::format::ResponseFormatter;
use crate::summarize::NetworkSummarizer;

/// Settings for the analysis pipeline, read once at startup.
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    /// Classification thresholds.
    pub classifier: ClassifierPolicy,
    /// Health score parameters.
    pub health: HealthPolicy,
    /// Transactions fetched per wallet analysis. Zero falls back to the
    /// default.
    pub tx_limit: u32,
}

/// The shared Classifier + Summarizer + Formatter pipeline behind a chain
/// data source.
pub struct AnalysisService {
    source: Arc<dyn ChainDataSource>,
    classifier: Classifier,
    summarizer: NetworkSummarizer,
    formatter: ResponseFormatter,
    tx_limit: u32,
}

impl AnalysisService {
    /// Build the pipeline. Policies are validated here, once.
    pub fn new(source: Arc<dyn ChainDataSource>, config: ServiceConfig) -> Result<Self> {
        let tx_limit = if config.tx_limit == 0 {
            DEFAULT_TX_LIMIT
        } else {
            config.tx_limit.min(MAX_TX_LIMIT)
        };

        Ok(Self {
            source,
            classifier: Classifier::new(config.classifier)?,
            summarizer: NetworkSummarizer::new(config.health)?,
            formatter: ResponseFormatter::new(),
            tx_limit,
        })
    }

    /// Whether the underlying source queries a live chain.
    pub fn is_live(&self) -> bool {
        self.source.is_live()
    }

    /// Analyze a single wallet.
    pub async fn analyze_wallet(&self, address: &str) -> Result<AnalysisResult> {
        let snapshot = self
            .source
            .fetch_wallet_snapshot(address, self.tx_limit)
            .await?;

        let report = self.classifier.classify(&snapshot)?;

        info!(
            address = %snapshot.address,
            category = %report.category,
            live = snapshot.live,
            "Wallet analyzed"
        );

        Ok(self.formatter.format(
            RequestEcho::AnalyzeWallet {
                address: snapshot.address.clone(),
            },
            snapshot.live,
            Report::Wallet(report),
        ))
    }

    /// Summarize network health.
    pub async fn network_health(&self) -> Result<AnalysisResult> {
        let snapshot = self.source.fetch_network_snapshot().await?;
        let report = self.summarizer.summarize(&snapshot)?;

        info!(
            status = %report.status,
            health_score = report.health_score,
            live = snapshot.live,
            "Network summarized"
        );

        Ok(self.formatter.format(
            RequestEcho::NetworkHealth,
            snapshot.live,
            Report::Network(report),
        ))
    }

    /// Compare several wallets.
    ///
    /// Every wallet is classified by the same classifier a single-wallet
    /// analysis uses. A failed fetch fails the whole comparison — no
    /// partial result is ever returned.
    pub async fn compare_wallets(&self, addresses: &[String]) -> Result<AnalysisResult> {
        if addresses.len() < MIN_COMPARE_ADDRESSES {
            return Err(AnalysisError::InvalidRequest(format!(
                "at least {MIN_COMPARE_ADDRESSES} addresses required for comparison"
            )));
        }
        if addresses.len() > MAX_COMPARE_ADDRESSES {
            return Err(AnalysisError::InvalidRequest(format!(
                "at most {MAX_COMPARE_ADDRESSES} addresses can be compared"
            )));
        }

        let snapshots = try_join_all(
            addresses
                .iter()
                .map(|address| self.source.fetch_wallet_snapshot(address, self.tx_limit)),
        )
        .await?;

        let live = snapshots.iter().all(|s| s.live);
        let reports = snapshots
            .iter()
            .map(|s| self.classifier.classify(s))
            .collect::<Result<Vec<_>>>()?;

        debug!(count = reports.len(), live = live, "Wallets compared");

        Ok(self.formatter.format(
            RequestEcho::CompareWallets {
                addresses: addresses.to_vec(),
            },
            live,
            Report::Comparison(build_comparison(&reports)),
        ))
    }

    /// Raw wallet snapshot passthrough (for account and transaction
    /// endpoints). The limit is capped to the service maximum.
    pub async fn wallet_snapshot(&self, address: &str, tx_limit: u32) -> Result<WalletSnapshot> {
        self.source
            .fetch_wallet_snapshot(address, tx_limit.min(MAX_TX_LIMIT))
            .await
    }

    /// Raw network snapshot passthrough (for the stats endpoint).
    pub async fn network_snapshot(&self) -> Result<NetworkSnapshot> {
        self.source.fetch_network_snapshot().await
    }
}

impl std::fmt::Debug for AnalysisService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisService")
            .field("live", &self.source.is_live())
            .field("tx_limit", &self.tx_limit)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seilens_chain::MockChainSource;
    use seilens_types::{ErrorCode, WalletCategory, USEI_PER_SEI};

    fn service_with(source: MockChainSource) -> AnalysisService {
        AnalysisService::new(Arc::new(source), ServiceConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_analyze_wallet_via_mock() {
        let service = service_with(MockChainSource::with_sample_data());
        let result = service
            .analyze_wallet("sei1whale0000000000000000000000000000000000")
            .await
            .unwrap();

        assert!(!result.live_data);
        match result.report {
            Report::Wallet(report) => {
                assert_eq!(report.category, WalletCategory::Whale);
                assert_eq!(report.metrics.balance_sei, 5_000_000.0);
            }
            other => panic!("expected wallet report, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_network_health_via_mock() {
        let service = service_with(MockChainSource::new());
        let result = service.network_health().await.unwrap();

        assert!(!result.live_data);
        match result.report {
            Report::Network(report) => {
                assert_eq!(report.health_score, 0.747);
            }
            other => panic!("expected network report, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_compare_requires_two_addresses() {
        let service = service_with(MockChainSource::new());
        let err = service
            .compare_wallets(&["sei1only".to_string()])
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), ErrorCode::InvalidRequest);
    }

    #[tokio::test]
    async fn test_compare_caps_address_count() {
        let service = service_with(MockChainSource::new());
        let addresses: Vec<String> = (0..MAX_COMPARE_ADDRESSES + 1)
            .map(|i| format!("sei1addr{i}"))
            .collect();
        let err = service.compare_wallets(&addresses).await.unwrap_err();
        assert_eq!(err.error_code(), ErrorCode::InvalidRequest);
    }

    #[tokio::test]
    async fn test_compare_wallets_matches_single_analyses() {
        let source = MockChainSource::new();
        let a = seilens_types::WalletSnapshot::new("sei1a", 2_000 * USEI_PER_SEI)
            .with_transaction_count(10);
        let b = seilens_types::WalletSnapshot::new("sei1b", 150_000 * USEI_PER_SEI)
            .with_transaction_count(400);
        source.insert_wallet(a);
        source.insert_wallet(b);

        let service = service_with(source);
        let single = service.analyze_wallet("sei1b").await.unwrap();
        let compared = service
            .compare_wallets(&["sei1a".to_string(), "sei1b".to_string()])
            .await
            .unwrap();

        let single_report = match single.report {
            Report::Wallet(r) => r,
            other => panic!("expected wallet report, got {other:?}"),
        };
        let comparison = match compared.report {
            Report::Comparison(c) => c,
            other => panic!("expected comparison report, got {other:?}"),
        };

        let entry = comparison
            .wallets
            .iter()
            .find(|w| w.address == "sei1b")
            .unwrap();
        assert_eq!(entry.category, single_report.category);
        assert_eq!(entry.balance_sei, single_report.metrics.balance_sei);
        assert_eq!(entry.whale_score, single_report.scores.whale_score);
    }

    #[tokio::test]
    async fn test_upstream_failure_yields_no_partial_result() {
        let source = MockChainSource::with_sample_data();
        source.set_failing(true);
        let service = service_with(source);

        let err = service
            .analyze_wallet("sei1whale0000000000000000000000000000000000")
            .await
            .unwrap_err();
        assert!(err.error_code().is_upstream_error());

        let err = service.network_health().await.unwrap_err();
        assert!(err.error_code().is_upstream_error());
    }

    #[tokio::test]
    async fn test_snapshot_passthrough_caps_limit() {
        let service = service_with(MockChainSource::with_sample_data());
        let snapshot = service
            .wallet_snapshot("sei1trader000000000000000000000000000000000", 10_000)
            .await
            .unwrap();
        assert!(snapshot.transactions.len() <= MAX_TX_LIMIT as usize);
    }
}
