//! Deterministic in-memory chain source.
//!
//! Used by tests and by the CLI's offline mode. Every snapshot it produces
//! is marked `live = false`, which the formatter propagates to the caller —
//! mock data can never masquerade as live data. Failure injection lets
//! tests exercise the upstream error paths without a network.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use seilens_types::{
    AnalysisError, Direction, NetworkSnapshot, Result, TransferKind, TransferRecord, TxStatus,
    WalletSnapshot, DEFAULT_CHAIN_ID, USEI_PER_SEI,
};

use crate::source::ChainDataSource;

/// In-memory chain source with deterministic data.
pub struct MockChainSource {
    /// Registered wallets by address.
    wallets: Mutex<HashMap<String, WalletSnapshot>>,
    /// The network snapshot served to every caller.
    network: Mutex<NetworkSnapshot>,
    /// When set, every fetch fails with an upstream error.
    failing: Mutex<bool>,
}

impl MockChainSource {
    /// Create an empty mock source with a plausible network snapshot.
    pub fn new() -> Self {
        // 52.1% of a 10,000 SEI supply bonded across 40 validators
        let network = NetworkSnapshot::new(
            DEFAULT_CHAIN_ID,
            161_611_789,
            40,
            5_210 * USEI_PER_SEI,
            10_000 * USEI_PER_SEI,
        )
        .with_block_time("2024-06-01T12:00:00Z");

        Self {
            wallets: Mutex::new(HashMap::new()),
            network: Mutex::new(network),
            failing: Mutex::new(false),
        }
    }

    /// Create a mock source pre-populated with sample wallets for demos.
    pub fn with_sample_data() -> Self {
        let source = Self::new();
        source.insert_wallet(sample_whale());
        source.insert_wallet(sample_trader());
        source
    }

    /// Register a wallet. The `live` flag is forced off.
    pub fn insert_wallet(&self, mut snapshot: WalletSnapshot) {
        snapshot.live = false;
        let mut wallets = self.wallets.lock().expect("mock wallets lock poisoned");
        wallets.insert(snapshot.address.clone(), snapshot);
    }

    /// Replace the network snapshot. The `live` flag is forced off.
    pub fn set_network(&self, mut snapshot: NetworkSnapshot) {
        snapshot.live = false;
        *self.network.lock().expect("mock network lock poisoned") = snapshot;
    }

    /// Make every subsequent fetch fail with an upstream error.
    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock().expect("mock failing lock poisoned") = failing;
    }

    fn check_failing(&self) -> Result<()> {
        if *self.failing.lock().expect("mock failing lock poisoned") {
            Err(AnalysisError::Upstream(
                "mock chain source failure injected".into(),
            ))
        } else {
            Ok(())
        }
    }
}

impl Default for MockChainSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChainDataSource for MockChainSource {
    async fn fetch_network_snapshot(&self) -> Result<NetworkSnapshot> {
        self.check_failing()?;
        let snapshot = self.network.lock().expect("mock network lock poisoned");
        Ok(snapshot.clone())
    }

    async fn fetch_wallet_snapshot(&self, address: &str, tx_limit: u32) -> Result<WalletSnapshot> {
        self.check_failing()?;
        if address.trim().is_empty() {
            return Err(AnalysisError::InvalidAddress("address is empty".into()));
        }

        let wallets = self.wallets.lock().expect("mock wallets lock poisoned");
        let mut snapshot = match wallets.get(address) {
            Some(snapshot) => snapshot.clone(),
            // Unknown addresses exist with an empty balance, like the chain
            None => WalletSnapshot::new(address, 0),
        };
        snapshot.transactions.truncate(tx_limit as usize);
        Ok(snapshot)
    }

    fn is_live(&self) -> bool {
        false
    }
}

impl std::fmt::Debug for MockChainSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let wallets = self.wallets.lock().expect("mock wallets lock poisoned");
        f.debug_struct("MockChainSource")
            .field("wallets", &wallets.len())
            .finish()
    }
}

/// A sample transfer record for generated histories.
fn sample_transfer(n: u64, kind: TransferKind, amount_sei: u64) -> TransferRecord {
    TransferRecord {
        hash: format!("MOCKTX{n:08}"),
        height: 161_611_000 + n,
        timestamp: format!("2024-06-01T{:02}:{:02}:00Z", (n / 60) % 24, n % 60),
        direction: if n % 2 == 0 {
            Direction::Outgoing
        } else {
            Direction::Incoming
        },
        kind,
        amount: amount_sei * USEI_PER_SEI,
        counterparty: Some(format!("sei1counterparty{n}")),
        fee: 500,
        status: TxStatus::Success,
    }
}

/// The demo whale: 5,000,000 SEI across 1,247 transactions.
fn sample_whale() -> WalletSnapshot {
    let mut transactions: Vec<TransferRecord> = (0..20)
        .map(|n| sample_transfer(n, TransferKind::Transfer, 10_000))
        .collect();
    transactions.extend((20..32).map(|n| sample_transfer(n, TransferKind::Staking, 50_000)));
    transactions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let mut snapshot = WalletSnapshot::new("sei1whale0000000000000000000000000000000000", 0)
        .with_transactions(transactions);
    snapshot.balance = 5_000_000 * USEI_PER_SEI;
    snapshot.transaction_count = 1_247;
    snapshot.account_number = Some(42);
    snapshot.sequence = Some(1_247);
    snapshot
}

/// The demo trader: modest balance, busy history.
fn sample_trader() -> WalletSnapshot {
    let mut transactions: Vec<TransferRecord> = (0..150)
        .map(|n| sample_transfer(n, TransferKind::Transfer, 25))
        .collect();
    transactions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let mut snapshot = WalletSnapshot::new("sei1trader000000000000000000000000000000000", 0)
        .with_transactions(transactions);
    snapshot.balance = 1_200 * USEI_PER_SEI;
    snapshot.account_number = Some(77);
    snapshot.sequence = Some(150);
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_snapshots_are_never_live() {
        let source = MockChainSource::with_sample_data();

        let network = source.fetch_network_snapshot().await.unwrap();
        assert!(!network.live);

        let wallet = source
            .fetch_wallet_snapshot("sei1whale0000000000000000000000000000000000", 100)
            .await
            .unwrap();
        assert!(!wallet.live);
        assert_eq!(wallet.transaction_count, 1_247);

        assert!(!source.is_live());
    }

    #[tokio::test]
    async fn test_mock_inserted_wallets_forced_offline() {
        let source = MockChainSource::new();
        let snapshot = WalletSnapshot::new("sei1abc", 100).with_live(true);
        source.insert_wallet(snapshot);

        let wallet = source.fetch_wallet_snapshot("sei1abc", 10).await.unwrap();
        assert!(!wallet.live);
        assert_eq!(wallet.balance, 100);
    }

    #[tokio::test]
    async fn test_mock_unknown_address_is_empty() {
        let source = MockChainSource::new();
        let wallet = source
            .fetch_wallet_snapshot("sei1unknown", 10)
            .await
            .unwrap();
        assert_eq!(wallet.balance, 0);
        assert_eq!(wallet.transaction_count, 0);
    }

    #[tokio::test]
    async fn test_mock_failure_injection() {
        let source = MockChainSource::new();
        source.set_failing(true);

        let err = source.fetch_network_snapshot().await.unwrap_err();
        assert!(err.error_code().is_upstream_error());

        source.set_failing(false);
        assert!(source.fetch_network_snapshot().await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_rejects_empty_address() {
        let source = MockChainSource::new();
        let err = source.fetch_wallet_snapshot("", 10).await.unwrap_err();
        assert!(err.error_code().is_validation_error());
    }

    #[tokio::test]
    async fn test_mock_truncates_history_to_limit() {
        let source = MockChainSource::with_sample_data();
        let wallet = source
            .fetch_wallet_snapshot("sei1trader000000000000000000000000000000000", 10)
            .await
            .unwrap();
        assert_eq!(wallet.transactions.len(), 10);
    }
}
