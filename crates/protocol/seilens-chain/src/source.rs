//! The chain data source abstraction.

use async_trait::async_trait;

use seilens_types::{NetworkSnapshot, Result, WalletSnapshot};

/// A source of raw chain data.
///
/// Both operations are independent round trips: no caching, no request
/// deduplication. Implementations must set the `live` flag on every
/// snapshot they produce, and must be safe to call concurrently.
#[async_trait]
pub trait ChainDataSource: Send + Sync {
    /// Fetch the current network snapshot.
    async fn fetch_network_snapshot(&self) -> Result<NetworkSnapshot>;

    /// Fetch a wallet snapshot with up to `tx_limit` recent transactions.
    ///
    /// Address format validation happens here, not in the classifier.
    async fn fetch_wallet_snapshot(&self, address: &str, tx_limit: u32) -> Result<WalletSnapshot>;

    /// Whether this source queries a live chain.
    fn is_live(&self) -> bool;
}
