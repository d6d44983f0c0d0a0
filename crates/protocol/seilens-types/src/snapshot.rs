//! Raw chain data as fetched from a chain data source.
//!
//! Snapshots are immutable once fetched: they are created per request by a
//! `ChainDataSource` implementation and discarded after the response is
//! built. The `live` flag records whether the data came from a live chain
//! query; nothing downstream may change it.

use serde::{Deserialize, Serialize};

use crate::Amount;

/// Direction of a transfer relative to the wallet under analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Funds received by the wallet.
    Incoming,
    /// Funds sent by the wallet.
    Outgoing,
}

/// Message kind of a transaction, derived from its first message type URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferKind {
    /// Plain bank transfer.
    Transfer,
    /// Staking operation (delegate, undelegate, redelegate).
    Staking,
    /// Governance vote or proposal.
    Governance,
    /// Reward withdrawal.
    Rewards,
}

/// Execution status of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxStatus {
    /// Transaction executed (code 0).
    Success,
    /// Transaction failed (non-zero code).
    Failed,
}

/// A single transfer in a wallet's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRecord {
    /// Transaction hash.
    pub hash: String,
    /// Block height the transaction was included at.
    pub height: u64,
    /// Block timestamp as reported by the chain (RFC3339).
    pub timestamp: String,
    /// Direction relative to the analyzed wallet.
    pub direction: Direction,
    /// Message kind.
    pub kind: TransferKind,
    /// Transferred amount in usei.
    pub amount: Amount,
    /// The other party of the transfer, if identifiable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counterparty: Option<String>,
    /// Fee paid in usei.
    pub fee: Amount,
    /// Execution status.
    pub status: TxStatus,
}

/// Raw state of a single wallet, fetched per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletSnapshot {
    /// Wallet address (opaque identifier; format is the chain source's
    /// responsibility).
    pub address: String,
    /// Balance in usei.
    pub balance: Amount,
    /// Total number of transactions fetched for this wallet.
    pub transaction_count: u32,
    /// Transfer history, most recent first. May be empty if history was
    /// not requested.
    pub transactions: Vec<TransferRecord>,
    /// On-chain account number, if the account exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<u64>,
    /// On-chain sequence (nonce), if the account exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<u64>,
    /// True only when every field came from a successful live chain query.
    pub live: bool,
}

impl WalletSnapshot {
    /// Create a snapshot with no history. `live` defaults to false; the
    /// producing source marks it.
    pub fn new(address: impl Into<String>, balance: Amount) -> Self {
        Self {
            address: address.into(),
            balance,
            transaction_count: 0,
            transactions: Vec::new(),
            account_number: None,
            sequence: None,
            live: false,
        }
    }

    /// Set the transaction count without attaching history.
    pub fn with_transaction_count(mut self, count: u32) -> Self {
        self.transaction_count = count;
        self
    }

    /// Attach transfer history and set the count from it.
    pub fn with_transactions(mut self, transactions: Vec<TransferRecord>) -> Self {
        self.transaction_count = transactions.len() as u32;
        self.transactions = transactions;
        self
    }

    /// Mark the snapshot as coming from a live source.
    pub fn with_live(mut self, live: bool) -> Self {
        self.live = live;
        self
    }

    /// Count of staking transactions in the fetched history.
    pub fn staking_transactions(&self) -> u32 {
        self.transactions
            .iter()
            .filter(|t| t.kind == TransferKind::Staking)
            .count() as u32
    }

    /// Count of reward transactions in the fetched history.
    pub fn reward_transactions(&self) -> u32 {
        self.transactions
            .iter()
            .filter(|t| t.kind == TransferKind::Rewards)
            .count() as u32
    }

    /// Count of failed transactions in the fetched history.
    pub fn failed_transactions(&self) -> u32 {
        self.transactions
            .iter()
            .filter(|t| t.status == TxStatus::Failed)
            .count() as u32
    }

    /// Total volume moved across the fetched history, in usei.
    pub fn total_volume(&self) -> Amount {
        self.transactions.iter().map(|t| t.amount).sum()
    }
}

/// Raw state of the network as a whole, fetched per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    /// Chain identifier (e.g. "pacific-1").
    pub chain_id: String,
    /// Latest block height. Monotonically non-decreasing across successive
    /// fetches from a live source.
    pub block_height: u64,
    /// Latest block timestamp as reported by the chain (RFC3339).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_time: Option<String>,
    /// Number of bonded validators.
    pub validator_count: u32,
    /// Total bonded tokens in usei.
    pub total_bonded: Amount,
    /// Total token supply in usei.
    pub total_supply: Amount,
    /// Bonded / supply, always a fraction in [0,1] — never a raw count.
    pub staking_ratio: f64,
    /// True only when every field came from a successful live chain query.
    pub live: bool,
}

impl NetworkSnapshot {
    /// Create a snapshot, deriving the staking ratio from bonded and supply.
    pub fn new(
        chain_id: impl Into<String>,
        block_height: u64,
        validator_count: u32,
        total_bonded: Amount,
        total_supply: Amount,
    ) -> Self {
        let staking_ratio = if total_supply > 0 {
            total_bonded as f64 / total_supply as f64
        } else {
            0.0
        };
        Self {
            chain_id: chain_id.into(),
            block_height,
            block_time: None,
            validator_count,
            total_bonded,
            total_supply,
            staking_ratio,
            live: false,
        }
    }

    /// Attach the latest block time.
    pub fn with_block_time(mut self, time: impl Into<String>) -> Self {
        self.block_time = Some(time.into());
        self
    }

    /// Mark the snapshot as coming from a live source.
    pub fn with_live(mut self, live: bool) -> Self {
        self.live = live;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: TransferKind, status: TxStatus, amount: Amount) -> TransferRecord {
        TransferRecord {
            hash: "ABC123".into(),
            height: 161_611_789,
            timestamp: "2024-06-01T12:00:00Z".into(),
            direction: Direction::Outgoing,
            kind,
            amount,
            counterparty: Some("sei1counterparty".into()),
            fee: 500,
            status,
        }
    }

    #[test]
    fn test_wallet_snapshot_builders() {
        let snapshot = WalletSnapshot::new("sei1abc", 1_000_000)
            .with_transactions(vec![
                record(TransferKind::Transfer, TxStatus::Success, 100),
                record(TransferKind::Staking, TxStatus::Success, 200),
                record(TransferKind::Staking, TxStatus::Failed, 300),
                record(TransferKind::Rewards, TxStatus::Success, 400),
            ])
            .with_live(true);

        assert_eq!(snapshot.transaction_count, 4);
        assert_eq!(snapshot.staking_transactions(), 2);
        assert_eq!(snapshot.reward_transactions(), 1);
        assert_eq!(snapshot.failed_transactions(), 1);
        assert_eq!(snapshot.total_volume(), 1000);
        assert!(snapshot.live);
    }

    #[test]
    fn test_network_snapshot_derives_staking_ratio() {
        let snapshot = NetworkSnapshot::new("pacific-1", 161_611_789, 40, 521, 1000);
        assert!((snapshot.staking_ratio - 0.521).abs() < f64::EPSILON);
        assert!(!snapshot.live);
    }

    #[test]
    fn test_network_snapshot_zero_supply() {
        let snapshot = NetworkSnapshot::new("pacific-1", 1, 0, 100, 0);
        assert_eq!(snapshot.staking_ratio, 0.0);
    }

    #[test]
    fn test_transfer_record_serialization() {
        let rec = record(TransferKind::Governance, TxStatus::Success, 42);
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["kind"], "governance");
        assert_eq!(json["direction"], "outgoing");
        assert_eq!(json["status"], "success");

        let back: TransferRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, rec);
    }
}
