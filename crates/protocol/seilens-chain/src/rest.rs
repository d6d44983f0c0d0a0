//! Live Sei REST chain source.
//!
//! Queries the Cosmos REST API of the Sei network. Every fetch walks the
//! configured endpoint list in order and moves to the next endpoint on any
//! failure; the whole list is retried for a bounded number of rounds with a
//! backoff between rounds. The per-request timeout lives on the HTTP client,
//! so an aborted caller drops the in-flight request with the future.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use seilens_types::{
    Amount, AnalysisError, Direction, NetworkSnapshot, Result, TransferKind, TransferRecord,
    TxStatus, WalletSnapshot, ADDRESS_PREFIX, SEI_DENOM,
};

use crate::config::ChainConfig;
use crate::source::ChainDataSource;

/// Chain source backed by the Sei REST endpoints.
#[derive(Clone)]
pub struct RestChainSource {
    /// HTTP client carrying the configured timeout.
    client: Client,
    /// Endpoint list and retry settings.
    config: ChainConfig,
}

impl RestChainSource {
    /// Create a new REST source from the given configuration.
    pub fn new(config: ChainConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| AnalysisError::internal(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// The configured endpoint list.
    pub fn endpoints(&self) -> &[String] {
        &self.config.rest_endpoints
    }

    /// GET a JSON resource, failing over across endpoints and retry rounds.
    ///
    /// When `missing_ok` is set, a definitive 404 from any endpoint resolves
    /// to `Ok(None)` instead of moving on — the resource does not exist and
    /// other endpoints will agree.
    async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        missing_ok: bool,
    ) -> Result<Option<T>> {
        let mut last_error = String::from("no endpoints attempted");
        let mut saw_timeout = false;

        for round in 0..self.config.retry_rounds {
            if round > 0 {
                tokio::time::sleep(Duration::from_millis(
                    self.config.retry_backoff_ms * round as u64,
                ))
                .await;
            }

            for endpoint in &self.config.rest_endpoints {
                let url = format!("{}/{}", endpoint.trim_end_matches('/'), path);
                debug!(url = %url, round = round, "Querying chain endpoint");

                let response = match self.client.get(&url).query(query).send().await {
                    Ok(r) => r,
                    Err(e) => {
                        if e.is_timeout() {
                            saw_timeout = true;
                        }
                        warn!(endpoint = %endpoint, error = %e, "Chain endpoint unreachable");
                        last_error = e.to_string();
                        continue;
                    }
                };

                let status = response.status();
                if missing_ok && status == reqwest::StatusCode::NOT_FOUND {
                    debug!(url = %url, "Resource not found on chain");
                    return Ok(None);
                }
                if !status.is_success() {
                    let body = response.text().await.unwrap_or_default();
                    warn!(endpoint = %endpoint, status = %status, "Chain endpoint returned error");
                    last_error = format!("{path} returned {status}: {body}");
                    continue;
                }

                match response.json::<T>().await {
                    Ok(value) => return Ok(Some(value)),
                    Err(e) => {
                        warn!(endpoint = %endpoint, error = %e, "Failed to parse chain response");
                        last_error = format!("unparseable response from {endpoint}: {e}");
                        continue;
                    }
                }
            }
        }

        if saw_timeout {
            Err(AnalysisError::UpstreamTimeout {
                timeout_ms: self.config.timeout_ms,
            })
        } else {
            Err(AnalysisError::Upstream(format!(
                "all Sei endpoints failed: {last_error}"
            )))
        }
    }

    /// GET a required JSON resource.
    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        match self.request(path, query, false).await? {
            Some(value) => Ok(value),
            // Unreachable: request() only returns None when missing_ok is set
            None => Err(AnalysisError::internal(format!(
                "missing required resource: {path}"
            ))),
        }
    }

    /// Fetch transaction history for an address, newest first.
    async fn fetch_transactions(&self, address: &str, limit: u32) -> Result<Vec<TransferRecord>> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let per_direction = (limit / 2).max(1).to_string();

        let sent: wire::TxSearchResponse = self
            .get(
                "cosmos/tx/v1beta1/txs",
                &[
                    ("events", format!("message.sender='{address}'")),
                    ("limit", per_direction.clone()),
                ],
            )
            .await?;

        let received: wire::TxSearchResponse = self
            .get(
                "cosmos/tx/v1beta1/txs",
                &[
                    ("events", format!("transfer.recipient='{address}'")),
                    ("limit", per_direction),
                ],
            )
            .await?;

        let mut transactions: Vec<TransferRecord> = sent
            .tx_responses
            .iter()
            .filter_map(|tx| parse_transaction(tx, Direction::Outgoing))
            .chain(
                received
                    .tx_responses
                    .iter()
                    .filter_map(|tx| parse_transaction(tx, Direction::Incoming)),
            )
            .collect();

        // RFC3339 timestamps sort lexicographically
        transactions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        transactions.truncate(limit as usize);

        Ok(transactions)
    }
}

#[async_trait]
impl ChainDataSource for RestChainSource {
    async fn fetch_network_snapshot(&self) -> Result<NetworkSnapshot> {
        let latest_block: wire::LatestBlockResponse = self
            .get("cosmos/base/tendermint/v1beta1/blocks/latest", &[])
            .await?;

        let validators: wire::ValidatorsResponse = self
            .get(
                "cosmos/staking/v1beta1/validators",
                &[("status", "BOND_STATUS_BONDED".to_string())],
            )
            .await?;

        let pool: wire::StakingPoolResponse =
            self.get("cosmos/staking/v1beta1/pool", &[]).await?;

        let supply: wire::SupplyResponse = self
            .get(&format!("cosmos/bank/v1beta1/supply/{SEI_DENOM}"), &[])
            .await?;

        let header = latest_block.block.header;
        let block_height = parse_numeric("block height", &header.height)?;
        let total_bonded = parse_numeric("bonded tokens", &pool.pool.bonded_tokens)?;
        let total_supply = parse_numeric("total supply", &supply.amount.amount)?;

        let chain_id = if header.chain_id.is_empty() {
            self.config.chain_id.clone()
        } else {
            header.chain_id
        };

        let mut snapshot = NetworkSnapshot::new(
            chain_id,
            block_height,
            validators.validators.len() as u32,
            total_bonded,
            total_supply,
        )
        .with_live(true);
        if !header.time.is_empty() {
            snapshot = snapshot.with_block_time(header.time);
        }

        debug!(
            block_height = snapshot.block_height,
            validator_count = snapshot.validator_count,
            staking_ratio = snapshot.staking_ratio,
            "Fetched network snapshot"
        );

        Ok(snapshot)
    }

    async fn fetch_wallet_snapshot(&self, address: &str, tx_limit: u32) -> Result<WalletSnapshot> {
        validate_address(address)?;

        let balances: wire::BalancesResponse = self
            .get(&format!("cosmos/bank/v1beta1/balances/{address}"), &[])
            .await?;

        let balance = balances
            .balances
            .iter()
            .find(|coin| coin.denom == SEI_DENOM)
            .map(|coin| parse_numeric("balance", &coin.amount))
            .transpose()?
            .unwrap_or(0);

        // The account may not exist yet; a 404 is an answer, not a failure.
        let account: Option<wire::AccountResponse> = self
            .request(
                &format!("cosmos/auth/v1beta1/accounts/{address}"),
                &[],
                true,
            )
            .await?;

        let transactions = self.fetch_transactions(address, tx_limit).await?;

        let mut snapshot = WalletSnapshot::new(address, balance)
            .with_transactions(transactions)
            .with_live(true);
        if let Some(account) = account {
            snapshot.account_number = account
                .account
                .account_number
                .as_deref()
                .and_then(|v| v.parse().ok());
            snapshot.sequence = account
                .account
                .sequence
                .as_deref()
                .and_then(|v| v.parse().ok());
        }

        debug!(
            address = %snapshot.address,
            balance = snapshot.balance,
            transaction_count = snapshot.transaction_count,
            "Fetched wallet snapshot"
        );

        Ok(snapshot)
    }

    fn is_live(&self) -> bool {
        true
    }
}

impl std::fmt::Debug for RestChainSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestChainSource")
            .field("rest_endpoints", &self.config.rest_endpoints)
            .field("timeout_ms", &self.config.timeout_ms)
            .finish()
    }
}

/// Validate a Sei wallet address. Format checking belongs to the chain
/// source, not the classifier.
pub fn validate_address(address: &str) -> Result<()> {
    if address.trim().is_empty() {
        return Err(AnalysisError::InvalidAddress("address is empty".into()));
    }
    if !address.starts_with(ADDRESS_PREFIX) {
        return Err(AnalysisError::InvalidAddress(format!(
            "'{address}' does not start with '{ADDRESS_PREFIX}'"
        )));
    }
    Ok(())
}

/// Parse a numeric string field from a chain response.
fn parse_numeric(field: &str, value: &str) -> Result<u64> {
    value.parse().map_err(|_| {
        AnalysisError::UpstreamMalformed(format!("{field} is not a number: '{value}'"))
    })
}

/// Parse a coin list string like `"1000000usei,5factory/..."` and return
/// the usei amount, if present.
fn parse_usei_amount(value: &str) -> Option<Amount> {
    value
        .split(',')
        .find_map(|coin| coin.strip_suffix(SEI_DENOM))
        .and_then(|digits| digits.parse().ok())
}

/// Convert one chain transaction into a transfer record.
///
/// Returns `None` for entries without a hash or that predate the event log
/// format.
fn parse_transaction(tx: &wire::TxResponse, direction: Direction) -> Option<TransferRecord> {
    if tx.txhash.is_empty() {
        return None;
    }

    let mut amount = 0;
    let mut counterparty = None;

    for log in &tx.logs {
        for event in &log.events {
            if event.kind != "transfer" {
                continue;
            }
            for attr in &event.attributes {
                match attr.key.as_str() {
                    "amount" => {
                        if let Some(parsed) = parse_usei_amount(&attr.value) {
                            amount = parsed;
                        }
                    }
                    "recipient" if direction == Direction::Outgoing => {
                        counterparty = Some(attr.value.clone());
                    }
                    "sender" if direction == Direction::Incoming => {
                        counterparty = Some(attr.value.clone());
                    }
                    _ => {}
                }
            }
        }
    }

    let kind = tx
        .tx
        .as_ref()
        .and_then(|t| t.body.as_ref())
        .and_then(|b| b.messages.first())
        .and_then(|msg| msg.get("@type"))
        .and_then(|t| t.as_str())
        .map(transfer_kind_from_type_url)
        .unwrap_or(TransferKind::Transfer);

    let fee = tx
        .tx
        .as_ref()
        .and_then(|t| t.auth_info.as_ref())
        .and_then(|a| a.fee.as_ref())
        .and_then(|f| f.amount.first())
        .and_then(|coin| coin.amount.parse().ok())
        .unwrap_or(0);

    Some(TransferRecord {
        hash: tx.txhash.clone(),
        height: tx.height.parse().unwrap_or(0),
        timestamp: tx.timestamp.clone(),
        direction,
        kind,
        amount,
        counterparty,
        fee,
        status: if tx.code == 0 {
            TxStatus::Success
        } else {
            TxStatus::Failed
        },
    })
}

/// Classify a Cosmos message type URL into a transfer kind.
fn transfer_kind_from_type_url(type_url: &str) -> TransferKind {
    if type_url.contains("staking") {
        TransferKind::Staking
    } else if type_url.contains("gov") {
        TransferKind::Governance
    } else if type_url.contains("distribution") {
        TransferKind::Rewards
    } else {
        TransferKind::Transfer
    }
}

/// Wire types for the subset of the Cosmos REST API this source consumes.
mod wire {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct Coin {
        pub denom: String,
        pub amount: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct BalancesResponse {
        #[serde(default)]
        pub balances: Vec<Coin>,
    }

    #[derive(Debug, Deserialize)]
    pub struct AccountResponse {
        pub account: Account,
    }

    #[derive(Debug, Default, Deserialize)]
    pub struct Account {
        #[serde(default)]
        pub account_number: Option<String>,
        #[serde(default)]
        pub sequence: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct TxSearchResponse {
        #[serde(default)]
        pub tx_responses: Vec<TxResponse>,
    }

    #[derive(Debug, Deserialize)]
    pub struct TxResponse {
        #[serde(default)]
        pub txhash: String,
        #[serde(default)]
        pub height: String,
        #[serde(default)]
        pub timestamp: String,
        #[serde(default)]
        pub code: u32,
        #[serde(default)]
        pub logs: Vec<TxLog>,
        #[serde(default)]
        pub tx: Option<Tx>,
    }

    #[derive(Debug, Deserialize)]
    pub struct TxLog {
        #[serde(default)]
        pub events: Vec<TxEvent>,
    }

    #[derive(Debug, Deserialize)]
    pub struct TxEvent {
        #[serde(rename = "type")]
        pub kind: String,
        #[serde(default)]
        pub attributes: Vec<TxAttribute>,
    }

    #[derive(Debug, Deserialize)]
    pub struct TxAttribute {
        pub key: String,
        #[serde(default)]
        pub value: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct Tx {
        #[serde(default)]
        pub body: Option<TxBody>,
        #[serde(default)]
        pub auth_info: Option<AuthInfo>,
    }

    #[derive(Debug, Deserialize)]
    pub struct TxBody {
        #[serde(default)]
        pub messages: Vec<serde_json::Value>,
    }

    #[derive(Debug, Deserialize)]
    pub struct AuthInfo {
        #[serde(default)]
        pub fee: Option<Fee>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Fee {
        #[serde(default)]
        pub amount: Vec<Coin>,
    }

    #[derive(Debug, Deserialize)]
    pub struct LatestBlockResponse {
        pub block: Block,
    }

    #[derive(Debug, Deserialize)]
    pub struct Block {
        pub header: BlockHeader,
    }

    #[derive(Debug, Default, Deserialize)]
    pub struct BlockHeader {
        #[serde(default)]
        pub chain_id: String,
        #[serde(default)]
        pub height: String,
        #[serde(default)]
        pub time: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct ValidatorsResponse {
        #[serde(default)]
        pub validators: Vec<serde_json::Value>,
    }

    #[derive(Debug, Deserialize)]
    pub struct StakingPoolResponse {
        pub pool: StakingPool,
    }

    #[derive(Debug, Deserialize)]
    pub struct StakingPool {
        #[serde(default)]
        pub bonded_tokens: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct SupplyResponse {
        pub amount: Coin,
    }
}
