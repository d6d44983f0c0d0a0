//! Service constants: denomination, chain defaults, request limits, and
//! default policy values.
//!
//! Every value here is a *default*. The classification and health values are
//! policy inputs carried by [`crate::ClassifierPolicy`] and
//! [`crate::HealthPolicy`]; the chain values seed `ChainConfig` in the chain
//! crate. Nothing reads these at request time.

use crate::Amount;

// =============================================================================
// Denomination
// =============================================================================

/// Number of decimals in the SEI denomination.
pub const SEI_DECIMALS: u32 = 6;

/// usei per SEI (10^6).
pub const USEI_PER_SEI: Amount = 1_000_000;

/// The on-chain denom string for micro-SEI.
pub const SEI_DENOM: &str = "usei";

// =============================================================================
// Chain Defaults
// =============================================================================

/// Chain ID of the Sei mainnet.
pub const DEFAULT_CHAIN_ID: &str = "pacific-1";

/// Bech32 prefix of Sei wallet addresses.
pub const ADDRESS_PREFIX: &str = "sei1";

/// Public REST endpoints queried in order until one answers.
pub const DEFAULT_REST_ENDPOINTS: &[&str] = &[
    "https://rest.sei-apis.com",
    "https://sei-api.polkachu.com",
    "https://api-sei.stingray.plus",
];

/// Per-request upstream timeout: 10 seconds (in milliseconds).
pub const DEFAULT_UPSTREAM_TIMEOUT_MS: u64 = 10_000;

/// Rounds through the full endpoint list before giving up.
pub const DEFAULT_RETRY_ROUNDS: u32 = 2;

/// Backoff between retry rounds (in milliseconds).
pub const DEFAULT_RETRY_BACKOFF_MS: u64 = 250;

// =============================================================================
// Request Limits
// =============================================================================

/// Default number of transactions fetched per wallet.
pub const DEFAULT_TX_LIMIT: u32 = 100;

/// Maximum number of transactions a caller may request.
pub const MAX_TX_LIMIT: u32 = 200;

/// Number of recent transactions echoed in a wallet report.
pub const RECENT_TRANSACTIONS: usize = 5;

/// Minimum addresses accepted by a comparison request.
pub const MIN_COMPARE_ADDRESSES: usize = 2;

/// Maximum addresses accepted by a comparison request.
pub const MAX_COMPARE_ADDRESSES: usize = 10;

// =============================================================================
// Classification Defaults
// =============================================================================

/// Balance at or above which a wallet is a Whale: 1,000,000 SEI (in usei).
pub const DEFAULT_WHALE_MIN: Amount = 1_000_000 * USEI_PER_SEI;

/// Balance at or above which a wallet is a LargeHolder: 100,000 SEI (in usei).
pub const DEFAULT_LARGE_HOLDER_MIN: Amount = 100_000 * USEI_PER_SEI;

/// Transaction count at or above which a wallet is Active.
pub const DEFAULT_ACTIVE_MIN_TXS: u32 = 100;

/// Whale score divisor: 10,000,000 SEI (in usei). A balance at or above the
/// divisor scores 1.0.
pub const DEFAULT_WHALE_SCORE_DIVISOR: Amount = 10_000_000 * USEI_PER_SEI;

/// Baseline risk factor for every wallet.
pub const DEFAULT_RISK_BASE: f64 = 0.3;

/// Transaction count above which activity adds to the risk factor.
pub const DEFAULT_HIGH_ACTIVITY_TXS: u32 = 1_000;

/// Risk added for high transaction activity.
pub const DEFAULT_RISK_HIGH_ACTIVITY: f64 = 0.3;

/// Failed-transaction ratio above which failures add to the risk factor.
pub const DEFAULT_FAILURE_RATIO_THRESHOLD: f64 = 0.1;

/// Risk added for a high failure ratio.
pub const DEFAULT_RISK_HIGH_FAILURE: f64 = 0.2;

// =============================================================================
// Network Health Defaults
// =============================================================================

/// Staking ratio treated as fully healthy.
pub const DEFAULT_TARGET_STAKING_RATIO: f64 = 0.6;

/// Bonded validator count treated as fully healthy.
pub const DEFAULT_TARGET_VALIDATORS: u32 = 80;

/// Weight of the staking-ratio term in the health score.
pub const DEFAULT_STAKING_WEIGHT: f64 = 0.4;

/// Weight of the validator-count term in the health score.
pub const DEFAULT_VALIDATOR_WEIGHT: f64 = 0.4;

/// Constant base term of the health score.
pub const DEFAULT_HEALTH_BASE_SCORE: f64 = 0.2;

/// Health score at or above which the network is Excellent.
pub const DEFAULT_EXCELLENT_MIN: f64 = 0.9;

/// Health score at or above which the network is Good.
pub const DEFAULT_GOOD_MIN: f64 = 0.7;

/// Health score at or above which the network is Degraded (below: Critical).
pub const DEFAULT_DEGRADED_MIN: f64 = 0.4;
