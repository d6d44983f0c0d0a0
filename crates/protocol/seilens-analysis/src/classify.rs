//! Wallet classification.
//!
//! The category is a pure, deterministic function of balance and
//! transaction count. Rules are evaluated in a fixed order — balance rules
//! first, activity rules second — and a value exactly at a threshold
//! classifies into the higher category, so boundary values are never
//! ambiguous.

use seilens_types::{
    usei_to_sei, Amount, AnalysisError, ClassifierPolicy, Result, TransactionAnalysis,
    WalletCategory, WalletMetrics, WalletReport, WalletScores, WalletSnapshot, RECENT_TRANSACTIONS,
    USEI_PER_SEI,
};

use crate::{round3, round6};

/// Weight of the whale score in the overall score.
const OVERALL_WHALE_WEIGHT: f64 = 0.4;
/// Weight of the inverted risk factor in the overall score.
const OVERALL_RISK_WEIGHT: f64 = 0.3;
/// Weight of the influence score in the overall score.
const OVERALL_INFLUENCE_WEIGHT: f64 = 0.3;

/// Balance above which an unstaked wallet is advised to stake: 1,000 SEI.
const STAKING_ADVICE_MIN: Amount = 1_000 * USEI_PER_SEI;

/// Staking transaction count above which a wallet counts as an active staker.
const ACTIVE_STAKER_MIN_TXS: u32 = 5;

/// Pure wallet classifier.
///
/// Construction validates the policy once; classification never fails on
/// policy grounds afterwards.
#[derive(Debug, Clone)]
pub struct Classifier {
    policy: ClassifierPolicy,
}

impl Classifier {
    /// Create a classifier with the given policy.
    pub fn new(policy: ClassifierPolicy) -> Result<Self> {
        policy.validate()?;
        Ok(Self { policy })
    }

    /// The policy in effect.
    pub fn policy(&self) -> &ClassifierPolicy {
        &self.policy
    }

    /// Select the category for a balance / transaction-count pair.
    ///
    /// Rule order, first match wins:
    /// 1. balance ≥ whale_min → Whale
    /// 2. balance ≥ large_holder_min → LargeHolder
    /// 3. transaction_count ≥ active_min_txs → Active
    /// 4. transaction_count == 0 → New
    /// 5. otherwise → Dormant
    pub fn category(&self, balance: Amount, transaction_count: u32) -> WalletCategory {
        if balance >= self.policy.whale_min {
            WalletCategory::Whale
        } else if balance >= self.policy.large_holder_min {
            WalletCategory::LargeHolder
        } else if transaction_count >= self.policy.active_min_txs {
            WalletCategory::Active
        } else if transaction_count == 0 {
            WalletCategory::New
        } else {
            WalletCategory::Dormant
        }
    }

    /// Classify a wallet snapshot into a full report.
    ///
    /// Pure: no I/O, no side effects. Fails with an invalid-snapshot error
    /// only when the snapshot violates its own contract.
    pub fn classify(&self, snapshot: &WalletSnapshot) -> Result<WalletReport> {
        if snapshot.address.trim().is_empty() {
            return Err(AnalysisError::invalid_snapshot("address is empty"));
        }

        let category = self.category(snapshot.balance, snapshot.transaction_count);
        let scores = self.scores(snapshot);

        let staking_txs = snapshot.staking_transactions();
        let failed = snapshot.failed_transactions();
        let history_len = snapshot.transactions.len() as u32;
        let volume_sei = usei_to_sei(snapshot.total_volume());

        let recommendations = self.recommendations(snapshot, &scores, staking_txs, failed);

        let mut recent_transactions = snapshot.transactions.clone();
        recent_transactions.truncate(RECENT_TRANSACTIONS);

        Ok(WalletReport {
            address: snapshot.address.clone(),
            category,
            scores,
            metrics: WalletMetrics {
                balance_sei: round6(usei_to_sei(snapshot.balance)),
                balance_usei: snapshot.balance,
                transaction_count: snapshot.transaction_count,
                staking_transactions: staking_txs,
                reward_transactions: snapshot.reward_transactions(),
                account_number: snapshot.account_number,
                sequence: snapshot.sequence,
            },
            transactions: TransactionAnalysis {
                total_transactions: history_len,
                successful_transactions: history_len - failed,
                failed_transactions: failed,
                total_volume_sei: round6(volume_sei),
                average_amount_sei: if history_len > 0 {
                    round6(volume_sei / history_len as f64)
                } else {
                    0.0
                },
                latest_timestamp: snapshot.transactions.first().map(|t| t.timestamp.clone()),
            },
            recent_transactions,
            recommendations,
        })
    }

    /// Compute the derived scores for a snapshot.
    fn scores(&self, snapshot: &WalletSnapshot) -> WalletScores {
        let whale_score =
            (snapshot.balance as f64 / self.policy.whale_score_divisor as f64).min(1.0);

        let mut risk_factor = self.policy.risk_base;
        if snapshot.transaction_count > self.policy.high_activity_txs {
            risk_factor += self.policy.risk_high_activity;
        }
        let history_len = snapshot.transactions.len();
        if history_len > 0 {
            let failure_ratio = snapshot.failed_transactions() as f64 / history_len as f64;
            if failure_ratio > self.policy.failure_ratio_threshold {
                risk_factor += self.policy.risk_high_failure;
            }
        }
        let risk_factor = risk_factor.min(1.0);

        let influence_score = if snapshot.balance > 0 {
            (snapshot.total_volume() as f64 / snapshot.balance as f64).min(1.0) * 0.5
        } else {
            0.0
        };

        let overall_score = OVERALL_WHALE_WEIGHT * whale_score
            + OVERALL_RISK_WEIGHT * (1.0 - risk_factor)
            + OVERALL_INFLUENCE_WEIGHT * influence_score;

        WalletScores {
            whale_score: round3(whale_score),
            risk_factor: round3(risk_factor),
            influence_score: round3(influence_score),
            overall_score: round3(overall_score),
        }
    }

    /// Rule-derived recommendations for the caller.
    fn recommendations(
        &self,
        snapshot: &WalletSnapshot,
        scores: &WalletScores,
        staking_txs: u32,
        failed: u32,
    ) -> Vec<String> {
        let mut recommendations = Vec::new();

        if scores.whale_score > 0.7 {
            recommendations.push("High-value wallet - monitor for large movements".to_string());
        }
        if staking_txs > ACTIVE_STAKER_MIN_TXS {
            recommendations.push("Active staker - earning rewards".to_string());
        }
        if staking_txs == 0 && snapshot.balance > STAKING_ADVICE_MIN {
            recommendations.push("Consider staking for rewards".to_string());
        }
        let history_len = snapshot.transactions.len() as f64;
        if history_len > 0.0 && failed as f64 > history_len * self.policy.failure_ratio_threshold {
            recommendations.push("High transaction failure rate".to_string());
        }

        recommendations
    }
}
