//! Network health summarization.
//!
//! Maps a raw network snapshot to a normalized health report. Pure and
//! stateless; the health policy is injected at construction.

use seilens_types::{
    usei_to_sei, AnalysisError, HealthPolicy, NetworkReport, NetworkSnapshot, NetworkStatus,
    Result, SecurityLevel,
};

use crate::{round3, round6};

/// Pure network summarizer.
#[derive(Debug, Clone)]
pub struct NetworkSummarizer {
    policy: HealthPolicy,
}

impl NetworkSummarizer {
    /// Create a summarizer with the given policy.
    pub fn new(policy: HealthPolicy) -> Result<Self> {
        policy.validate()?;
        Ok(Self { policy })
    }

    /// The policy in effect.
    pub fn policy(&self) -> &HealthPolicy {
        &self.policy
    }

    /// Compute the health score for a staking ratio and validator count.
    ///
    /// `staking_weight * min(ratio / target_ratio, 1)
    ///  + validator_weight * min(validators / target_validators, 1)
    ///  + base_score`
    pub fn health_score(&self, staking_ratio: f64, validator_count: u32) -> f64 {
        let staking_term = (staking_ratio / self.policy.target_staking_ratio).min(1.0);
        let validator_term =
            (validator_count as f64 / self.policy.target_validators as f64).min(1.0);

        self.policy.staking_weight * staking_term
            + self.policy.validator_weight * validator_term
            + self.policy.base_score
    }

    /// Select the status label for a health score. At-cutoff scores take
    /// the better label.
    pub fn status_for_score(&self, score: f64) -> NetworkStatus {
        if score >= self.policy.excellent_min {
            NetworkStatus::Excellent
        } else if score >= self.policy.good_min {
            NetworkStatus::Good
        } else if score >= self.policy.degraded_min {
            NetworkStatus::Degraded
        } else {
            NetworkStatus::Critical
        }
    }

    /// Select the security level for a staking ratio.
    pub fn security_for_ratio(&self, staking_ratio: f64) -> SecurityLevel {
        if staking_ratio >= self.policy.target_staking_ratio {
            SecurityLevel::High
        } else if staking_ratio >= self.policy.target_staking_ratio / 2.0 {
            SecurityLevel::Medium
        } else {
            SecurityLevel::Low
        }
    }

    /// Summarize a network snapshot into a health report.
    ///
    /// Fails with an invalid-snapshot error when the staking ratio lies
    /// outside [0,1] or is not a number.
    pub fn summarize(&self, snapshot: &NetworkSnapshot) -> Result<NetworkReport> {
        if !snapshot.staking_ratio.is_finite() || !(0.0..=1.0).contains(&snapshot.staking_ratio) {
            return Err(AnalysisError::invalid_snapshot(format!(
                "staking ratio {} outside [0,1]",
                snapshot.staking_ratio
            )));
        }

        let score = round3(self.health_score(snapshot.staking_ratio, snapshot.validator_count));

        Ok(NetworkReport {
            status: self.status_for_score(score),
            health_score: score,
            chain_id: snapshot.chain_id.clone(),
            block_height: snapshot.block_height,
            block_time: snapshot.block_time.clone(),
            validator_count: snapshot.validator_count,
            staking_ratio: snapshot.staking_ratio,
            staking_participation: format!("{:.1}%", snapshot.staking_ratio * 100.0),
            total_bonded_sei: round6(usei_to_sei(snapshot.total_bonded)),
            total_supply_sei: round6(usei_to_sei(snapshot.total_supply)),
            security: self.security_for_ratio(snapshot.staking_ratio),
        })
    }
}
