//! Injectable classification and health policies.
//!
//! Thresholds are deployment policy, not protocol facts: they are loaded
//! once from configuration and passed into the classifier and summarizer at
//! construction time. Both policies carry defaults matching the documented
//! behavior of the service, and a `validate` that configuration loading
//! calls before anything is built from them.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{AnalysisError, Result};
use crate::Amount;

/// Thresholds and score parameters for wallet classification.
///
/// Rules are evaluated in a fixed order (whale, large holder, active, new,
/// dormant) with balance as the primary attribute and transaction count as
/// the secondary. A value exactly at a threshold classifies into the higher
/// category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierPolicy {
    /// Balance at or above which a wallet is a Whale (usei).
    pub whale_min: Amount,
    /// Balance at or above which a wallet is a LargeHolder (usei).
    pub large_holder_min: Amount,
    /// Transaction count at or above which a wallet is Active.
    pub active_min_txs: u32,
    /// Balance that scores a full 1.0 whale score (usei).
    pub whale_score_divisor: Amount,
    /// Baseline risk factor.
    pub risk_base: f64,
    /// Transaction count above which activity adds risk.
    pub high_activity_txs: u32,
    /// Risk added for high activity.
    pub risk_high_activity: f64,
    /// Failure ratio above which failures add risk.
    pub failure_ratio_threshold: f64,
    /// Risk added for a high failure ratio.
    pub risk_high_failure: f64,
}

impl Default for ClassifierPolicy {
    fn default() -> Self {
        Self {
            whale_min: DEFAULT_WHALE_MIN,
            large_holder_min: DEFAULT_LARGE_HOLDER_MIN,
            active_min_txs: DEFAULT_ACTIVE_MIN_TXS,
            whale_score_divisor: DEFAULT_WHALE_SCORE_DIVISOR,
            risk_base: DEFAULT_RISK_BASE,
            high_activity_txs: DEFAULT_HIGH_ACTIVITY_TXS,
            risk_high_activity: DEFAULT_RISK_HIGH_ACTIVITY,
            failure_ratio_threshold: DEFAULT_FAILURE_RATIO_THRESHOLD,
            risk_high_failure: DEFAULT_RISK_HIGH_FAILURE,
        }
    }
}

impl ClassifierPolicy {
    /// Check internal consistency of the policy.
    pub fn validate(&self) -> Result<()> {
        if self.whale_min <= self.large_holder_min {
            return Err(AnalysisError::InvalidRequest(format!(
                "whale_min ({}) must exceed large_holder_min ({})",
                self.whale_min, self.large_holder_min
            )));
        }
        if self.whale_score_divisor == 0 {
            return Err(AnalysisError::InvalidRequest(
                "whale_score_divisor must be positive".into(),
            ));
        }
        for (name, value) in [
            ("risk_base", self.risk_base),
            ("risk_high_activity", self.risk_high_activity),
            ("risk_high_failure", self.risk_high_failure),
            ("failure_ratio_threshold", self.failure_ratio_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(AnalysisError::InvalidRequest(format!(
                    "{name} must lie in [0,1], got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Targets, weights, and cutoffs for the network health score.
///
/// The score is
/// `staking_weight * min(ratio / target_staking_ratio, 1)
///  + validator_weight * min(validators / target_validators, 1)
///  + base_score`,
/// and the status label is picked from the cutoffs, at-cutoff choosing the
/// better label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthPolicy {
    /// Staking ratio treated as fully healthy.
    pub target_staking_ratio: f64,
    /// Validator count treated as fully healthy.
    pub target_validators: u32,
    /// Weight of the staking term.
    pub staking_weight: f64,
    /// Weight of the validator term.
    pub validator_weight: f64,
    /// Constant base term.
    pub base_score: f64,
    /// Score at or above which the network is Excellent.
    pub excellent_min: f64,
    /// Score at or above which the network is Good.
    pub good_min: f64,
    /// Score at or above which the network is Degraded.
    pub degraded_min: f64,
}

impl Default for HealthPolicy {
    fn default() -> Self {
        Self {
            target_staking_ratio: DEFAULT_TARGET_STAKING_RATIO,
            target_validators: DEFAULT_TARGET_VALIDATORS,
            staking_weight: DEFAULT_STAKING_WEIGHT,
            validator_weight: DEFAULT_VALIDATOR_WEIGHT,
            base_score: DEFAULT_HEALTH_BASE_SCORE,
            excellent_min: DEFAULT_EXCELLENT_MIN,
            good_min: DEFAULT_GOOD_MIN,
            degraded_min: DEFAULT_DEGRADED_MIN,
        }
    }
}

impl HealthPolicy {
    /// Check internal consistency of the policy.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.target_staking_ratio) || self.target_staking_ratio == 0.0 {
            return Err(AnalysisError::InvalidRequest(format!(
                "target_staking_ratio must lie in (0,1], got {}",
                self.target_staking_ratio
            )));
        }
        if self.target_validators == 0 {
            return Err(AnalysisError::InvalidRequest(
                "target_validators must be positive".into(),
            ));
        }
        let weight_sum = self.staking_weight + self.validator_weight + self.base_score;
        if (weight_sum - 1.0).abs() > 1e-9 {
            return Err(AnalysisError::InvalidRequest(format!(
                "health weights must sum to 1.0, got {weight_sum}"
            )));
        }
        if !(self.excellent_min > self.good_min && self.good_min > self.degraded_min) {
            return Err(AnalysisError::InvalidRequest(
                "health cutoffs must be strictly decreasing".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policies_are_valid() {
        ClassifierPolicy::default().validate().unwrap();
        HealthPolicy::default().validate().unwrap();
    }

    #[test]
    fn test_classifier_policy_rejects_inverted_thresholds() {
        let policy = ClassifierPolicy {
            whale_min: 10,
            large_holder_min: 20,
            ..Default::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_classifier_policy_rejects_out_of_range_risk() {
        let policy = ClassifierPolicy {
            risk_base: 1.5,
            ..Default::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_health_policy_rejects_bad_weights() {
        let policy = HealthPolicy {
            staking_weight: 0.5,
            validator_weight: 0.5,
            base_score: 0.5,
            ..Default::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_health_policy_rejects_unordered_cutoffs() {
        let policy = HealthPolicy {
            excellent_min: 0.5,
            good_min: 0.7,
            ..Default::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_policy_toml_defaults_fill_missing_fields() {
        // serde(default) lets partial configs deserialize
        let policy: ClassifierPolicy = serde_json::from_str(r#"{"active_min_txs": 250}"#).unwrap();
        assert_eq!(policy.active_min_txs, 250);
        assert_eq!(policy.whale_min, DEFAULT_WHALE_MIN);
    }
}
