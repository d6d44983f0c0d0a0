//! Analysis core for the Seilens service.
//!
//! The classifier and summarizer are pure, stateless functions over
//! snapshots: no I/O, no hidden state, safe to call concurrently. The
//! response formatter wraps their output into the transport-neutral
//! [`seilens_types::AnalysisResult`] envelope. [`AnalysisService`] ties the
//! pieces to a [`seilens_chain::ChainDataSource`] and is the single
//! pipeline both transport adapters delegate to — neither transport
//! reimplements any of this.
//!
//! # Module Organization
//!
//! - [`classify`] - wallet classification and derived scores
//! - [`summarize`] - network health summarization
//! - [`compare`] - multi-wallet comparison aggregation
//! - [`format`] - the `AnalysisResult` envelope builder
//! - [`service`] - the shared request pipeline

pub mod classify;
pub mod compare;
pub mod format;
pub mod service;
pub mod summarize;

pub use classify::Classifier;
pub use compare::build_comparison;
pub use format::ResponseFormatter;
pub use service::{AnalysisService, ServiceConfig};
pub use summarize::NetworkSummarizer;

/// Round to three decimal places, the precision used for scores.
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1_000.0).round() / 1_000.0
}

/// Round to six decimal places, the precision used for SEI amounts.
pub(crate) fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding() {
        assert_eq!(round3(0.747_333), 0.747);
        assert_eq!(round3(0.999_9), 1.0);
        assert_eq!(round6(12.345_678_9), 12.345_679);
    }
}
