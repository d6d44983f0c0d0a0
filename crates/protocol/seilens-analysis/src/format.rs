//! The `AnalysisResult` envelope builder.
//!
//! Stamps a request-scoped timestamp at formatting time (not at fetch
//! time) and copies the provenance flag exactly as received — a fallback
//! result can never be upgraded to live here.

use std::time::{SystemTime, UNIX_EPOCH};

use seilens_types::{AnalysisResult, Report, RequestEcho};

/// Builds response envelopes.
#[derive(Debug, Clone, Default)]
pub struct ResponseFormatter;

impl ResponseFormatter {
    /// Create a formatter.
    pub fn new() -> Self {
        Self
    }

    /// Wrap a report into an envelope.
    ///
    /// `live_data` must come from the snapshot(s) that produced the report.
    pub fn format(&self, request: RequestEcho, live_data: bool, report: Report) -> AnalysisResult {
        AnalysisResult {
            request,
            live_data,
            timestamp_ms: now_ms(),
            report,
        }
    }
}

/// Current time as Unix milliseconds.
fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
