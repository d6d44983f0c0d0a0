//! Output formatting for CLI commands.

use serde::Serialize;

use crate::error::{CliError, CliResult};

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable summaries.
    #[default]
    Human,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Serialize a value for JSON output.
    pub fn to_json<T: Serialize>(&self, value: &T) -> CliResult<String> {
        serde_json::to_string_pretty(value)
            .map_err(|e| CliError::user(format!("failed to serialize output: {e}")))
    }
}
