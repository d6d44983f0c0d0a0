//! CLI configuration.
//!
//! One TOML file carries every tunable: chain endpoints, classification
//! thresholds, health cutoffs, and the HTTP listen address. It is read
//! once at startup; the pieces are handed to the components by value.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use seilens_analysis::ServiceConfig;
use seilens_chain::ChainConfig;
use seilens_http::HttpConfig;
use seilens_types::{ClassifierPolicy, HealthPolicy, DEFAULT_TX_LIMIT};

use crate::error::{CliError, CliResult};

/// CLI configuration loaded from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Chain endpoint configuration.
    pub chain: ChainConfig,
    /// Analysis settings.
    pub analysis: AnalysisSection,
    /// Classification thresholds.
    pub classifier: ClassifierPolicy,
    /// Network health parameters.
    pub health: HealthPolicy,
    /// HTTP server configuration.
    pub http: HttpConfig,
}

/// Analysis settings section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSection {
    /// Transactions fetched per wallet analysis.
    pub tx_limit: u32,
}

impl Default for AnalysisSection {
    fn default() -> Self {
        Self {
            tx_limit: DEFAULT_TX_LIMIT,
        }
    }
}

impl CliConfig {
    /// Load configuration from a file, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> CliResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::config(format!("failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Check every section once, before anything is built from it.
    pub fn validate(&self) -> CliResult<()> {
        self.chain.validate()?;
        self.classifier.validate()?;
        self.health.validate()?;
        Ok(())
    }

    /// The analysis pipeline settings carried by this configuration.
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            classifier: self.classifier.clone(),
            health: self.health.clone(),
            tx_limit: self.analysis.tx_limit,
        }
    }
}

/// Default configuration file path (`~/.config/seilens/config.toml` on
/// Linux).
pub fn default_config_path() -> PathBuf {
    directories::ProjectDirs::from("io", "seilens", "seilens")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("seilens.toml"))
}
