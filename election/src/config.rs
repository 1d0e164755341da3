//! Engine configuration with TOML file support.

use election_types::Identity;
use election_utils::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::ElectionError;

/// Configuration for an election engine.
///
/// Can be loaded from a TOML file via [`ElectionConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ElectionConfig {
    /// Seconds that must pass after voting opens before the first vote is accepted.
    #[serde(default = "default_vote_delay_secs")]
    pub vote_delay_secs: u64,

    /// Account that receives donated value.
    #[serde(default = "default_treasury")]
    pub treasury: Identity,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_vote_delay_secs() -> u64 {
    3600
}

fn default_treasury() -> Identity {
    Identity::new("election-treasury")
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl ElectionConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ElectionError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ElectionError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ElectionError> {
        toml::from_str(s).map_err(|e| ElectionError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ElectionError> {
        toml::to_string_pretty(self).map_err(|e| ElectionError::Config(e.to_string()))
    }

    /// Install the global tracing subscriber from `log_level` and `log_format`.
    pub fn init_logging(&self) {
        election_utils::init_tracing(&self.log_level, self.log_format);
    }
}

impl Default for ElectionConfig {
    fn default() -> Self {
        Self {
            vote_delay_secs: default_vote_delay_secs(),
            treasury: default_treasury(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}
