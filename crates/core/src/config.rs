//! Store configuration.
//!
//! Use the builder methods, or load a TOML file:
//!
//! ```
//! use aurora_core::AuroraConfig;
//!
//! let cfg = AuroraConfig::new().bootstrap(false).default_scan_limit(50);
//! assert!(!cfg.bootstrap);
//!
//! let cfg = AuroraConfig::from_toml_str("default_scan_limit = 25").unwrap();
//! assert_eq!(cfg.default_scan_limit, 25);
//! assert!(cfg.bootstrap);
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AuroraError, AuroraResult};

/// Page size used when a scan does not name a limit.
pub const DEFAULT_SCAN_LIMIT: usize = 10;

/// Options for opening a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuroraConfig {
    /// Ingest the built-in ontology table when opening an empty store.
    pub bootstrap: bool,
    /// Page size for scans without an explicit limit.
    pub default_scan_limit: usize,
    /// Rehydrate from this snapshot file when it exists.
    pub snapshot_path: Option<PathBuf>,
}

impl AuroraConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the bootstrap table.
    pub fn bootstrap(mut self, enabled: bool) -> Self {
        self.bootstrap = enabled;
        self
    }

    /// Set the default scan page size.
    pub fn default_scan_limit(mut self, limit: usize) -> Self {
        self.default_scan_limit = limit;
        self
    }

    /// Set the snapshot file to rehydrate from.
    pub fn snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot_path = Some(path.into());
        self
    }

    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> AuroraResult<Self> {
        let cfg: AuroraConfig =
            toml::from_str(text).map_err(|e| AuroraError::config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load a config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> AuroraResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Reject settings that cannot work.
    pub fn validate(&self) -> AuroraResult<()> {
        if self.default_scan_limit == 0 {
            return Err(AuroraError::config("default_scan_limit must be positive"));
        }
        Ok(())
    }
}

impl Default for AuroraConfig {
    fn default() -> Self {
        Self {
            bootstrap: true,
            default_scan_limit: DEFAULT_SCAN_LIMIT,
            snapshot_path: None,
        }
    }
}
