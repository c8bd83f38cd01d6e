//! Configuration management for readme-deps
//!
//! Settings are read from an optional `readme-deps.toml` in the working
//! directory, or from the file passed with `--config`. Every key has a default, so the file only needs the values that
//! differ:
//!
//! ```toml
//! readme = "docs/README.md"
//!
//! [registry]
//! url = "https://registry.npmjs.org"
//! timeout_secs = 10
//! concurrency = 8
//!
//! [sync]
//! merge_policy = "prefer-existing"
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "readme-deps.toml";

/// Default npm registry
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Default HTTP timeout for registry requests
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default number of registry lookups in flight
const DEFAULT_CONCURRENCY: usize = 8;

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Markdown document holding the tables
    pub readme: PathBuf,
    /// Manifest listing the dependencies
    pub manifest: PathBuf,
    /// Registry configuration
    pub registry: RegistryConfig,
    /// Reconciliation configuration
    pub sync: SyncConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            readme: PathBuf::from("README.md"),
            manifest: PathBuf::from("package.json"),
            registry: RegistryConfig::default(),
            sync: SyncConfig::default(),
        }
    }
}

/// npm registry configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Base URL of the registry
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Maximum number of concurrent lookups
    pub concurrency: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_REGISTRY_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

/// Which record wins when a dependency is both in the document and freshly
/// fetched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MergePolicy {
    /// Always look dependencies up; keep the documented record only when the
    /// lookup fails
    #[default]
    PreferFresh,
    /// Reuse documented records and only look up dependencies missing from
    /// the document
    PreferExisting,
}

/// Reconciliation configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    pub merge_policy: MergePolicy,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from `path`, falling back to defaults if the file
    /// does not exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content)
                .with_context(|| format!("invalid configuration in {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No configuration at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => {
                Err(e).with_context(|| format!("failed to read configuration {}", path.display()))
            }
        }
    }
}
