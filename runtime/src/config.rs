//! Vault configuration.
//!
//! Layers, lowest to highest: built-in defaults, a TOML file, `LOVE_VAULT_*`
//! environment variables. Command-line flags are applied by the binary on top.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use vault_core::prelude::*;

use crate::ledger::{FileLedger, MemoryLedger};

pub const DEFAULT_CONFIG_FILE: &str = "love-vault.toml";
pub const DEFAULT_LOG_FILTER: &str = "warn";

pub const ENV_PLAYER: &str = "LOVE_VAULT_PLAYER";
pub const ENV_LEDGER: &str = "LOVE_VAULT_LEDGER";
pub const ENV_ADVANCE_DELAY_MS: &str = "LOVE_VAULT_ADVANCE_DELAY_MS";
pub const ENV_LOG: &str = "LOVE_VAULT_LOG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    /// Whose achievements get recorded.
    pub player: String,
    /// Directory for the JSON file ledger. In-memory when absent.
    pub ledger_dir: Option<PathBuf>,
    /// Pause between a passed stage and the next prompt.
    pub advance_delay_ms: u64,
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Overrides that were set but could not be applied.
    #[serde(skip)]
    pub rejected: Vec<RejectedOverride>,
}

/// An environment override whose value did not parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedOverride {
    pub key: &'static str,
    pub value: String,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            player: "guest".to_string(),
            ledger_dir: None,
            advance_delay_ms: 1000,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            rejected: Vec::new(),
        }
    }
}

impl VaultConfig {
    /// Load from `path`, or from `love-vault.toml` in the working directory if
    /// it exists, then apply the environment.
    ///
    /// An explicit path that cannot be read is an error; a missing default
    /// file is not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)?
                } else {
                    Self::default()
                }
            }
        };
        Ok(config.apply_env())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&contents).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn apply_env(self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup. Empty values are ignored; values
    /// that do not parse are kept in [`VaultConfig::rejected`].
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(player) = get(ENV_PLAYER) {
            self.player = player;
        }
        if let Some(dir) = get(ENV_LEDGER) {
            self.ledger_dir = Some(PathBuf::from(dir));
        }
        if let Some(raw) = get(ENV_ADVANCE_DELAY_MS) {
            match raw.trim().parse() {
                Ok(ms) => self.advance_delay_ms = ms,
                Err(_) => self.rejected.push(RejectedOverride {
                    key: ENV_ADVANCE_DELAY_MS,
                    value: raw,
                }),
            }
        }
        if let Some(filter) = get(ENV_LOG) {
            self.log_filter = filter;
        }
        self
    }

    pub fn rejected(&self) -> &[RejectedOverride] {
        &self.rejected
    }

    /// Log every rejected override. Call once tracing is initialized.
    pub fn report_rejected(&self) {
        for rejected in &self.rejected {
            tracing::warn!(
                key = rejected.key,
                value = %rejected.value,
                "Ignoring invalid override"
            );
        }
    }

    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.advance_delay_ms)
    }

    /// Build the ledger this configuration points at.
    pub async fn open_ledger(&self) -> Result<Arc<dyn AchievementLedger>, LedgerError> {
        match &self.ledger_dir {
            Some(dir) => Ok(Arc::new(FileLedger::open(dir, &self.player).await?)),
            None => Ok(Arc::new(MemoryLedger::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = VaultConfig::default();
        assert_eq!(config.player, "guest");
        assert_eq!(config.ledger_dir, None);
        assert_eq!(config.advance_delay(), Duration::from_secs(1));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = VaultConfig::from_toml("player = \"ishaan\"\nadvance_delay_ms = 250\n").unwrap();
        assert_eq!(config.player, "ishaan");
        assert_eq!(config.advance_delay_ms, 250);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_unknown_types_are_rejected() {
        assert!(VaultConfig::from_toml("advance_delay_ms = \"soon\"").is_err());
    }

    #[test]
    fn test_overrides_win_over_file() {
        let env = HashMap::from([
            (ENV_PLAYER, "kavya"),
            (ENV_LEDGER, "/tmp/vault"),
            (ENV_ADVANCE_DELAY_MS, "0"),
            (ENV_LOG, ""),
        ]);
        let config = VaultConfig::from_toml("player = \"ishaan\"")
            .unwrap()
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.player, "kavya");
        assert_eq!(config.ledger_dir, Some(PathBuf::from("/tmp/vault")));
        assert_eq!(config.advance_delay_ms, 0);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_bad_delay_override_is_ignored() {
        let config = VaultConfig::default()
            .apply_overrides(|key| (key == ENV_ADVANCE_DELAY_MS).then(|| "fast".to_string()));
        assert_eq!(config.advance_delay_ms, 1000);
        assert_eq!(
            config.rejected(),
            &[RejectedOverride {
                key: ENV_ADVANCE_DELAY_MS,
                value: "fast".into(),
            }]
        );
    }

    #[test]
    fn test_valid_overrides_reject_nothing() {
        let config = VaultConfig::default()
            .apply_overrides(|key| (key == ENV_ADVANCE_DELAY_MS).then(|| " 250 ".to_string()));
        assert_eq!(config.advance_delay_ms, 250);
        assert!(config.rejected().is_empty());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(VaultConfig::load(Some(&missing)).is_err());
    }

    #[tokio::test]
    async fn test_open_ledger_picks_backend() {
        let dir = tempfile::tempdir().unwrap();
        let config = VaultConfig {
            player: "ishaan".into(),
            ledger_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let ledger = config.open_ledger().await.unwrap();
        ledger.record(Achievement::FirstVisit).await.unwrap();
        assert!(dir.path().join("ishaan.json").exists());

        let memory = VaultConfig::default().open_ledger().await.unwrap();
        assert!(memory.recorded().await.unwrap().is_empty());
    }
}
