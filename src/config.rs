//! Settings: built-in defaults + optional TOML file.
//!
//! - `Settings::default()` → threshold 1e100, factorial limit 5000
//! - `Settings::from_toml_file(path)` → load user settings (missing keys keep defaults)
//! - `Settings::load(cli_path)` → `--config FILE`, else ~/.primelens/config.toml if present

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::numbers::DEFAULT_THRESHOLD;

/// Largest integer the input domain accepts by default (2^53 - 1).
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Ceiling for `factorial_limit`; exact factorials grow quadratically in cost.
pub const MAX_FACTORIAL_LIMIT: u64 = 100_000;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SquareTest {
    /// sqrt(n) == floor(sqrt(n)) in f64
    #[default]
    Float,
    /// integer square root
    Exact,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Factorials strictly above this print in scientific notation.
    pub threshold: f64,
    /// Largest factorial argument that is computed at all.
    pub factorial_limit: u64,
    /// Largest accepted input.
    pub max_input: u64,
    pub square_test: SquareTest,
    /// Offer the exact value of abbreviated factorials.
    pub exact_toggle: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            factorial_limit: 5000,
            max_input: MAX_SAFE_INTEGER,
            square_test: SquareTest::Float,
            exact_toggle: true,
        }
    }
}

impl Settings {
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&txt).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_toml_str(txt: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(txt)?;
        settings.validate()?;
        Ok(settings)
    }

    /// An explicit path must exist; the default path is optional.
    pub fn load(cli_path: &Option<PathBuf>) -> Result<Self> {
        if let Some(p) = cli_path {
            debug!(path = %p.display(), "loading settings");
            return Self::from_toml_file(p);
        }
        match default_config_path() {
            Some(p) if p.exists() => {
                debug!(path = %p.display(), "loading default settings");
                Self::from_toml_file(&p)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("serializing settings")
    }

    fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            anyhow::bail!("threshold must be a positive finite number, got {}", self.threshold);
        }
        if self.max_input == 0 {
            anyhow::bail!("max_input must be at least 1");
        }
        if self.factorial_limit > MAX_FACTORIAL_LIMIT {
            anyhow::bail!(
                "factorial_limit must be at most {MAX_FACTORIAL_LIMIT}, got {}",
                self.factorial_limit
            );
        }
        Ok(())
    }
}

/// ~/.primelens/config.toml
pub fn default_config_path() -> Option<PathBuf> {
    dirs_next::home_dir().map(|h| h.join(".primelens").join("config.toml"))
}
