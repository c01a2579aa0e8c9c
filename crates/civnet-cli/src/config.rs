//! `civnet.toml` configuration.
//!
//! Every section is optional; unspecified values fall back to defaults, and
//! command-line flags override whatever the file says.
//!
//! ```toml
//! [networks]
//! electrical = "data/electrica.txt"
//! road = "data/vial.txt"
//! water = "data/hidrica.txt"
//!
//! [output]
//! format = "json"
//! decimals = 3
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use civnet_core::NetworkKind;
use serde::{Deserialize, Serialize};

use crate::report::OutputFormat;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "civnet.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CivnetConfig {
    pub networks: NetworkPaths,
    pub output: OutputConfig,
}

/// Edge-list file for each city network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkPaths {
    pub electrical: Option<PathBuf>,
    pub road: Option<PathBuf>,
    pub water: Option<PathBuf>,
}

impl NetworkPaths {
    pub fn get(&self, kind: NetworkKind) -> Option<&Path> {
        match kind {
            NetworkKind::Electrical => self.electrical.as_deref(),
            NetworkKind::Road => self.road.as_deref(),
            NetworkKind::Water => self.water.as_deref(),
        }
    }

    /// Fills in every path set in `overrides`.
    pub fn apply(&mut self, overrides: &NetworkPaths) {
        if let Some(path) = &overrides.electrical {
            self.electrical = Some(path.clone());
        }
        if let Some(path) = &overrides.road {
            self.road = Some(path.clone());
        }
        if let Some(path) = &overrides.water {
            self.water = Some(path.clone());
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Decimal places for distances.
    pub decimals: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Plain,
            decimals: 2,
        }
    }
}

impl CivnetConfig {
    /// Loads `explicit` if given (it must exist), otherwise `civnet.toml` in
    /// the working directory when present, otherwise defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::load_from(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading config file '{}'", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("parsing config file '{}'", path.display()))?;
        Ok(config)
    }
}
