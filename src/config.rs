use std::{collections::HashMap, path::Path};

use serde::{Deserialize, Serialize};

use crate::record::StatPrintFormat;

pub const DEFAULT_PROFILE: &str = "default";

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    /// Number of untimed trials before the timed ones
    #[serde(default)]
    pub warmup: usize,
    /// Fixed RNG seed. Seeded from OS entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Print per-algorithm statistics after the result
    #[serde(default)]
    pub stats: bool,
    #[serde(default, rename = "stat-format")]
    pub stat_format: StatPrintFormat,
    /// Count comparisons and exchanges
    #[serde(default, rename = "count-ops")]
    pub count_ops: bool,
}

impl Config {
    pub fn from_toml(s: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.is_file() {
            anyhow::bail!("Failed to load {}", path.display());
        }
        let s = std::fs::read_to_string(path)?;
        Self::from_toml(&s)
    }

    /// The named profile. A missing `default` profile falls back to built-in defaults.
    pub fn profile(&self, name: &str) -> anyhow::Result<Profile> {
        match self.profiles.get(name) {
            Some(profile) => Ok(profile.clone()),
            None if name == DEFAULT_PROFILE => Ok(Profile::default()),
            None => anyhow::bail!("Could not find sortbench profile `{}`", name),
        }
    }
}
