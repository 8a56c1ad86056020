use std::fs::read_to_string;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shotgun_core::OverlapMethod;

/// Tuning knobs for an [`Assembler`](crate::Assembler).
///
/// Every field has a default, so an empty TOML file is a valid config.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct AssemblerConfig {
    /// Smallest overlap a merge may use. Values below 1 are treated as 1.
    pub min_overlap: usize,
    /// Algorithm used for every pairwise overlap.
    pub overlap_method: OverlapMethod,
    /// Evaluate the pairwise scan on the rayon thread pool.
    pub parallel: bool,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            min_overlap: 1,
            overlap_method: OverlapMethod::default(),
            parallel: false,
        }
    }
}

impl AssemblerConfig {
    ///
    /// Load an assembler config from disk.
    ///
    /// # Arguments
    /// - path: Path to the config file (a .toml) file.
    pub fn try_from(path: &Path) -> Result<AssemblerConfig> {
        let toml_str = read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: AssemblerConfig = toml::from_str(&toml_str)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    pub fn new(min_overlap: usize, overlap_method: OverlapMethod, parallel: bool) -> AssemblerConfig {
        AssemblerConfig {
            min_overlap,
            overlap_method,
            parallel,
        }
    }

    /// The minimum overlap actually enforced.
    pub fn effective_min_overlap(&self) -> usize {
        self.min_overlap.max(1)
    }
}
