// ─────────────────────────────────────────────────────────────────────
// Probe Particle Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PIVOT_THRESHOLD;
use crate::error::{ProbeError, ProbeResult};

/// Top-level scan configuration.
///
/// `cell` holds the three lattice vectors as rows, `grid_points` the
/// number of voxels along each of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    pub scan_name: String,
    pub cell: [[f64; 3]; 3],
    pub grid_points: [usize; 3],
    #[serde(default)]
    pub solver: SolverConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Squared-magnitude pivot cutoff for the elimination kernel.
    #[serde(default = "default_pivot_threshold")]
    pub pivot_threshold: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            pivot_threshold: DEFAULT_PIVOT_THRESHOLD,
        }
    }
}

fn default_pivot_threshold() -> f64 {
    DEFAULT_PIVOT_THRESHOLD
}

impl ScanConfig {
    /// Load and validate a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> ProbeResult<ScanConfig> {
        let text = std::fs::read_to_string(path)?;
        let config: ScanConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ProbeResult<()> {
        if self.grid_points.iter().any(|&n| n == 0) {
            return Err(ProbeError::ConfigError(
                "grid_points must all be nonzero".to_string(),
            ));
        }
        if !(self.solver.pivot_threshold > 0.0) {
            return Err(ProbeError::ConfigError(
                "pivot_threshold must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
