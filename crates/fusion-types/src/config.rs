// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::M2CM;
use crate::error::FusionResult;
use crate::grid::FluxGrid;

/// Top-level source mesh configuration.
/// Maps 1:1 to the source mesh JSON schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMeshConfig {
    pub mesh_name: String,
    /// Closed flux surface labels defining the mesh, spanning [0, 1].
    pub cfs_grid: Vec<f64>,
    /// Poloidal angles defining the mesh [deg], spanning exactly 360.
    pub poloidal_grid: Vec<f64>,
    /// Toroidal angles defining the mesh [deg], spanning at most 360.
    pub toroidal_grid: Vec<f64>,
    /// Scaling factor between equilibrium length units and mesh output
    /// units (default: m to cm).
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Optional analytic equilibrium parameters. When absent, the caller
    /// supplies its own equilibrium mapping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equilibrium: Option<EquilibriumConfig>,
}

/// Analytic equilibrium parameters (optional in JSON config).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EquilibriumConfig {
    /// Major radius of the magnetic axis [m].
    pub major_radius_m: f64,
    /// Minor radius of the plasma edge [m].
    pub minor_radius_m: f64,
    /// Vertical elongation factor (default: circular cross-section).
    #[serde(default = "default_elongation")]
    pub elongation: f64,
}

fn default_scale() -> f64 {
    M2CM
}

fn default_elongation() -> f64 {
    1.0
}

impl SourceMeshConfig {
    /// Load from JSON file.
    pub fn from_file(path: &str) -> FusionResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Build the validated flux grid from this config's sequences.
    pub fn create_grid(&self) -> FusionResult<FluxGrid> {
        FluxGrid::new(
            self.cfs_grid.clone(),
            self.poloidal_grid.clone(),
            self.toroidal_grid.clone(),
        )
    }
}
