// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Equilibrium Mapping
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Flux-coordinate equilibrium mappings.
//!
//! The mesh engine consumes any plasma equilibrium through
//! `FluxSurfaceMapping`, the same entry point VMEC-class equilibrium
//! readers expose. `AnalyticTorus` is a closed-form implementation with
//! concentric circular flux surfaces, used by tests, benchmarks and
//! standalone runs.

use fusion_types::config::EquilibriumConfig;
use fusion_types::error::{FusionError, FusionResult};

/// Mapping from flux coordinates to Cartesian space.
pub trait FluxSurfaceMapping {
    /// Map (s, theta, phi) to (x, y, z) in the equilibrium's native
    /// length units. `s` is the closed flux surface label in [0, 1];
    /// angles are in radians.
    fn flux_to_xyz(&self, s: f64, theta: f64, phi: f64) -> FusionResult<[f64; 3]>;
}

/// Toroidal equilibrium with concentric circular flux surfaces,
/// optionally elongated vertically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyticTorus {
    /// Major radius of the magnetic axis [m].
    pub major_radius_m: f64,
    /// Minor radius of the s = 1 surface [m].
    pub minor_radius_m: f64,
    /// Vertical elongation factor.
    pub elongation: f64,
}

impl AnalyticTorus {
    /// Circular-cross-section torus.
    pub fn new(major_radius_m: f64, minor_radius_m: f64) -> FusionResult<Self> {
        Self::elongated(major_radius_m, minor_radius_m, 1.0)
    }

    /// Elliptical-cross-section torus with vertical semi-axis
    /// `elongation x minor_radius_m`.
    pub fn elongated(
        major_radius_m: f64,
        minor_radius_m: f64,
        elongation: f64,
    ) -> FusionResult<Self> {
        if !major_radius_m.is_finite() || !minor_radius_m.is_finite() || !elongation.is_finite() {
            return Err(FusionError::ConfigError(
                "Analytic torus parameters must be finite".to_string(),
            ));
        }
        if minor_radius_m <= 0.0 || elongation <= 0.0 {
            return Err(FusionError::ConfigError(
                "Analytic torus requires minor_radius_m > 0 and elongation > 0".to_string(),
            ));
        }
        if major_radius_m <= minor_radius_m {
            return Err(FusionError::ConfigError(
                "Analytic torus requires major_radius_m > minor_radius_m".to_string(),
            ));
        }
        Ok(AnalyticTorus {
            major_radius_m,
            minor_radius_m,
            elongation,
        })
    }

    pub fn from_config(config: &EquilibriumConfig) -> FusionResult<Self> {
        Self::elongated(
            config.major_radius_m,
            config.minor_radius_m,
            config.elongation,
        )
    }

    /// Volume enclosed by the flux surface at label `s` over a toroidal
    /// extent of `toroidal_extent` radians [m^3]. Pappus: cross-section
    /// area times the toroidal path of its centroid.
    pub fn shell_volume(&self, s: f64, toroidal_extent: f64) -> f64 {
        let r = s * self.minor_radius_m;
        std::f64::consts::PI * r * r * self.elongation * self.major_radius_m * toroidal_extent
    }
}

impl FluxSurfaceMapping for AnalyticTorus {
    fn flux_to_xyz(&self, s: f64, theta: f64, phi: f64) -> FusionResult<[f64; 3]> {
        let r = s * self.minor_radius_m;
        let big_r = self.major_radius_m + r * theta.cos();
        Ok([
            big_r * phi.cos(),
            big_r * phi.sin(),
            self.elongation * r * theta.sin(),
        ])
    }
}
