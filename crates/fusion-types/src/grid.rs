// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Flux Grid
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Validated flux-space grid specification.
//!
//! The source mesh is defined on a structured grid in the plasma
//! coordinates (s, theta, phi). The poloidal sequence closes on itself at
//! 360 deg and the toroidal sequence may close at 360 deg; the duplicate
//! closing samples are dropped from vertex storage, so every structural
//! count (vertices per ring/plane, plane, slab, vertex and tetrahedron
//! totals) is derived here and nowhere else.

use crate::error::{FusionError, FusionResult};

/// Structured grid in flux coordinates (s, theta, phi).
///
/// Angle sequences are supplied in degrees and held in radians. Invariants
/// enforced at construction:
/// - flux surface labels start at exactly 0 and end at exactly 1,
/// - the poloidal sequence spans exactly 360 deg,
/// - the toroidal sequence spans at most 360 deg,
/// - every sequence is strictly increasing with at least two samples.
#[derive(Debug, Clone, PartialEq)]
pub struct FluxGrid {
    cfs: Vec<f64>,
    poloidal: Vec<f64>,
    toroidal: Vec<f64>,
    full_revolution: bool,
}

impl FluxGrid {
    /// Validate the three coordinate sequences and build the grid. Span
    /// checks run on the degree values as supplied, so the full-revolution
    /// test is exact rather than a comparison against 2*pi.
    pub fn new(
        cfs: Vec<f64>,
        poloidal_deg: Vec<f64>,
        toroidal_deg: Vec<f64>,
    ) -> FusionResult<Self> {
        check_increasing("cfs_grid", &cfs)?;
        check_increasing("poloidal_grid", &poloidal_deg)?;
        check_increasing("toroidal_grid", &toroidal_deg)?;

        if cfs[0] != 0.0 || cfs[cfs.len() - 1] != 1.0 {
            return Err(FusionError::ConfigError(
                "CFS grid values must span the range [0, 1]".to_string(),
            ));
        }

        let poloidal_span = poloidal_deg[poloidal_deg.len() - 1] - poloidal_deg[0];
        if poloidal_span != 360.0 {
            return Err(FusionError::ConfigError(
                "Poloidal extent spanned by poloidal_grid must be exactly 360 degrees".to_string(),
            ));
        }

        let toroidal_span = toroidal_deg[toroidal_deg.len() - 1] - toroidal_deg[0];
        if toroidal_span > 360.0 {
            return Err(FusionError::ConfigError(
                "Toroidal extent spanned by toroidal_grid cannot exceed 360 degrees".to_string(),
            ));
        }
        let full_revolution = toroidal_span == 360.0;

        Ok(FluxGrid {
            cfs,
            poloidal: poloidal_deg.iter().map(|a| a.to_radians()).collect(),
            toroidal: toroidal_deg.iter().map(|a| a.to_radians()).collect(),
            full_revolution,
        })
    }

    /// Uniformly spaced grid: `num_s` surfaces over [0, 1], `num_theta`
    /// poloidal samples over 360 deg, `num_phi` toroidal samples over
    /// `toroidal_extent_deg`.
    pub fn uniform(
        num_s: usize,
        num_theta: usize,
        num_phi: usize,
        toroidal_extent_deg: f64,
    ) -> FusionResult<Self> {
        Self::new(
            linspace(0.0, 1.0, num_s),
            linspace(0.0, 360.0, num_theta),
            linspace(0.0, toroidal_extent_deg, num_phi),
        )
    }

    /// Number of flux surfaces, including the magnetic axis.
    pub fn num_s(&self) -> usize {
        self.cfs.len()
    }

    /// Number of poloidal samples, including the duplicate 360 deg entry.
    pub fn num_theta(&self) -> usize {
        self.poloidal.len()
    }

    /// Number of toroidal samples, including the duplicate closing entry
    /// on a full revolution.
    pub fn num_phi(&self) -> usize {
        self.toroidal.len()
    }

    /// Whether the toroidal extent closes on itself at 360 deg.
    pub fn full_revolution(&self) -> bool {
        self.full_revolution
    }

    /// Vertices per non-axis poloidal ring.
    pub fn verts_per_ring(&self) -> usize {
        self.num_theta() - 1
    }

    /// Vertices per toroidal plane, including the shared axis vertex.
    pub fn verts_per_plane(&self) -> usize {
        (self.num_s() - 1) * self.verts_per_ring() + 1
    }

    /// Number of distinct toroidal planes held in the vertex table.
    pub fn num_planes(&self) -> usize {
        if self.full_revolution {
            self.num_phi() - 1
        } else {
            self.num_phi()
        }
    }

    /// Number of toroidal slabs tiled with cells. On a full revolution the
    /// final slab connects the last stored plane back to plane 0.
    pub fn num_slabs(&self) -> usize {
        self.num_phi() - 1
    }

    /// Total vertex count.
    pub fn num_vertices(&self) -> usize {
        self.num_planes() * self.verts_per_plane()
    }

    /// Tetrahedra per toroidal slab: 3 per wedge cell plus 5 per
    /// hexahedron cell.
    pub fn tets_per_slab(&self) -> usize {
        let ring = self.verts_per_ring();
        3 * ring + 5 * (self.num_s() - 2) * ring
    }

    /// Total tetrahedron count.
    pub fn num_tetrahedra(&self) -> usize {
        self.num_slabs() * self.tets_per_slab()
    }

    /// All flux surface labels, axis first.
    pub fn cfs(&self) -> &[f64] {
        &self.cfs
    }

    /// Flux labels of the off-axis surfaces, innermost first.
    pub fn off_axis_cfs(&self) -> &[f64] {
        &self.cfs[1..]
    }

    /// Poloidal ring angles [rad], duplicate 360 deg entry dropped.
    pub fn ring_poloidal(&self) -> &[f64] {
        &self.poloidal[..self.verts_per_ring()]
    }

    /// Stored toroidal plane angles [rad].
    pub fn plane_toroidal(&self) -> &[f64] {
        &self.toroidal[..self.num_planes()]
    }

    /// Toroidal extent [rad].
    pub fn toroidal_extent(&self) -> f64 {
        self.toroidal[self.toroidal.len() - 1] - self.toroidal[0]
    }
}

fn check_increasing(name: &str, values: &[f64]) -> FusionResult<()> {
    if values.len() < 2 {
        return Err(FusionError::ConfigError(format!(
            "{name} requires at least two samples"
        )));
    }
    for pair in values.windows(2) {
        if !(pair[1] > pair[0]) {
            return Err(FusionError::ConfigError(format!(
                "{name} must be strictly increasing"
            )));
        }
    }
    Ok(())
}

/// `num` evenly spaced samples over [`start`, `stop`], endpoints included.
/// The final sample is pinned to `stop` so span invariants hold exactly.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    if num < 2 {
        return vec![start; num];
    }
    let step = (stop - start) / (num - 1) as f64;
    let mut out: Vec<f64> = (0..num).map(|i| start + step * i as f64).collect();
    out[num - 1] = stop;
    out
}
