// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Mesh Assembly
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Source mesh assembly.
//!
//! Orchestrates vertex sampling, cell decomposition and per-element
//! quadrature into a finished `SourceMesh`. All output arrays are
//! pre-sized and written by deterministic sequence number.

use fusion_math::quadrature::integrate_tet;
use fusion_types::config::SourceMeshConfig;
use fusion_types::constants::M2CM;
use fusion_types::error::FusionResult;
use fusion_types::grid::FluxGrid;
use ndarray::{Array1, Array2};

use crate::cells::CellDecomposer;
use crate::equilibrium::FluxSurfaceMapping;
use crate::plasma::{default_plasma_conditions, default_reaction_rate};
use crate::vertices::{sample_vertices, VertexTable};

/// Finished volumetric source mesh.
///
/// `strengths` and `volumes` parallel `tets`, all indexed by tetrahedron
/// sequence number. `degenerate_count` is the number of elements whose
/// signed volume came out non-positive; they keep their unsigned volume
/// in `volumes` and are left to downstream validation.
#[derive(Debug, Clone)]
pub struct SourceMesh {
    /// Vertex Cartesian coordinates [n, 3] in output units.
    pub coords: Array2<f64>,
    /// Closed flux surface label of each vertex.
    pub cfs_labels: Array1<f64>,
    /// Tetrahedron connectivity, 4 vertex ids each.
    pub tets: Vec<[usize; 4]>,
    /// Integrated source strength per tetrahedron [1/s].
    pub strengths: Vec<f64>,
    /// Unsigned volume per tetrahedron.
    pub volumes: Vec<f64>,
    /// Number of tetrahedra with non-positive signed volume.
    pub degenerate_count: usize,
}

impl SourceMesh {
    pub fn num_vertices(&self) -> usize {
        self.coords.nrows()
    }

    pub fn num_tetrahedra(&self) -> usize {
        self.tets.len()
    }

    /// Total source strength over the mesh [1/s].
    pub fn total_strength(&self) -> f64 {
        self.strengths.iter().sum()
    }

    /// Total mesh volume.
    pub fn total_volume(&self) -> f64 {
        self.volumes.iter().sum()
    }
}

/// Plasma conditions on a flux surface: `s -> (n_i, T_i)`.
pub type PlasmaConditionsFn<'a> = Box<dyn Fn(f64) -> (f64, f64) + 'a>;

/// Reaction rate: `(n_i, T_i) -> source density`.
pub type ReactionRateFn<'a> = Box<dyn Fn(f64, f64) -> f64 + 'a>;

/// Builds a `SourceMesh` from an equilibrium mapping and a flux grid.
///
/// The plasma profile and reactivity are plain function values with stock
/// defaults; swap them through the `with_*` methods to mesh a different
/// source model.
pub struct SourceMeshBuilder<'a> {
    mapping: &'a dyn FluxSurfaceMapping,
    grid: FluxGrid,
    scale: f64,
    plasma_conditions: PlasmaConditionsFn<'a>,
    reaction_rate: ReactionRateFn<'a>,
}

impl<'a> SourceMeshBuilder<'a> {
    pub fn new(mapping: &'a dyn FluxSurfaceMapping, grid: FluxGrid) -> Self {
        SourceMeshBuilder {
            mapping,
            grid,
            scale: M2CM,
            plasma_conditions: Box::new(default_plasma_conditions),
            reaction_rate: Box::new(default_reaction_rate),
        }
    }

    /// Builder configured from a mesh config: validated grid plus scale.
    pub fn from_config(
        mapping: &'a dyn FluxSurfaceMapping,
        config: &SourceMeshConfig,
    ) -> FusionResult<Self> {
        let grid = config.create_grid()?;
        Ok(Self::new(mapping, grid).with_scale(config.scale))
    }

    /// Scaling factor between equilibrium units and output units.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_plasma_conditions(mut self, f: impl Fn(f64) -> (f64, f64) + 'a) -> Self {
        self.plasma_conditions = Box::new(f);
        self
    }

    pub fn with_reaction_rate(mut self, f: impl Fn(f64, f64) -> f64 + 'a) -> Self {
        self.reaction_rate = Box::new(f);
        self
    }

    pub fn grid(&self) -> &FluxGrid {
        &self.grid
    }

    /// Build the mesh: sample vertices, decompose every slab, then
    /// integrate the source density over each tetrahedron in sequence
    /// order.
    pub fn build(&self) -> FusionResult<SourceMesh> {
        let verts = sample_vertices(&self.grid, self.mapping, self.scale)?;

        let num_tets = self.grid.num_tetrahedra();
        let mut tets = vec![[0usize; 4]; num_tets];
        CellDecomposer::new(&self.grid).decompose(&mut tets);

        let mut strengths = vec![0.0; num_tets];
        let mut volumes = vec![0.0; num_tets];
        let mut degenerate_count = 0;

        for (seq, tet) in tets.iter().enumerate() {
            let mut positions = [[0.0; 3]; 4];
            let mut densities = [0.0; 4];
            for (corner, &vert_id) in tet.iter().enumerate() {
                positions[corner] = verts.position(vert_id);
                let (n_i, t_i) = (self.plasma_conditions)(verts.cfs_labels[vert_id]);
                densities[corner] = (self.reaction_rate)(n_i, t_i);
            }

            let (strength, signed_vol) = integrate_tet(&positions, &densities);
            strengths[seq] = strength;
            volumes[seq] = signed_vol.abs();
            if signed_vol <= 0.0 {
                degenerate_count += 1;
            }
        }

        let VertexTable { coords, cfs_labels } = verts;
        Ok(SourceMesh {
            coords,
            cfs_labels,
            tets,
            strengths,
            volumes,
            degenerate_count,
        })
    }
}
