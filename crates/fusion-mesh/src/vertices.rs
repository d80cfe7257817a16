// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Vertex Sampling
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Vertex table generation.
//!
//! Walks the logical grid in storage order (toroidal plane outer, then
//! flux surface, then poloidal angle), evaluates the equilibrium mapping
//! once per distinct grid point and scales to output units. Exactly one
//! vertex per plane sits on the magnetic axis; the duplicate 360 deg
//! poloidal sample and, on a full revolution, the duplicate final plane
//! are never sampled.

use fusion_types::error::FusionResult;
use fusion_types::grid::FluxGrid;
use ndarray::{Array1, Array2};

use crate::equilibrium::FluxSurfaceMapping;

/// Mesh vertex table: Cartesian coordinates [n, 3] in output units plus
/// the closed flux surface label of each vertex.
#[derive(Debug, Clone)]
pub struct VertexTable {
    pub coords: Array2<f64>,
    pub cfs_labels: Array1<f64>,
}

impl VertexTable {
    pub fn num_vertices(&self) -> usize {
        self.coords.nrows()
    }

    /// Cartesian position of vertex `id`.
    pub fn position(&self, id: usize) -> [f64; 3] {
        [
            self.coords[[id, 0]],
            self.coords[[id, 1]],
            self.coords[[id, 2]],
        ]
    }
}

/// Sample every mesh vertex of `grid` through `mapping`, scaling
/// coordinates by `scale`. Mapping errors abort the whole table.
pub fn sample_vertices(
    grid: &FluxGrid,
    mapping: &dyn FluxSurfaceMapping,
    scale: f64,
) -> FusionResult<VertexTable> {
    let num_verts = grid.num_vertices();
    let mut coords = Array2::zeros((num_verts, 3));
    let mut cfs_labels = Array1::zeros(num_verts);

    let mut vert_idx = 0;
    for &phi in grid.plane_toroidal() {
        // the shared magnetic axis vertex of this plane
        let xyz = mapping.flux_to_xyz(0.0, 0.0, phi)?;
        for c in 0..3 {
            coords[[vert_idx, c]] = xyz[c] * scale;
        }
        cfs_labels[vert_idx] = 0.0;
        vert_idx += 1;

        for &s in grid.off_axis_cfs() {
            for &theta in grid.ring_poloidal() {
                let xyz = mapping.flux_to_xyz(s, theta, phi)?;
                for c in 0..3 {
                    coords[[vert_idx, c]] = xyz[c] * scale;
                }
                cfs_labels[vert_idx] = s;
                vert_idx += 1;
            }
        }
    }
    debug_assert_eq!(vert_idx, num_verts);

    Ok(VertexTable { coords, cfs_labels })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equilibrium::AnalyticTorus;
    use fusion_types::error::FusionError;

    fn small_grid() -> FluxGrid {
        FluxGrid::uniform(3, 5, 2, 10.0).unwrap()
    }

    #[test]
    fn test_table_shape() {
        let grid = small_grid();
        let torus = AnalyticTorus::new(6.2, 2.0).unwrap();
        let table = sample_vertices(&grid, &torus, 100.0).unwrap();
        assert_eq!(table.num_vertices(), grid.num_vertices());
        assert_eq!(table.coords.shape(), &[2 * 9, 3]);
        assert_eq!(table.cfs_labels.len(), 2 * 9);
    }

    #[test]
    fn test_axis_vertex_per_plane() {
        let grid = small_grid();
        let torus = AnalyticTorus::new(6.2, 2.0).unwrap();
        let table = sample_vertices(&grid, &torus, 100.0).unwrap();

        for plane in 0..2 {
            let axis = plane * grid.verts_per_plane();
            assert_eq!(table.cfs_labels[axis], 0.0);
            // axis sits on the major-radius circle, scaled m -> cm
            let pos = table.position(axis);
            let radius = (pos[0] * pos[0] + pos[1] * pos[1]).sqrt();
            assert!((radius - 620.0).abs() < 1e-9);
            assert!(pos[2].abs() < 1e-9);
        }
    }

    #[test]
    fn test_labels_follow_storage_order() {
        let grid = small_grid();
        let torus = AnalyticTorus::new(6.2, 2.0).unwrap();
        let table = sample_vertices(&grid, &torus, 100.0).unwrap();

        // per plane: axis, then 4 vertices at s=0.5, then 4 at s=1.0
        let expected = [0.0, 0.5, 0.5, 0.5, 0.5, 1.0, 1.0, 1.0, 1.0];
        for plane in 0..2 {
            for (k, &s) in expected.iter().enumerate() {
                assert_eq!(table.cfs_labels[plane * 9 + k], s);
            }
        }
    }

    #[test]
    fn test_scale_applied_after_mapping() {
        let grid = small_grid();
        let torus = AnalyticTorus::new(6.2, 2.0).unwrap();
        let cm = sample_vertices(&grid, &torus, 100.0).unwrap();
        let m = sample_vertices(&grid, &torus, 1.0).unwrap();
        for (a, b) in cm.coords.iter().zip(m.coords.iter()) {
            assert!((a - 100.0 * b).abs() < 1e-9);
        }
    }

    struct FailingMapping;

    impl FluxSurfaceMapping for FailingMapping {
        fn flux_to_xyz(&self, s: f64, theta: f64, phi: f64) -> FusionResult<[f64; 3]> {
            if s > 0.5 {
                return Err(FusionError::FluxMapping {
                    s,
                    theta,
                    phi,
                    message: "surface outside equilibrium domain".to_string(),
                });
            }
            Ok([s, theta, phi])
        }
    }

    #[test]
    fn test_mapping_error_propagates() {
        let grid = small_grid();
        let result = sample_vertices(&grid, &FailingMapping, 100.0);
        assert!(matches!(result, Err(FusionError::FluxMapping { .. })));
    }
}
