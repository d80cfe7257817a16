// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Cell Decomposition
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Structured cell decomposition into tetrahedra.
//!
//! Each toroidal slab is tiled with wedge cells around the magnetic axis
//! and hexahedron cells outward of the innermost flux surface. Wedges
//! split into 3 tetrahedra, hexahedra into 5. Every tetrahedron uses a
//! canonical vertex ordering: the three face vertices wind clockwise
//! about the remaining vertex, which is listed last.
//!
//! Two mirror-image splitting tables exist per cell type, and the table
//! alternates from one cell to the next within a slab. Neighbouring cells
//! share a non-planar quad face, which each side covers with two
//! triangles; alternating the tables makes both sides cut along the same
//! diagonal. A single fixed table would pick mismatched diagonals and
//! leave slivers of the slab uncovered or double-covered.

use fusion_types::grid::FluxGrid;

use crate::indexer::VertexIndexer;

/// Tetrahedra produced per wedge cell.
pub const TETS_PER_WEDGE: usize = 3;

/// Tetrahedra produced per hexahedron cell.
pub const TETS_PER_HEX: usize = 5;

// Mirror-image splitting tables over the 6 wedge corners.
const WEDGE_SPLIT: [[usize; 4]; TETS_PER_WEDGE] = [
    [0, 2, 1, 3],
    [1, 3, 5, 4],
    [1, 3, 2, 5],
];
const WEDGE_SPLIT_MIRROR: [[usize; 4]; TETS_PER_WEDGE] = [
    [0, 2, 1, 3],
    [3, 2, 4, 5],
    [3, 2, 1, 4],
];

// Mirror-image splitting tables over the 8 hexahedron corners.
const HEX_SPLIT: [[usize; 4]; TETS_PER_HEX] = [
    [0, 2, 1, 5],
    [0, 3, 2, 7],
    [0, 7, 5, 4],
    [7, 2, 5, 6],
    [0, 2, 5, 7],
];
const HEX_SPLIT_MIRROR: [[usize; 4]; TETS_PER_HEX] = [
    [0, 3, 1, 4],
    [1, 3, 2, 6],
    [1, 4, 6, 5],
    [3, 6, 4, 7],
    [1, 3, 6, 4],
];

/// Decomposes the structured cells of a flux grid into tetrahedra.
pub struct CellDecomposer<'a> {
    grid: &'a FluxGrid,
    indexer: VertexIndexer,
}

impl<'a> CellDecomposer<'a> {
    pub fn new(grid: &'a FluxGrid) -> Self {
        CellDecomposer {
            grid,
            indexer: VertexIndexer::new(grid),
        }
    }

    /// Corner ids of the wedge at ring position `theta_idx` in slab
    /// `phi_idx`: the axis vertex and two poloidally adjacent
    /// innermost-ring vertices, on both bounding planes.
    fn wedge_corners(&self, theta_idx: usize, phi_idx: usize) -> [usize; 6] {
        let id = |theta, phi| self.indexer.vertex_id(0, theta, phi);
        [
            id(0, phi_idx),
            id(theta_idx, phi_idx),
            id(theta_idx + 1, phi_idx),
            id(0, phi_idx + 1),
            id(theta_idx, phi_idx + 1),
            id(theta_idx + 1, phi_idx + 1),
        ]
    }

    /// Corner ids of the hexahedron between off-axis surfaces `s_idx` and
    /// `s_idx + 1` at ring position `theta_idx` in slab `phi_idx`. Corner
    /// order: lower plane counter-clockwise in the (s, theta) cross
    /// section, then the upper plane.
    fn hex_corners(&self, s_idx: usize, theta_idx: usize, phi_idx: usize) -> [usize; 8] {
        let id = |s, theta, phi| self.indexer.vertex_id(s, theta, phi);
        [
            id(s_idx, theta_idx, phi_idx),
            id(s_idx + 1, theta_idx, phi_idx),
            id(s_idx + 1, theta_idx + 1, phi_idx),
            id(s_idx, theta_idx + 1, phi_idx),
            id(s_idx, theta_idx, phi_idx + 1),
            id(s_idx + 1, theta_idx, phi_idx + 1),
            id(s_idx + 1, theta_idx + 1, phi_idx + 1),
            id(s_idx, theta_idx + 1, phi_idx + 1),
        ]
    }

    /// The 3 tetrahedra of a wedge cell.
    pub fn wedge_tets(
        &self,
        theta_idx: usize,
        phi_idx: usize,
        mirrored: bool,
    ) -> [[usize; 4]; TETS_PER_WEDGE] {
        let corners = self.wedge_corners(theta_idx, phi_idx);
        let table = if mirrored {
            &WEDGE_SPLIT_MIRROR
        } else {
            &WEDGE_SPLIT
        };
        table.map(|tet| tet.map(|c| corners[c]))
    }

    /// The 5 tetrahedra of a hexahedron cell.
    pub fn hex_tets(
        &self,
        s_idx: usize,
        theta_idx: usize,
        phi_idx: usize,
        mirrored: bool,
    ) -> [[usize; 4]; TETS_PER_HEX] {
        let corners = self.hex_corners(s_idx, theta_idx, phi_idx);
        let table = if mirrored {
            &HEX_SPLIT_MIRROR
        } else {
            &HEX_SPLIT
        };
        table.map(|tet| tet.map(|c| corners[c]))
    }

    /// Fill `tets` with the full decomposition, addressed by tetrahedron
    /// sequence number; `tets` must be pre-sized to
    /// `grid.num_tetrahedra()`.
    ///
    /// Within a slab, wedges come first, then hexahedra surface by
    /// surface outward. The mirror table serves every odd cell ordinal,
    /// restarting at each slab, so each slab starts from the same table
    /// regardless of the ring size's parity.
    pub fn decompose(&self, tets: &mut [[usize; 4]]) {
        assert_eq!(tets.len(), self.grid.num_tetrahedra());

        let ring = self.grid.verts_per_ring();
        let num_s = self.grid.num_s();
        let tets_per_slab = self.grid.tets_per_slab();

        for phi_idx in 0..self.grid.num_slabs() {
            let slab_base = phi_idx * tets_per_slab;

            for theta_idx in 1..=ring {
                let ordinal = theta_idx - 1;
                let base = slab_base + ordinal * TETS_PER_WEDGE;
                let cell = self.wedge_tets(theta_idx, phi_idx, ordinal % 2 == 1);
                tets[base..base + TETS_PER_WEDGE].copy_from_slice(&cell);
            }

            let hex_base = slab_base + ring * TETS_PER_WEDGE;
            for s_idx in 0..num_s - 2 {
                for theta_idx in 1..=ring {
                    let cell_pos = s_idx * ring + (theta_idx - 1);
                    let ordinal = ring + cell_pos;
                    let base = hex_base + cell_pos * TETS_PER_HEX;
                    let cell = self.hex_tets(s_idx, theta_idx, phi_idx, ordinal % 2 == 1);
                    tets[base..base + TETS_PER_HEX].copy_from_slice(&cell);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decompose_all(grid: &FluxGrid) -> Vec<[usize; 4]> {
        let mut tets = vec![[0usize; 4]; grid.num_tetrahedra()];
        CellDecomposer::new(grid).decompose(&mut tets);
        tets
    }

    #[test]
    fn test_wedge_references_shared_axis_vertex() {
        let grid = FluxGrid::uniform(3, 5, 2, 10.0).unwrap();
        let decomposer = CellDecomposer::new(&grid);

        // every wedge touches the axis vertices of both bounding planes
        for theta_idx in 1..=4 {
            let corners: Vec<usize> = decomposer
                .wedge_tets(theta_idx, 0, false)
                .iter()
                .flatten()
                .copied()
                .collect();
            assert!(corners.contains(&0));
            assert!(corners.contains(&grid.verts_per_plane()));
        }
    }

    #[test]
    fn test_mirror_tables_cover_same_corners() {
        let grid = FluxGrid::uniform(4, 6, 2, 10.0).unwrap();
        let decomposer = CellDecomposer::new(&grid);

        let mut plain: Vec<usize> = decomposer
            .hex_tets(0, 1, 0, false)
            .iter()
            .flatten()
            .copied()
            .collect();
        let mut mirrored: Vec<usize> = decomposer
            .hex_tets(0, 1, 0, true)
            .iter()
            .flatten()
            .copied()
            .collect();
        plain.sort_unstable();
        plain.dedup();
        mirrored.sort_unstable();
        mirrored.dedup();
        assert_eq!(plain, mirrored);
        assert_eq!(plain.len(), 8);
    }

    #[test]
    fn test_all_vertex_ids_in_range() {
        for extent in [15.0, 360.0] {
            let grid = FluxGrid::uniform(4, 9, 5, extent).unwrap();
            let tets = decompose_all(&grid);
            assert_eq!(tets.len(), grid.num_tetrahedra());
            for tet in &tets {
                for &id in tet {
                    assert!(id < grid.num_vertices());
                }
            }
        }
    }

    #[test]
    fn test_tets_have_distinct_vertices() {
        let grid = FluxGrid::uniform(4, 9, 3, 20.0).unwrap();
        for (seq, tet) in decompose_all(&grid).iter().enumerate() {
            let mut ids = *tet;
            ids.sort_unstable();
            for pair in ids.windows(2) {
                assert_ne!(pair[0], pair[1], "repeated vertex in tetrahedron {seq}");
            }
        }
    }

    #[test]
    fn test_final_slab_wraps_onto_first_plane() {
        let grid = FluxGrid::uniform(3, 5, 3, 360.0).unwrap();
        let tets = decompose_all(&grid);

        // the last slab's tetrahedra must reference plane-0 vertices
        let last_slab = &tets[tets.len() - grid.tets_per_slab()..];
        let plane = grid.verts_per_plane();
        assert!(last_slab
            .iter()
            .flatten()
            .any(|&id| id < plane));
        // and never any vertex beyond the stored planes
        assert!(tets.iter().flatten().all(|&id| id < grid.num_vertices()));
    }

    #[test]
    fn test_neighbouring_wedges_share_two_ring_vertices() {
        let grid = FluxGrid::uniform(3, 7, 2, 10.0).unwrap();
        let decomposer = CellDecomposer::new(&grid);

        let a: Vec<usize> = decomposer
            .wedge_tets(1, 0, false)
            .iter()
            .flatten()
            .copied()
            .collect();
        let b: Vec<usize> = decomposer
            .wedge_tets(2, 0, true)
            .iter()
            .flatten()
            .copied()
            .collect();
        // shared face: ring position 2 on both planes (plus the axis edge)
        let shared = grid.verts_per_plane();
        assert!(a.contains(&2) && b.contains(&2));
        assert!(a.contains(&(shared + 2)) && b.contains(&(shared + 2)));
    }
}
