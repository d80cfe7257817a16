// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Vertex Indexing
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Linear vertex identifiers for logical grid positions.

use fusion_types::grid::FluxGrid;

/// Maps a logical (flux surface, poloidal, toroidal) position to the
/// linear vertex id assigned by `vertices::sample_vertices`.
///
/// Index conventions match the storage layout: `s_idx` counts off-axis
/// flux surfaces from 0 (innermost); `theta_idx` 0 addresses the shared
/// magnetic axis vertex (only meaningful together with `s_idx` 0) and
/// ring positions count from 1; `phi_idx` counts toroidal planes. The
/// duplicate closing samples fold back onto their 0 deg twins:
/// `theta_idx == num_theta` wraps to ring position 1, and on a full
/// revolution the final plane wraps to plane 0.
#[derive(Debug, Clone, Copy)]
pub struct VertexIndexer {
    verts_per_ring: usize,
    verts_per_plane: usize,
    num_theta: usize,
    final_plane: usize,
    wraps: bool,
}

impl VertexIndexer {
    pub fn new(grid: &FluxGrid) -> Self {
        VertexIndexer {
            verts_per_ring: grid.verts_per_ring(),
            verts_per_plane: grid.verts_per_plane(),
            num_theta: grid.num_theta(),
            final_plane: grid.num_phi() - 1,
            wraps: grid.full_revolution(),
        }
    }

    /// Linear vertex id of a logical grid position.
    pub fn vertex_id(&self, s_idx: usize, theta_idx: usize, phi_idx: usize) -> usize {
        debug_assert!(
            theta_idx > 0 || s_idx == 0,
            "ring position 0 addresses the axis vertex"
        );

        let plane_offset = if self.wraps && phi_idx == self.final_plane {
            0
        } else {
            phi_idx * self.verts_per_plane
        };

        let s_offset = s_idx * self.verts_per_ring;

        let theta_offset = if theta_idx == self.num_theta {
            1
        } else {
            theta_idx
        };

        plane_offset + s_offset + theta_offset
    }
}
