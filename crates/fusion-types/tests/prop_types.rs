// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Property-Based Tests (proptest) for fusion-types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for fusion-types using proptest.
//!
//! Covers: FluxGrid construction invariants, derived count consistency,
//! linspace endpoint behaviour.

use fusion_types::grid::{linspace, FluxGrid};
use proptest::prelude::*;

// ── FluxGrid Construction Invariants ─────────────────────────────────

proptest! {
    /// Uniform grids over any partial toroidal extent validate and report
    /// the requested sample counts.
    #[test]
    fn uniform_grid_counts_match(
        num_s in 2usize..16,
        num_theta in 3usize..64,
        num_phi in 2usize..32,
        extent in 1.0f64..359.0,
    ) {
        let grid = FluxGrid::uniform(num_s, num_theta, num_phi, extent).unwrap();

        prop_assert_eq!(grid.num_s(), num_s);
        prop_assert_eq!(grid.num_theta(), num_theta);
        prop_assert_eq!(grid.num_phi(), num_phi);
        prop_assert!(!grid.full_revolution());
        prop_assert_eq!(grid.num_planes(), num_phi);
    }

    /// Vertex count formula: planes x ((num_s - 1) x (num_theta - 1) + 1).
    #[test]
    fn vertex_count_formula(
        num_s in 2usize..12,
        num_theta in 3usize..48,
        num_phi in 2usize..24,
    ) {
        let grid = FluxGrid::uniform(num_s, num_theta, num_phi, 30.0).unwrap();

        let expected = num_phi * ((num_s - 1) * (num_theta - 1) + 1);
        prop_assert_eq!(grid.num_vertices(), expected);
    }

    /// Tetrahedron count formula: per slab, 3 per wedge and 5 per
    /// hexahedron cell.
    #[test]
    fn tetrahedron_count_formula(
        num_s in 2usize..12,
        num_theta in 3usize..48,
        num_phi in 2usize..24,
    ) {
        let grid = FluxGrid::uniform(num_s, num_theta, num_phi, 30.0).unwrap();

        let ring = num_theta - 1;
        let slabs = num_phi - 1;
        let expected = 3 * ring * slabs + 5 * (num_s - 2) * ring * slabs;
        prop_assert_eq!(grid.num_tetrahedra(), expected);
    }

    /// A full revolution stores one plane fewer than it has toroidal
    /// samples, but keeps the same slab count.
    #[test]
    fn full_revolution_plane_counts(
        num_s in 2usize..10,
        num_theta in 3usize..32,
        num_phi in 3usize..32,
    ) {
        let grid = FluxGrid::uniform(num_s, num_theta, num_phi, 360.0).unwrap();

        prop_assert!(grid.full_revolution());
        prop_assert_eq!(grid.num_planes(), num_phi - 1);
        prop_assert_eq!(grid.num_slabs(), num_phi - 1);
        prop_assert_eq!(grid.num_vertices(), (num_phi - 1) * grid.verts_per_plane());
    }

    /// Stored angle sequences drop exactly the duplicate closing samples.
    #[test]
    fn stored_sequences_drop_duplicates(
        num_s in 2usize..10,
        num_theta in 3usize..32,
        num_phi in 2usize..16,
    ) {
        let grid = FluxGrid::uniform(num_s, num_theta, num_phi, 20.0).unwrap();

        prop_assert_eq!(grid.ring_poloidal().len(), num_theta - 1);
        prop_assert_eq!(grid.plane_toroidal().len(), num_phi);
        prop_assert_eq!(grid.off_axis_cfs().len(), num_s - 1);
    }
}

// ── linspace ─────────────────────────────────────────────────────────

proptest! {
    /// Endpoints are exact regardless of sample count.
    #[test]
    fn linspace_endpoints_exact(
        num in 2usize..256,
        stop in 0.5f64..400.0,
    ) {
        let v = linspace(0.0, stop, num);
        prop_assert_eq!(v.len(), num);
        prop_assert_eq!(v[0], 0.0);
        prop_assert_eq!(v[num - 1], stop);
    }

    /// Samples are strictly increasing.
    #[test]
    fn linspace_strictly_increasing(num in 2usize..128) {
        let v = linspace(0.0, 360.0, num);
        for i in 1..num {
            prop_assert!(v[i] > v[i - 1]);
        }
    }
}
