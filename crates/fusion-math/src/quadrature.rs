// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Quadrature
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Fixed-weight quadrature over tetrahedra.
//!
//! Five-node Gaussian rule in barycentric coordinates: the centroid plus
//! four vertex-biased points, exact for polynomials of the barycentric
//! coordinates through degree 3. That headroom matters for source fields
//! that vary steeply between flux surfaces while being sampled only at
//! the element vertices.

use crate::linalg::det_3x3;

/// Barycentric coordinates of the five integration points.
pub const TET5_BARY: [[f64; 4]; 5] = [
    [0.25, 0.25, 0.25, 0.25],
    [0.5, 1.0 / 6.0, 1.0 / 6.0, 1.0 / 6.0],
    [1.0 / 6.0, 0.5, 1.0 / 6.0, 1.0 / 6.0],
    [1.0 / 6.0, 1.0 / 6.0, 0.5, 1.0 / 6.0],
    [1.0 / 6.0, 1.0 / 6.0, 1.0 / 6.0, 0.5],
];

/// Weights of the five integration points. Sum to 1.
pub const TET5_WEIGHTS: [f64; 5] = [-0.8, 0.45, 0.45, 0.45, 0.45];

/// Signed volume of a tetrahedron from its four vertex positions.
///
/// One sixth of the determinant of the edge vectors about vertex 3,
/// negated so that the canonical element orderings used by the mesh
/// decomposition come out positive. A non-positive value flags an
/// inverted or collapsed element.
pub fn tet_signed_volume(verts: &[[f64; 3]; 4]) -> f64 {
    let mut edges = [[0.0; 3]; 3];
    for (edge, vert) in edges.iter_mut().zip(verts) {
        for c in 0..3 {
            edge[c] = vert[c] - verts[3][c];
        }
    }
    -det_3x3(&edges) / 6.0
}

/// Integrate a vertex-sampled scalar field over a tetrahedron.
///
/// `values` holds one field sample per vertex; the field is interpolated
/// barycentrically at each integration point. Returns the integral and
/// the signed volume. The integral uses the unsigned volume, so a flipped
/// element still integrates a non-negative field to a non-negative value.
pub fn integrate_tet(verts: &[[f64; 3]; 4], values: &[f64; 4]) -> (f64, f64) {
    let signed_vol = tet_signed_volume(verts);

    let mut acc = 0.0;
    for (bary, w) in TET5_BARY.iter().zip(TET5_WEIGHTS) {
        let interp: f64 = bary.iter().zip(values).map(|(b, f)| b * f).sum();
        acc += w * interp;
    }

    (signed_vol.abs() * acc, signed_vol)
}
