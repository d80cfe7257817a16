// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Fusion Mesh
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Volumetric neutron source mesh generation.
//!
//! Builds a structured tetrahedral mesh over a toroidal plasma region
//! described in flux coordinates and tags every tetrahedron with its
//! integrated neutron source strength and volume.

pub mod assembler;
pub mod cells;
pub mod equilibrium;
pub mod export;
pub mod indexer;
pub mod plasma;
pub mod vertices;
