// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Meters to centimeters. Equilibrium readers report coordinates in m;
/// mesh output is in cm.
pub const M2CM: f64 = 100.0;

/// Cubic meters to cubic centimeters.
pub const M3TOCM3: f64 = M2CM * M2CM * M2CM;

/// D-T fusion energy release (J) - 17.6 MeV
pub const E_FUSION_DT: f64 = 17.6 * 1.602e-13;
