// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Plasma Profiles
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Default plasma profile and D-T reactivity.
//!
//! Profile and reactivity shapes from A. Bader et al 2021 Nucl. Fusion 61
//! 116060. Both are pluggable on the mesh builder; these are the stock
//! implementations.

use fusion_types::constants::M3TOCM3;

/// Peak ion temperature on the magnetic axis [keV].
const T_I_PEAK_KEV: f64 = 11.5;

/// Peak ion density on the magnetic axis [1/m^3].
const N_I_PEAK: f64 = 4.8e20;

/// D-T reactivity prefactor.
const DT_REACTIVITY_COEFF: f64 = 3.68e-18;

/// D-T Gamow penetration coefficient.
const DT_GAMOW_COEFF: f64 = 19.94;

/// Ion density [1/m^3] and temperature [keV] on the flux surface `s`.
///
/// Both profiles peak on the magnetic axis and vanish at the plasma edge.
pub fn default_plasma_conditions(s: f64) -> (f64, f64) {
    let t_i = T_I_PEAK_KEV * (1.0 - s);
    let n_i = N_I_PEAK * (1.0 - s.powi(5));
    (n_i, t_i)
}

/// D-T fusion reaction rate [1/cm^3/s] for an equal D/T mix.
///
/// Equates to the neutron source density. Zero density or temperature
/// (the plasma edge) yields exactly zero.
pub fn default_reaction_rate(n_i: f64, t_i: f64) -> f64 {
    if t_i == 0.0 || n_i == 0.0 {
        return 0.0;
    }
    let rr = DT_REACTIVITY_COEFF * n_i * n_i / 4.0
        * t_i.powf(-2.0 / 3.0)
        * (-DT_GAMOW_COEFF * t_i.powf(-1.0 / 3.0)).exp();
    rr / M3TOCM3
}
