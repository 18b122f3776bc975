//! Ground-state observables: site-resolved density and number fluctuations.

use crate::fock::FockSpace;
use nalgebra::DVector;

/// Site-resolved density ⟨n_i⟩ = Σ_s |ψ_s|² n_i(s).
///
/// The model is grand canonical (no particle-number sector is fixed), so
/// Σ_i ⟨n_i⟩ is the mean total boson number, not an integer invariant.
pub fn density(fock: &FockSpace, state: &DVector<f64>) -> Vec<f64> {
    let mut result = vec![0.0; fock.n_site];

    for (s, config) in fock.basis.iter().enumerate() {
        let prob = state[s] * state[s];
        for (i, &n) in config.iter().enumerate() {
            result[i] += prob * n as f64;
        }
    }

    result
}

/// Per-site number fluctuation ⟨n_i²⟩ − ⟨n_i⟩².
///
/// Vanishes deep in the Mott phase and grows with hopping; the standard
/// companion diagnostic to the density profile.
pub fn density_fluctuation(fock: &FockSpace, state: &DVector<f64>) -> Vec<f64> {
    let mean = density(fock, state);
    let mut second = vec![0.0; fock.n_site];

    for (s, config) in fock.basis.iter().enumerate() {
        let prob = state[s] * state[s];
        for (i, &n) in config.iter().enumerate() {
            second[i] += prob * (n as f64) * (n as f64);
        }
    }

    second.iter().zip(mean.iter()).map(|(s2, m)| s2 - m * m).collect()
}
