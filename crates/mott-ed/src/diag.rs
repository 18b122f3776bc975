//! Dense eigendecomposition for small Hamiltonians.
//!
//! Uses nalgebra's `SymmetricEigen`. This is the reference path for tests
//! and small systems; the solve boundary always goes through the sparse
//! Lanczos solver, which is cross-checked against this module.

use nalgebra::{DMatrix, DVector};

/// Eigenvalues and eigenstates from diagonalization.
#[derive(Debug, Clone)]
pub struct Spectrum {
    /// Eigenvalues in ascending order.
    pub energies: Vec<f64>,
    /// Corresponding normalized eigenstates.
    pub states: Vec<DVector<f64>>,
}

impl Spectrum {
    /// Ground state energy.
    pub fn ground_energy(&self) -> f64 {
        self.energies[0]
    }

    /// Ground state vector.
    pub fn ground_state(&self) -> &DVector<f64> {
        &self.states[0]
    }
}

/// Diagonalize a real symmetric matrix.
///
/// If `n_lowest` is `Some(n)`, only the `n` lowest eigenpairs are returned
/// (still computed via full diagonalization).
pub fn diagonalize(h: &DMatrix<f64>, n_lowest: Option<usize>) -> Spectrum {
    let eig = h.clone().symmetric_eigen();

    let mut indexed: Vec<(usize, f64)> =
        eig.eigenvalues.iter().enumerate().map(|(i, &e)| (i, e)).collect();
    indexed.sort_by(|a, b| a.1.total_cmp(&b.1));

    let n = match n_lowest {
        Some(n) => n.min(indexed.len()),
        None => indexed.len(),
    };

    let energies: Vec<f64> = indexed[..n].iter().map(|&(_, e)| e).collect();
    let states: Vec<DVector<f64>> = indexed[..n]
        .iter()
        .map(|&(i, _)| eig.eigenvectors.column(i).into_owned())
        .collect();

    Spectrum { energies, states }
}
