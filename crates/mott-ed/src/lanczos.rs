//! Lanczos eigensolver for the sparse Hamiltonian.
//!
//! Finds the lowest eigenpair(s) of a real symmetric matrix with the Lanczos
//! algorithm and full reorthogonalization. The Hamiltonian enters only
//! through its matvec, so the solve path never densifies it; the only dense
//! object is the m×m Krylov tridiagonal subproblem.
//!
//! The start vector is deterministic (golden-ratio stride) so repeated
//! solves of the same parameters are bit-reproducible.

use crate::csr::CsrMatrix;
use crate::diag::Spectrum;
use crate::error::{EdError, Result};
use nalgebra::{DMatrix, DVector};

/// Residual norms below this mean the Krylov space is invariant and the
/// decomposition is exact.
const BREAKDOWN_TOL: f64 = 1e-14;

/// Lanczos with full reorthogonalization.
///
/// # Arguments
/// * `matvec` — computes H|v⟩
/// * `dim` — matrix dimension
/// * `n_eigenvalues` — number of lowest eigenpairs wanted (must be < dim)
/// * `max_iter` — Krylov subspace cap
/// * `tol` — convergence tolerance on eigenvalue change
///
/// Converges when the tracked eigenvalues stop moving, the Krylov space
/// becomes invariant, or the full dimension is exhausted (exact in that
/// case). Hitting `max_iter` below the full dimension without meeting the
/// tolerance is a [`EdError::Diagonalization`].
pub fn lanczos<F>(
    matvec: F,
    dim: usize,
    n_eigenvalues: usize,
    max_iter: usize,
    tol: f64,
) -> Result<Spectrum>
where
    F: Fn(&DVector<f64>) -> DVector<f64>,
{
    if n_eigenvalues >= dim {
        return Err(EdError::InsufficientBasis { dim });
    }

    let m = max_iter.min(dim);
    let k = n_eigenvalues;

    // Lanczos vectors, kept for reorthogonalization and eigenvector recovery.
    let mut q_vecs: Vec<DVector<f64>> = Vec::with_capacity(m + 1);

    // Tridiagonal elements.
    let mut alpha: Vec<f64> = Vec::with_capacity(m);
    let mut beta: Vec<f64> = Vec::with_capacity(m);

    // Deterministic start vector with nonzero weight on every basis state.
    let mut q = DVector::zeros(dim);
    for i in 0..dim {
        q[i] = ((i as f64 + 1.0) * 0.618033988749895).fract() - 0.5;
    }
    let norm = q.norm();
    q *= 1.0 / norm;
    q_vecs.push(q);

    let mut prev_eigenvalues = vec![f64::MAX; k];
    let mut last_change = f64::MAX;

    for j in 0..m {
        // w = H q_j
        let mut w = matvec(&q_vecs[j]);

        // α_j = q_j · w
        let a = q_vecs[j].dot(&w);
        alpha.push(a);

        // w = w − α_j q_j − β_{j−1} q_{j−1}
        w -= &(&q_vecs[j] * a);
        if j > 0 {
            w -= &(&q_vecs[j - 1] * beta[j - 1]);
        }

        // Full reorthogonalization against all stored vectors.
        for qi in &q_vecs {
            let overlap = qi.dot(&w);
            w -= &(qi * overlap);
        }

        let b = w.norm();

        // Periodic convergence check on the tracked eigenvalues.
        if (j + 1) % 10 == 0 || j == m - 1 || b < BREAKDOWN_TOL {
            let ritz = tridiag_eigenvalues(&alpha, &beta, k);
            last_change = ritz
                .iter()
                .zip(prev_eigenvalues.iter())
                .map(|(x, y)| (x - y).abs())
                .fold(0.0f64, f64::max);

            if last_change < tol {
                eprintln!(
                    "  lanczos: converged at iteration {} (change={:.2e})",
                    j + 1,
                    last_change
                );
                return Ok(recover_eigenvectors(&alpha, &beta, &q_vecs, k));
            }
            prev_eigenvalues = ritz;
        }

        if b < BREAKDOWN_TOL {
            // Invariant subspace: the decomposition is exact.
            eprintln!("  lanczos: invariant subspace at iteration {}", j + 1);
            return Ok(recover_eigenvectors(&alpha, &beta, &q_vecs, k));
        }

        beta.push(b);
        let q_next = &w * (1.0 / b);
        q_vecs.push(q_next);
    }

    if m == dim {
        // Krylov space exhausted: T is H in the Lanczos basis, exact.
        return Ok(recover_eigenvectors(&alpha, &beta, &q_vecs, k));
    }

    Err(EdError::Diagonalization(format!(
        "Lanczos did not converge within {m} iterations \
         (last eigenvalue change {last_change:.2e}, tolerance {tol:.2e})"
    )))
}

/// Lowest `k` eigenvalues of the Krylov tridiagonal matrix.
fn tridiag_eigenvalues(alpha: &[f64], beta: &[f64], k: usize) -> Vec<f64> {
    let eig = tridiag_matrix(alpha, beta).symmetric_eigen();
    let mut vals: Vec<f64> = eig.eigenvalues.iter().copied().collect();
    vals.sort_by(|a, b| a.total_cmp(b));
    vals.truncate(k);
    vals
}

fn tridiag_matrix(alpha: &[f64], beta: &[f64]) -> DMatrix<f64> {
    let m = alpha.len();
    let mut t = DMatrix::zeros(m, m);
    for i in 0..m {
        t[(i, i)] = alpha[i];
        if i > 0 {
            t[(i, i - 1)] = beta[i - 1];
            t[(i - 1, i)] = beta[i - 1];
        }
    }
    t
}

/// Recover Ritz vectors from the stored Lanczos basis and the tridiagonal
/// eigenvectors.
fn recover_eigenvectors(alpha: &[f64], beta: &[f64], q_vecs: &[DVector<f64>], k: usize) -> Spectrum {
    let m = alpha.len();
    let eig = tridiag_matrix(alpha, beta).symmetric_eigen();

    let mut indexed: Vec<(usize, f64)> =
        eig.eigenvalues.iter().enumerate().map(|(i, &e)| (i, e)).collect();
    indexed.sort_by(|a, b| a.1.total_cmp(&b.1));

    let n = k.min(indexed.len());
    let dim = q_vecs[0].len();
    let n_q = q_vecs.len().min(m);

    let mut energies = Vec::with_capacity(n);
    let mut states = Vec::with_capacity(n);

    for &(idx, eval) in indexed.iter().take(n) {
        energies.push(eval);

        // Ritz vector in the original space: Σ_j s_j q_j.
        let mut v = DVector::zeros(dim);
        for j in 0..n_q {
            let coeff = eig.eigenvectors[(j, idx)];
            v += &(&q_vecs[j] * coeff);
        }
        let norm = v.norm();
        if norm > 1e-15 {
            v *= 1.0 / norm;
        }
        states.push(v);
    }

    Spectrum { energies, states }
}

/// Run Lanczos on an assembled sparse Hamiltonian.
///
/// `max_iter` defaults to a heuristic of the eigenpair count, capped at the
/// matrix dimension.
pub fn lanczos_ground_state(
    h: &CsrMatrix,
    n_eigenvalues: usize,
    max_iter: Option<usize>,
) -> Result<Spectrum> {
    let dim = h.nrows;
    let max_iter = max_iter
        .unwrap_or_else(|| (20 * n_eigenvalues).max(100))
        .min(dim.max(1));
    let tol = 1e-10;

    eprintln!("  lanczos: dim={dim}, k={n_eigenvalues}, max_iter={max_iter}");

    let matvec = |v: &DVector<f64>| DVector::from_vec(h.matvec(v.as_slice()));
    lanczos(matvec, dim, n_eigenvalues, max_iter, tol)
}
