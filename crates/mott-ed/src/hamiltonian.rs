//! Bose-Hubbard Hamiltonian assembly on the ring.
//!
//! H = −t Σ_i (b†_{i+1} b_i + b†_i b_{i+1})
//!     + (U/2) Σ_i n_i(n_i − 1) − μ Σ_i n_i
//!
//! The on-site terms are diagonal in the occupation basis. Hopping connects
//! states that differ by one boson moved between ring neighbors, with the
//! bosonic ladder-operator matrix element −t·√(n_src (n_dst + 1)).
//!
//! Each state's row receives only that state's outgoing hopping amplitudes;
//! the mirrored element lands in the partner state's row during the partner's
//! own pass, which is what makes the assembled matrix symmetric. For a
//! two-site ring both i→i+1 passes hit the same pair of sites, so every
//! hopping amplitude is accumulated twice — the ring genuinely has two bonds
//! between its two sites under periodic boundaries.

use crate::csr::CsrMatrix;
use crate::error::{EdError, Result};
use crate::fock::FockSpace;
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// Parameters of one Bose-Hubbard ring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingParams {
    /// Hopping amplitude t.
    pub t: f64,
    /// On-site interaction U.
    pub u: f64,
    /// Chemical potential μ.
    pub mu: f64,
    /// Number of ring sites.
    pub n_site: usize,
    /// Maximum occupation per site.
    pub n_max: u32,
}

impl Default for RingParams {
    fn default() -> Self {
        Self {
            t: 1.0,
            u: 25.0,
            mu: 15.0,
            n_site: 6,
            n_max: 5,
        }
    }
}

impl RingParams {
    /// Reject values that parse but cannot be solved: zero sites, non-finite
    /// couplings, or a Fock space too large for the sparse index range.
    /// String-level parse failures are caught earlier, in `RawParams::parse`.
    pub fn validate(&self) -> Result<()> {
        if self.n_site < 1 {
            return Err(EdError::Parameter("n_site must be at least 1".into()));
        }
        for (name, v) in [("t", self.t), ("U", self.u), ("mu", self.mu)] {
            if !v.is_finite() {
                return Err(EdError::Parameter(format!("{name} = {v} is not finite")));
            }
        }

        let base = self.n_max as usize + 1;
        let mut dim: usize = 1;
        for _ in 0..self.n_site {
            dim = match dim.checked_mul(base) {
                Some(d) if d <= u32::MAX as usize => d,
                _ => {
                    return Err(EdError::Parameter(format!(
                        "Fock space dimension ({base})^{} exceeds the sparse index range",
                        self.n_site
                    )))
                }
            };
        }
        Ok(())
    }
}

/// On-site energy Σ_i [U/2 · n_i(n_i − 1) − μ n_i] of one configuration.
fn onsite_energy(config: &[u32], u: f64, mu: f64) -> f64 {
    config
        .iter()
        .map(|&n| {
            let n = n as f64;
            0.5 * u * n * (n - 1.0) - mu * n
        })
        .sum()
}

/// Hopping matrix element −t·√(n_src (n_dst + 1)) for a boson moving from
/// `src` to `dst` occupation, evaluated on the pre-hop configuration.
fn hop_amplitude(t: f64, n_src: u32, n_dst: u32) -> f64 {
    -t * ((n_src as f64) * (n_dst as f64 + 1.0)).sqrt()
}

/// Build H as a CSR sparse matrix.
pub fn build_csr(fock: &FockSpace, params: &RingParams) -> CsrMatrix {
    let dim = fock.dim();
    let mut rows: Vec<Vec<(u32, f64)>> = vec![Vec::new(); dim];

    for idx in 0..dim {
        let config = fock.index_to_config(idx);

        let diag = onsite_energy(config, params.u, params.mu);
        if diag.abs() > 0.0 {
            rows[idx].push((idx as u32, diag));
        }

        // A one-site ring has no bond: (i+1) mod 1 would couple the site to
        // itself and double-count, so hopping is disabled entirely.
        if params.n_site < 2 {
            continue;
        }

        for i in 0..params.n_site {
            let j = (i + 1) % params.n_site;

            // i → j
            if let Some((_, hop_idx)) = fock.apply_hop(config, i, j) {
                rows[idx].push((hop_idx as u32, hop_amplitude(params.t, config[i], config[j])));
            }

            // j → i
            if let Some((_, hop_idx)) = fock.apply_hop(config, j, i) {
                rows[idx].push((hop_idx as u32, hop_amplitude(params.t, config[j], config[i])));
            }
        }
    }

    CsrMatrix::from_rows(rows)
}

/// Build H as a dense matrix. Reference path for tests and small systems;
/// the element-wise insertion scheme is identical to [`build_csr`].
pub fn build_dense(fock: &FockSpace, params: &RingParams) -> DMatrix<f64> {
    let dim = fock.dim();
    let mut h = DMatrix::zeros(dim, dim);

    add_onsite_term(&mut h, fock, params);
    add_hopping_term(&mut h, fock, params);

    h
}

/// Add the diagonal on-site interaction and chemical-potential terms.
fn add_onsite_term(h: &mut DMatrix<f64>, fock: &FockSpace, params: &RingParams) {
    for idx in 0..fock.dim() {
        let config = fock.index_to_config(idx);
        h[(idx, idx)] += onsite_energy(config, params.u, params.mu);
    }
}

/// Add both directed nearest-neighbor hops for every state and ring bond.
fn add_hopping_term(h: &mut DMatrix<f64>, fock: &FockSpace, params: &RingParams) {
    if params.n_site < 2 {
        return;
    }

    for idx in 0..fock.dim() {
        let config = fock.index_to_config(idx);

        for i in 0..params.n_site {
            let j = (i + 1) % params.n_site;

            if let Some((_, hop_idx)) = fock.apply_hop(config, i, j) {
                h[(idx, hop_idx)] += hop_amplitude(params.t, config[i], config[j]);
            }
            if let Some((_, hop_idx)) = fock.apply_hop(config, j, i) {
                h[(idx, hop_idx)] += hop_amplitude(params.t, config[j], config[i]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::DVector;

    fn golden_params() -> RingParams {
        RingParams {
            t: 1.0,
            u: 25.0,
            mu: 15.0,
            n_site: 2,
            n_max: 1,
        }
    }

    #[test]
    fn test_diagonal_closed_form() {
        // n_site=2, n_max=1, state (1,0): U/2·n(n−1) = 0, so diag = −mu.
        let fock = FockSpace::new(2, 1);
        let params = golden_params();
        let h = build_dense(&fock, &params);

        let idx = fock.config_to_index(&[1, 0]).unwrap();
        assert!((h[(idx, idx)] - (-params.mu)).abs() < 1e-15);

        // (1,1): two bosons on separate sites, no interaction energy.
        let idx = fock.config_to_index(&[1, 1]).unwrap();
        assert!((h[(idx, idx)] - (-2.0 * params.mu)).abs() < 1e-15);
    }

    #[test]
    fn test_interaction_energy_double_occupancy() {
        // (2,0) at U=4: U/2·2·1 = 4, minus 2·mu.
        let fock = FockSpace::new(2, 2);
        let params = RingParams {
            t: 0.0,
            u: 4.0,
            mu: 1.0,
            n_site: 2,
            n_max: 2,
        };
        let h = build_dense(&fock, &params);

        let idx = fock.config_to_index(&[2, 0]).unwrap();
        assert!((h[(idx, idx)] - 2.0).abs() < 1e-15);
    }

    #[test]
    fn test_golden_four_by_four() {
        // Hand-built matrix for t=1, U=25, mu=15, n_site=2, n_max=1.
        // Basis order: (0,0), (0,1), (1,0), (1,1). The two-site ring has two
        // bonds, so the (0,1)↔(1,0) amplitude is −2t.
        let fock = FockSpace::new(2, 1);
        let h = build_dense(&fock, &golden_params());

        let expected = DMatrix::from_row_slice(
            4,
            4,
            &[
                0.0, 0.0, 0.0, 0.0, //
                0.0, -15.0, -2.0, 0.0, //
                0.0, -2.0, -15.0, 0.0, //
                0.0, 0.0, 0.0, -30.0,
            ],
        );

        assert!((h - expected).norm() < 1e-12);
    }

    #[test]
    fn test_bosonic_sqrt_weighting() {
        // Three sites so each bond is visited once. (2,0,0) → (1,1,0) via a
        // hop 0→1 carries −t·√(2·1) = −√2.
        let fock = FockSpace::new(3, 2);
        let params = RingParams {
            t: 1.0,
            u: 0.0,
            mu: 0.0,
            n_site: 3,
            n_max: 2,
        };
        let h = build_dense(&fock, &params);

        let a = fock.config_to_index(&[2, 0, 0]).unwrap();
        let b = fock.config_to_index(&[1, 1, 0]).unwrap();
        assert!((h[(a, b)] - (-2.0f64.sqrt())).abs() < 1e-14);
        // Reverse element matches: (1,1,0) → (2,0,0) is a hop 1→0 with
        // amplitude −t·√(1·(1+1)) = −√2 as well.
        assert!((h[(b, a)] - (-2.0f64.sqrt())).abs() < 1e-14);
    }

    #[test]
    fn test_dense_symmetric() {
        let fock = FockSpace::new(3, 2);
        let params = RingParams {
            t: 0.7,
            u: 3.0,
            mu: 1.2,
            n_site: 3,
            n_max: 2,
        };
        let h = build_dense(&fock, &params);

        let diff = (&h - h.transpose()).norm();
        assert!(diff < 1e-12, "H not symmetric: diff={diff}");
    }

    #[test]
    fn test_csr_matches_dense() {
        let fock = FockSpace::new(3, 2);
        let params = RingParams {
            t: 0.7,
            u: 3.0,
            mu: 1.2,
            n_site: 3,
            n_max: 2,
        };
        let h_dense = build_dense(&fock, &params);
        let h_csr = build_csr(&fock, &params);

        for seed in 0..5u64 {
            let mut v = DVector::zeros(fock.dim());
            for i in 0..fock.dim() {
                v[i] = ((i as u64 + seed * 137) as f64 * 0.618).fract() - 0.5;
            }

            let hv_dense = &h_dense * &v;
            let hv_csr = h_csr.matvec(v.as_slice());

            let diff: f64 = hv_dense
                .iter()
                .zip(hv_csr.iter())
                .map(|(a, b)| (a - b).abs())
                .fold(0.0f64, f64::max);
            assert!(diff < 1e-12, "CSR/dense mismatch at seed {seed}: {diff}");
        }
    }

    #[test]
    fn test_csr_symmetric_inner_products() {
        // ⟨Ax, y⟩ == ⟨x, Ay⟩ for a symmetric A.
        let fock = FockSpace::new(3, 2);
        let h = build_csr(&fock, &RingParams {
            t: 1.0,
            u: 2.0,
            mu: 0.5,
            n_site: 3,
            n_max: 2,
        });

        let dim = fock.dim();
        let mut x = vec![0.0; dim];
        let mut y = vec![0.0; dim];
        for i in 0..dim {
            x[i] = ((i as f64 + 1.0) * 0.618).fract() - 0.5;
            y[i] = ((i as f64 + 2.0) * 0.314).fract() - 0.5;
        }

        let ax = h.matvec(&x);
        let ay = h.matvec(&y);

        let ax_dot_y: f64 = ax.iter().zip(y.iter()).map(|(a, b)| a * b).sum();
        let x_dot_ay: f64 = x.iter().zip(ay.iter()).map(|(a, b)| a * b).sum();
        assert!((ax_dot_y - x_dot_ay).abs() < 1e-12);
    }

    #[test]
    fn test_one_site_ring_is_diagonal() {
        // Hopping disabled for n_site=1: only the on-site terms survive.
        let fock = FockSpace::new(1, 3);
        let params = RingParams {
            t: 1.0,
            u: 2.0,
            mu: 0.5,
            n_site: 1,
            n_max: 3,
        };
        let h = build_dense(&fock, &params);

        for i in 0..fock.dim() {
            for j in 0..fock.dim() {
                if i != j {
                    assert_eq!(h[(i, j)], 0.0);
                }
            }
            let n = i as f64;
            let expect = 0.5 * params.u * n * (n - 1.0) - params.mu * n;
            assert!((h[(i, i)] - expect).abs() < 1e-12);
        }
    }

    #[test]
    fn test_validate_rejects_bad_params() {
        let mut p = RingParams::default();
        p.n_site = 0;
        assert!(matches!(p.validate(), Err(EdError::Parameter(_))));

        let mut p = RingParams::default();
        p.t = f64::NAN;
        assert!(matches!(p.validate(), Err(EdError::Parameter(_))));

        let mut p = RingParams::default();
        p.n_site = 40;
        p.n_max = 9;
        assert!(matches!(p.validate(), Err(EdError::Parameter(_))));

        assert!(RingParams::default().validate().is_ok());
    }
}
