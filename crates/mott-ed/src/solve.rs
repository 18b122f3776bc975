//! The solve boundary: parameters in, ground-state result or error out.
//!
//! `solve` is a pure function of its parameter record; it owns no state
//! across calls, and concurrent solves on independent parameter sets share
//! nothing. Offloading a solve to a worker thread is the caller's business —
//! [`Solution`] and [`EdError`] are plain owned values and cross threads
//! freely.

use crate::error::{EdError, Result};
use crate::fock::FockSpace;
use crate::hamiltonian::{build_csr, RingParams};
use crate::lanczos::lanczos_ground_state;
use crate::observables;
use serde::{Deserialize, Serialize};

/// Raw, string-valued parameter record as delivered by an entry form or a
/// command line. Parsing happens once, at this boundary, before any
/// numerical work.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawParams {
    pub t: String,
    pub u: String,
    pub mu: String,
    pub n_site: String,
    pub n_max: String,
}

impl RawParams {
    /// Parse into a typed record, naming the offending field on failure.
    pub fn parse(&self) -> Result<RingParams> {
        Ok(RingParams {
            t: parse_field("t", &self.t)?,
            u: parse_field("U", &self.u)?,
            mu: parse_field("mu", &self.mu)?,
            n_site: parse_field("n_site", &self.n_site)?,
            n_max: parse_field("n_max", &self.n_max)?,
        })
    }
}

fn parse_field<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| EdError::Parameter(format!("{name} = {raw:?} is not a valid number")))
}

/// Outcome of one ground-state solve. Immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    /// Ground-state energy E₀.
    pub ground_energy: f64,
    /// ⟨n_i⟩ per site, length n_site.
    pub density: Vec<f64>,
    /// Fock space dimension (n_max+1)^n_site.
    pub basis_size: usize,
    /// Echo of the parameters that produced this solution.
    pub params: RingParams,
}

impl Solution {
    /// Mean of the site densities.
    pub fn average_density(&self) -> f64 {
        if self.density.is_empty() {
            return 0.0;
        }
        self.density.iter().sum::<f64>() / self.density.len() as f64
    }
}

/// Solve one ring: basis → sparse Hamiltonian → Lanczos ground state →
/// density profile.
pub fn solve(params: &RingParams) -> Result<Solution> {
    params.validate()?;

    let fock = FockSpace::new(params.n_site, params.n_max);
    if fock.dim() == 0 {
        return Err(EdError::EmptyBasis);
    }
    if fock.dim() <= 1 {
        return Err(EdError::InsufficientBasis { dim: fock.dim() });
    }

    let h = build_csr(&fock, params);
    let spectrum = lanczos_ground_state(&h, 1, None)?;

    let density = observables::density(&fock, spectrum.ground_state());

    Ok(Solution {
        ground_energy: spectrum.ground_energy(),
        density,
        basis_size: fock.dim(),
        params: params.clone(),
    })
}

/// Parse a raw string record, then solve it.
pub fn solve_raw(raw: &RawParams) -> Result<Solution> {
    solve(&raw.parse()?)
}
