//! Truncated Fock space for bosons on a ring.
//!
//! States are labeled by per-site occupation numbers n_i ∈ [0, n_max]. The
//! basis is the full Cartesian product over sites, so dim = (n_max+1)^n_site.
//! Enumeration is by mixed-radix decoding of a running counter with site 0
//! as the most significant digit (site n_site−1 varies fastest); the matrix
//! index mapping is defined by this order, and a reverse map built once per
//! basis gives fast config→index lookup.

use std::collections::HashMap;

/// Occupation-number basis of a ring with a per-site cutoff.
pub struct FockSpace {
    /// Number of ring sites.
    pub n_site: usize,
    /// Maximum occupation per site.
    pub n_max: u32,
    /// Basis states. `basis[i]` = occupation numbers for state i, length n_site.
    pub basis: Vec<Vec<u32>>,
    /// Config → basis index lookup.
    index_map: HashMap<Vec<u32>, usize>,
}

impl FockSpace {
    /// Enumerate the truncated occupation basis.
    pub fn new(n_site: usize, n_max: u32) -> Self {
        let basis = enumerate_occupations(n_site, n_max);

        let index_map: HashMap<Vec<u32>, usize> =
            basis.iter().enumerate().map(|(i, c)| (c.clone(), i)).collect();

        Self {
            n_site,
            n_max,
            basis,
            index_map,
        }
    }

    /// Fock space dimension.
    pub fn dim(&self) -> usize {
        self.basis.len()
    }

    /// Get the occupation configuration for basis state `idx`.
    pub fn index_to_config(&self, idx: usize) -> &[u32] {
        &self.basis[idx]
    }

    /// Look up the basis index of a configuration. Returns `None` if the
    /// configuration is not in the truncated basis.
    pub fn config_to_index(&self, config: &[u32]) -> Option<usize> {
        self.index_map.get(config).copied()
    }

    /// Move one boson from site `from` to site `to`.
    ///
    /// Returns the hopped configuration and its basis index, or `None` if
    /// the source is empty, the destination is at the cutoff, or the hopped
    /// configuration is not in the basis.
    pub fn apply_hop(&self, config: &[u32], from: usize, to: usize) -> Option<(Vec<u32>, usize)> {
        if config[from] == 0 || config[to] >= self.n_max {
            return None;
        }
        let mut new_config = config.to_vec();
        new_config[from] -= 1;
        new_config[to] += 1;
        let idx = self.config_to_index(&new_config)?;
        Some((new_config, idx))
    }
}

/// Enumerate all (n_max+1)^n_site occupation tuples via mixed-radix decoding.
fn enumerate_occupations(n_site: usize, n_max: u32) -> Vec<Vec<u32>> {
    let base = n_max as u64 + 1;
    let n_configs = base.pow(n_site as u32);

    let mut basis = Vec::with_capacity(n_configs as usize);

    for ci in 0..n_configs {
        let mut config = vec![0u32; n_site];
        let mut rem = ci;
        for s in (0..n_site).rev() {
            config[s] = (rem % base) as u32;
            rem /= base;
        }
        basis.push(config);
    }

    basis
}
