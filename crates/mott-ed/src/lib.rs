//! Exact diagonalization of the Bose-Hubbard model on a ring.
//!
//! The Hamiltonian is
//!
//!   H = −t Σ_i (b†_{i+1} b_i + b†_i b_{i+1})
//!       + (U/2) Σ_i n_i(n_i − 1) − μ Σ_i n_i
//!
//! with periodic boundary conditions (site n_site−1 couples back to site 0)
//! and a per-site occupation cutoff n_max. The occupation basis is the full
//! Cartesian product over sites; no particle-number sector is fixed.
//!
//! # Modules
//!
//! - [`fock`]: truncated Fock space with fast config↔index lookup
//! - [`hamiltonian`]: sparse and dense Hamiltonian construction
//! - [`csr`]: compressed sparse row storage and matvec
//! - [`lanczos`]: iterative ground-state eigensolver
//! - [`diag`]: dense eigendecomposition, the small-system reference
//! - [`observables`]: site-resolved density and number fluctuations
//! - [`solve`]: the typed solve boundary (params in, result or error out)

pub mod csr;
pub mod diag;
pub mod error;
pub mod fock;
pub mod hamiltonian;
pub mod lanczos;
pub mod observables;
pub mod solve;

pub use error::{EdError, Result};
pub use fock::FockSpace;
pub use hamiltonian::RingParams;
pub use solve::{solve, solve_raw, RawParams, Solution};
