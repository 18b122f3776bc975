//! Error types for mott-ed.
//!
//! Every failure mode of a solve is a value of [`EdError`]; nothing in the
//! core panics across the boundary. The messages are meant to be shown to
//! whoever typed the parameters.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum EdError {
    #[error("invalid parameter: {0}")]
    Parameter(String),

    #[error("basis generation produced no states")]
    EmptyBasis,

    #[error(
        "Fock space too small for the iterative eigensolver (dim = {dim}); \
         increase n_site or n_max"
    )]
    InsufficientBasis { dim: usize },

    #[error("diagonalization failed: {0}")]
    Diagonalization(String),
}

pub type Result<T> = std::result::Result<T, EdError>;
