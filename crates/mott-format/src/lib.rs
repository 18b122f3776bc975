//! Export collaborator for solve results.
//!
//! Serializes a [`mott_ed::Solution`] to JSON and to three tabular sheets —
//! echoed parameters, per-site density, scalar summary — the layout lab
//! spreadsheets expect. Nothing here is load-bearing for the solver; the
//! core stays a pure function and this crate only consumes its output.

pub mod error;
pub mod sheets;

pub use error::{FormatError, Result};
pub use sheets::{to_json, write_sheets};
