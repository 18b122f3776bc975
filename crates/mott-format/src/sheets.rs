//! Three-sheet TSV rendering plus a JSON dump of the full solution.
//!
//! Sheet layout mirrors the classic lab export: `parameters` echoes the
//! inputs in one row, `density` lists one row per site, `summary` holds the
//! scalar metrics (ground energy, basis size, average density).

use crate::error::Result;
use mott_ed::Solution;
use std::fs;
use std::path::Path;

/// Pretty-printed JSON of the whole solution record.
pub fn to_json(solution: &Solution) -> Result<String> {
    Ok(serde_json::to_string_pretty(solution)?)
}

/// Render the parameters sheet: echoed inputs, one row.
pub fn parameters_sheet(solution: &Solution) -> String {
    let p = &solution.params;
    let mut out = String::from("t\tU\tmu\tn_site\tn_max\n");
    out.push_str(&format!("{}\t{}\t{}\t{}\t{}\n", p.t, p.u, p.mu, p.n_site, p.n_max));
    out
}

/// Render the density sheet: one row per site.
pub fn density_sheet(solution: &Solution) -> String {
    let mut out = String::from("site\tdensity\n");
    for (site, d) in solution.density.iter().enumerate() {
        out.push_str(&format!("{site}\t{d:.6}\n"));
    }
    out
}

/// Render the summary sheet of scalar metrics.
pub fn summary_sheet(solution: &Solution) -> String {
    let mut out = String::from("metric\tvalue\n");
    out.push_str(&format!("ground_energy\t{:.6}\n", solution.ground_energy));
    out.push_str(&format!("basis_size\t{}\n", solution.basis_size));
    out.push_str(&format!("average_density\t{:.6}\n", solution.average_density()));
    out
}

/// Write all three sheets plus `solution.json` into `dir` (created if absent).
pub fn write_sheets(solution: &Solution, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    fs::write(dir.join("parameters.tsv"), parameters_sheet(solution))?;
    fs::write(dir.join("density.tsv"), density_sheet(solution))?;
    fs::write(dir.join("summary.tsv"), summary_sheet(solution))?;
    fs::write(dir.join("solution.json"), to_json(solution)?)?;
    Ok(())
}
