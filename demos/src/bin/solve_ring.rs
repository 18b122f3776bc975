//! Solve one Bose-Hubbard ring from command-line parameters.
//!
//! Usage:
//!   cargo run -p mott-demos --bin solve_ring --release -- [t U mu n_site n_max] [--export DIR]
//!
//! Positional arguments default to t=1, U=25, mu=15, n_site=6, n_max=5 and
//! are kept as raw strings all the way to the solve boundary, so a typo
//! surfaces as a parameter error rather than a panic. The solve runs on a
//! worker thread and the finished result crosses back over a channel as an
//! immutable value.

use mott_ed::{solve_raw, RawParams};
use std::path::Path;
use std::process::ExitCode;
use std::sync::mpsc;
use std::thread;

fn main() -> ExitCode {
    let mut export_dir: Option<String> = None;
    let mut positional: Vec<String> = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--export" {
            match args.next() {
                Some(dir) => export_dir = Some(dir),
                None => {
                    eprintln!("--export needs a directory argument");
                    return ExitCode::FAILURE;
                }
            }
        } else {
            positional.push(arg);
        }
    }

    let defaults = ["1", "25", "15", "6", "5"];
    let field = |i: usize| {
        positional
            .get(i)
            .cloned()
            .unwrap_or_else(|| defaults[i].to_string())
    };
    let raw = RawParams {
        t: field(0),
        u: field(1),
        mu: field(2),
        n_site: field(3),
        n_max: field(4),
    };

    eprintln!(
        "solving ring: t={} U={} mu={} n_site={} n_max={}",
        raw.t, raw.u, raw.mu, raw.n_site, raw.n_max
    );

    // Offload the solve; the foreground just waits on the channel.
    let (tx, rx) = mpsc::channel();
    let worker = thread::spawn(move || {
        tx.send(solve_raw(&raw)).ok();
    });

    let outcome = match rx.recv() {
        Ok(outcome) => outcome,
        Err(_) => {
            eprintln!("solver thread terminated without a result");
            return ExitCode::FAILURE;
        }
    };
    worker.join().ok();

    let solution = match outcome {
        Ok(solution) => solution,
        Err(e) => {
            eprintln!("solve failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("basis_size\t{}", solution.basis_size);
    println!("ground_energy\t{:.6}", solution.ground_energy);
    println!("site\tdensity");
    for (site, d) in solution.density.iter().enumerate() {
        println!("{site}\t{d:.4}");
    }
    println!("average_density\t{:.4}", solution.average_density());

    if let Some(dir) = export_dir {
        if let Err(e) = mott_format::write_sheets(&solution, Path::new(&dir)) {
            eprintln!("export failed: {e}");
            return ExitCode::FAILURE;
        }
        eprintln!("sheets written to {dir}");
    }

    ExitCode::SUCCESS
}
