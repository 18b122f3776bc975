//! Chemical-potential scan at fixed t/U: the Mott staircase on a small ring.
//!
//! Prints a TSV table of mu/U against ground energy, mean density, and mean
//! on-site number fluctuation. At small t/U the density locks to integer
//! plateaus between the lobe boundaries.
//!
//! Run: cargo run -p mott-demos --bin mu_scan --release

use mott_ed::hamiltonian::build_csr;
use mott_ed::lanczos::lanczos_ground_state;
use mott_ed::observables::{density, density_fluctuation};
use mott_ed::{FockSpace, RingParams};

fn main() {
    let n_site = 4;
    let n_max = 3;
    let u = 1.0;
    let t_over_u = 0.05;

    let fock = FockSpace::new(n_site, n_max);
    eprintln!("mu scan: n_site={n_site}, n_max={n_max}, dim={}", fock.dim());

    println!("# Bose-Hubbard ring: n_site={n_site}, n_max={n_max}, t/U={t_over_u}");
    println!("mu_over_U\tE0\tmean_density\tmean_fluctuation");

    for step in 0..=30 {
        let mu = u * step as f64 / 10.0;
        let params = RingParams {
            t: t_over_u * u,
            u,
            mu,
            n_site,
            n_max,
        };

        let h = build_csr(&fock, &params);
        match lanczos_ground_state(&h, 1, None) {
            Ok(spec) => {
                let gs = spec.ground_state();
                let d = density(&fock, gs);
                let f = density_fluctuation(&fock, gs);

                println!(
                    "{:.2}\t{:.6}\t{:.4}\t{:.4}",
                    mu / u,
                    spec.ground_energy(),
                    d.iter().sum::<f64>() / d.len() as f64,
                    f.iter().sum::<f64>() / f.len() as f64
                );
            }
            Err(e) => eprintln!("mu/U={:.2}: solve failed: {e}", mu / u),
        }
    }
}
