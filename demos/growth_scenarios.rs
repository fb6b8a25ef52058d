//! Compare growth trends for a few life histories.
//!
//! Run from the project root:
//!   cargo run --example growth_scenarios

use leslie_projection::project;

fn main() {
    let scenarios: [(&str, &[f64], &[f64]); 4] = [
        ("Semelparous insect", &[0.0, 0.0, 20.0], &[0.5, 0.3]),
        ("Long-lived bird", &[0.0, 0.4, 0.9, 0.9], &[0.6, 0.8, 0.85]),
        ("Annual plant", &[1.0], &[]),
        ("Overharvested fish", &[0.0, 0.5, 1.2], &[0.3, 0.4]),
    ];

    for (name, fecundity, survival) in scenarios {
        match project(fecundity, survival, 25) {
            Ok(sim) => {
                let totals = sim.history.totals();
                println!(
                    "{name:<20} lambda = {:.4} ({}) population {:.1} -> {:.1}",
                    sim.growth_rate(),
                    sim.trend(),
                    totals[0],
                    totals[totals.len() - 1]
                );
            }
            Err(e) => eprintln!("{name}: projection failed: {e}"),
        }
    }
}
