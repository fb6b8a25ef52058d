//! Basic projection: the three-stage life cycle with only adults reproducing.
//!
//! Run from the project root:
//!   cargo run --example basic_projection

use leslie_projection::visualization::{
    print_growth_summary, print_leslie_matrix, print_population_chart, print_population_table,
};
use leslie_projection::SimulationConfig;

fn main() {
    let config = SimulationConfig::default();
    let simulation = config.simulate().expect("default parameters are valid");

    print_leslie_matrix(&simulation.matrix);
    print_growth_summary(&simulation.growth);
    print_population_table(&simulation.history);
    print_population_chart(&simulation.history, simulation.growth_rate());
}
