mod chart_io;
mod json_io;

use std::path::Path;

use crate::analysis::Simulation;
use crate::error::LeslieError;
use crate::visualization::render_svg_chart;

pub use chart_io::{save_chart, save_or_display, ChartOutput};
pub use json_io::{to_json, write_json};

/// Trait for writing a simulation result to a file.
pub trait SimulationWriter {
    fn write(&self, simulation: &Simulation, path: &Path) -> Result<(), LeslieError>;
}

/// JSON export of the full simulation.
#[derive(Default)]
pub struct JsonFormat {
    pub pretty: bool,
}

impl SimulationWriter for JsonFormat {
    fn write(&self, simulation: &Simulation, path: &Path) -> Result<(), LeslieError> {
        write_json(simulation, path, self.pretty)
    }
}

/// SVG line chart of the population history.
pub struct SvgChartFormat;

impl SimulationWriter for SvgChartFormat {
    fn write(&self, simulation: &Simulation, path: &Path) -> Result<(), LeslieError> {
        let svg = render_svg_chart(&simulation.history, simulation.growth_rate());
        save_chart(&svg, path)
    }
}
