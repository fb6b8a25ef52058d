pub mod analysis;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod visualization;

pub use analysis::{analyze_growth, project, project_population, Analyzer, GrowthTrend, Simulation};
pub use config::SimulationConfig;
pub use error::LeslieError;
pub use io::{ChartOutput, SimulationWriter};
pub use models::{LeslieMatrix, PopulationHistory};
