mod analyzer;
mod eigen;
mod growth;
mod projection;
mod simulation;

pub use analyzer::Analyzer;
pub use growth::{analyze_growth, GrowthAnalysis, GrowthTrend};
pub use projection::project_population;
pub use simulation::{project, Simulation};
