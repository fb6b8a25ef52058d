use serde::Serialize;

use super::{Analyzer, GrowthAnalysis, GrowthTrend};
use crate::error::LeslieError;
use crate::models::{LeslieMatrix, PopulationHistory};

/// Output of one run of the engine: matrix, growth analysis, and history.
#[derive(Debug, Clone, Serialize)]
pub struct Simulation {
    pub matrix: LeslieMatrix,
    pub growth: GrowthAnalysis,
    pub history: PopulationHistory,
}

impl Simulation {
    /// Dominant eigenvalue (lambda).
    pub fn growth_rate(&self) -> f64 {
        self.growth.growth_rate
    }

    pub fn trend(&self) -> GrowthTrend {
        self.growth.trend
    }

    pub fn age_classes(&self) -> usize {
        self.matrix.dimension()
    }

    /// Number of projected steps (history length minus the initial entry).
    pub fn years(&self) -> usize {
        self.history.len().saturating_sub(1)
    }
}

/// Build the Leslie matrix, analyze its growth rate, and project the default
/// starting cohort forward `years` steps.
///
/// ```
/// use leslie_projection::{project, GrowthTrend};
///
/// let sim = project(&[0.0, 0.0, 20.0], &[0.5, 0.3], 15).unwrap();
/// assert_eq!(sim.history.len(), 16);
/// assert_eq!(sim.trend(), GrowthTrend::Increasing);
/// ```
pub fn project(
    fecundity: &[f64],
    survival: &[f64],
    years: u32,
) -> Result<Simulation, LeslieError> {
    let matrix = LeslieMatrix::new(fecundity, survival)?;
    let analyzer = Analyzer::new(&matrix);
    let growth = analyzer.growth()?;
    let history = analyzer.project(years)?;

    tracing::info!(
        age_classes = matrix.dimension(),
        years,
        growth_rate = growth.growth_rate,
        trend = %growth.trend,
        "simulation complete"
    );

    Ok(Simulation {
        matrix,
        growth,
        history,
    })
}
