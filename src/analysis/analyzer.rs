use nalgebra::DVector;

use crate::analysis::{analyze_growth, project_population, GrowthAnalysis};
use crate::error::LeslieError;
use crate::models::{initial_population, LeslieMatrix, PopulationHistory};

/// Groups the analysis operations on a single Leslie matrix.
pub struct Analyzer<'a> {
    matrix: &'a LeslieMatrix,
}

impl<'a> Analyzer<'a> {
    /// Create a new Analyzer for the given matrix.
    pub fn new(matrix: &'a LeslieMatrix) -> Self {
        Self { matrix }
    }

    /// Dominant eigenvalue and growth trend.
    pub fn growth(&self) -> Result<GrowthAnalysis, LeslieError> {
        analyze_growth(self.matrix)
    }

    /// Project the default starting cohort over `years` steps.
    pub fn project(&self, years: u32) -> Result<PopulationHistory, LeslieError> {
        self.project_from(&initial_population(self.matrix.dimension()), years)
    }

    /// Project an arbitrary starting population over `years` steps.
    pub fn project_from(
        &self,
        initial: &DVector<f64>,
        years: u32,
    ) -> Result<PopulationHistory, LeslieError> {
        project_population(self.matrix, initial, years)
    }
}
