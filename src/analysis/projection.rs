use nalgebra::DVector;

use crate::error::LeslieError;
use crate::models::{LeslieMatrix, PopulationHistory};

/// Upper bound on steps reserved up front; longer runs grow on demand.
const PREALLOCATED_STEPS: usize = 1024;

/// Project a population forward `years` steps.
///
/// Step 0 is `initial`; step `t + 1` is `matrix * step t`. Values are never
/// clamped, so a negative count means the inputs were invalid.
pub fn project_population(
    matrix: &LeslieMatrix,
    initial: &DVector<f64>,
    years: u32,
) -> Result<PopulationHistory, LeslieError> {
    if initial.len() != matrix.dimension() {
        return Err(LeslieError::ShapeMismatch(format!(
            "initial population has {} entries, matrix has {} age classes",
            initial.len(),
            matrix.dimension()
        )));
    }

    let mut steps = Vec::with_capacity((years as usize).min(PREALLOCATED_STEPS) + 1);
    steps.push(initial.clone());

    let mut population = initial.clone();
    for _ in 0..years {
        population = matrix.apply(&population)?;
        steps.push(population.clone());
    }

    Ok(PopulationHistory::new(steps))
}
