mod leslie;
mod population;

pub use leslie::LeslieMatrix;
pub use population::{
    age_class_labels, initial_population, PopulationHistory, INITIAL_COHORT,
};
