use nalgebra::DVector;
use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Size of the starting cohort placed in the youngest age class.
pub const INITIAL_COHORT: f64 = 100.0;

/// The default starting population: a cohort of [`INITIAL_COHORT`] in age
/// class 0 and nobody else.
///
/// ```
/// use leslie_projection::models::initial_population;
///
/// let p = initial_population(3);
/// assert_eq!(p.as_slice(), &[100.0, 0.0, 0.0]);
/// ```
pub fn initial_population(age_classes: usize) -> DVector<f64> {
    let mut population = DVector::zeros(age_classes);
    if age_classes > 0 {
        population[0] = INITIAL_COHORT;
    }
    population
}

/// Display labels for each age class.
pub fn age_class_labels(age_classes: usize) -> Vec<String> {
    const THREE_STAGE: [&str; 3] = ["Larvae (Age 0)", "Juveniles (Age 1)", "Adults (Age 2)"];

    if age_classes == THREE_STAGE.len() {
        THREE_STAGE.iter().map(|s| s.to_string()).collect()
    } else {
        (0..age_classes).map(|i| format!("Age Group {i}")).collect()
    }
}

/// Population vectors for steps `0..=years`. Built once by a projection and
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationHistory {
    steps: Vec<DVector<f64>>,
}

impl PopulationHistory {
    pub(crate) fn new(steps: Vec<DVector<f64>>) -> Self {
        Self { steps }
    }

    /// Number of recorded steps, including step 0.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of age classes per step.
    pub fn age_classes(&self) -> usize {
        self.steps.first().map_or(0, |v| v.len())
    }

    /// Population vector after `t` steps.
    pub fn step(&self, t: usize) -> Option<&DVector<f64>> {
        self.steps.get(t)
    }

    pub fn initial(&self) -> Option<&DVector<f64>> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&DVector<f64>> {
        self.steps.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DVector<f64>> {
        self.steps.iter()
    }

    /// Time series of a single age class, or `None` past the last class.
    pub fn age_class_series(&self, class: usize) -> Option<Vec<f64>> {
        if class >= self.age_classes() {
            return None;
        }
        Some(self.steps.iter().map(|v| v[class]).collect())
    }

    /// Total population at each step.
    pub fn totals(&self) -> Vec<f64> {
        self.steps.iter().map(|v| v.sum()).collect()
    }

    /// Largest count in any class at any step.
    pub fn max_count(&self) -> f64 {
        self.steps
            .iter()
            .flat_map(|v| v.iter().copied())
            .fold(0.0f64, f64::max)
    }

    /// Steps as plain vectors.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.steps.iter().map(|v| v.as_slice().to_vec()).collect()
    }
}

impl Serialize for PopulationHistory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.steps.len()))?;
        for step in &self.steps {
            seq.serialize_element(step.as_slice())?;
        }
        seq.end()
    }
}
