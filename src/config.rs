use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis::{project, Simulation};
use crate::error::LeslieError;

/// Longest projection a configuration may request.
pub const MAX_YEARS: u32 = 10_000;

/// Parameters for one simulation run.
///
/// The defaults describe a three-stage life cycle (larvae, juveniles, adults)
/// where only adults reproduce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Offspring per individual per step, one per age class
    pub fecundity: Vec<f64>,
    /// Probability of surviving from class i to class i + 1
    pub survival: Vec<f64>,
    /// Number of projection steps
    pub years: u32,
    /// Where the rendered chart is written
    pub chart_path: PathBuf,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            fecundity: vec![0.0, 0.0, 20.0],
            survival: vec![0.5, 0.3],
            years: 15,
            chart_path: PathBuf::from("output/plots/simulation.svg"),
        }
    }
}

impl SimulationConfig {
    /// Read a configuration from a TOML file. Keys that are absent keep their
    /// default values.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LeslieError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, LeslieError> {
        let config: SimulationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, LeslieError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check vector shapes and biological ranges.
    pub fn validate(&self) -> Result<(), LeslieError> {
        if self.fecundity.is_empty() {
            return Err(LeslieError::ShapeMismatch(
                "fecundity must list at least one age class".to_string(),
            ));
        }
        if self.survival.len() != self.fecundity.len() - 1 {
            return Err(LeslieError::ShapeMismatch(format!(
                "{} age classes need {} survival rates, got {}",
                self.fecundity.len(),
                self.fecundity.len() - 1,
                self.survival.len()
            )));
        }
        for (i, &f) in self.fecundity.iter().enumerate() {
            if !f.is_finite() || f < 0.0 {
                return Err(LeslieError::ValidationError(format!(
                    "fecundity[{i}] must be a non-negative number, got {f}"
                )));
            }
        }
        for (i, &s) in self.survival.iter().enumerate() {
            if !(0.0..=1.0).contains(&s) {
                return Err(LeslieError::ValidationError(format!(
                    "survival[{i}] must be in 0.0..=1.0, got {s}"
                )));
            }
        }
        if self.years > MAX_YEARS {
            return Err(LeslieError::ValidationError(format!(
                "years must be at most {MAX_YEARS}, got {}",
                self.years
            )));
        }
        Ok(())
    }

    /// Validate, then run the engine with these parameters.
    pub fn simulate(&self) -> Result<Simulation, LeslieError> {
        self.validate()?;
        project(&self.fecundity, &self.survival, self.years)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_three_stage() {
        let config = SimulationConfig::default();
        assert_eq!(config.fecundity, vec![0.0, 0.0, 20.0]);
        assert_eq!(config.survival, vec![0.5, 0.3]);
        assert_eq!(config.years, 15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SimulationConfig::from_toml("years = 30").unwrap();
        assert_eq!(config.years, 30);
        assert_eq!(config.fecundity, vec![0.0, 0.0, 20.0]);
    }

    #[test]
    fn test_full_toml() {
        let config = SimulationConfig::from_toml(
            r#"
            fecundity = [0.0, 1.5, 2.0, 0.5]
            survival = [0.8, 0.6, 0.3]
            years = 40
            chart_path = "plots/run.svg"
            "#,
        )
        .unwrap();
        assert_eq!(config.fecundity.len(), 4);
        assert_eq!(config.chart_path, PathBuf::from("plots/run.svg"));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = SimulationConfig::default();
        let text = config.to_toml().unwrap();
        assert_eq!(SimulationConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = SimulationConfig::from_toml("years = \"many\"").unwrap_err();
        assert!(matches!(err, LeslieError::Config(_)));
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let err = SimulationConfig::from_toml("survival = [0.5]").unwrap_err();
        assert!(matches!(err, LeslieError::ShapeMismatch(_)));
    }

    #[test]
    fn test_negative_fecundity_rejected() {
        let config = SimulationConfig {
            fecundity: vec![-1.0, 2.0],
            survival: vec![0.5],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LeslieError::ValidationError(_))
        ));
    }

    #[test]
    fn test_survival_out_of_range_rejected() {
        let config = SimulationConfig {
            fecundity: vec![0.0, 2.0],
            survival: vec![1.5],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("survival[0]"));
    }

    #[test]
    fn test_years_capped() {
        let config = SimulationConfig {
            years: u32::MAX,
            ..Default::default()
        };
        let err = config.simulate().unwrap_err();
        assert!(matches!(err, LeslieError::ValidationError(_)));
        assert!(err.to_string().contains("years"));

        let config = SimulationConfig {
            years: MAX_YEARS,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_missing_file_is_io_error() {
        let err = SimulationConfig::from_file("does/not/exist.toml").unwrap_err();
        assert!(matches!(err, LeslieError::Io(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sim.toml");
        std::fs::write(&path, "fecundity = [1.1]\nsurvival = []\nyears = 3\n").unwrap();
        let config = SimulationConfig::from_file(&path).unwrap();
        let sim = config.simulate().unwrap();
        assert_eq!(sim.history.len(), 4);
        assert_eq!(sim.growth_rate(), 1.1);
    }
}
