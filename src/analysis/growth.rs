use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use super::eigen;
use crate::error::LeslieError;
use crate::models::LeslieMatrix;

/// Relative gap under which two eigenvalue magnitudes count as tied.
const MAGNITUDE_TIE_TOLERANCE: f64 = 1e-9;

/// Long-term direction of the population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthTrend {
    Increasing,
    Decreasing,
    Stable,
}

impl GrowthTrend {
    /// Classify a growth rate against the replacement rate of exactly 1.
    ///
    /// ```
    /// use leslie_projection::GrowthTrend;
    ///
    /// assert_eq!(GrowthTrend::from_rate(1.2), GrowthTrend::Increasing);
    /// assert_eq!(GrowthTrend::from_rate(0.8), GrowthTrend::Decreasing);
    /// assert_eq!(GrowthTrend::from_rate(1.0), GrowthTrend::Stable);
    /// ```
    pub fn from_rate(rate: f64) -> Self {
        if rate > 1.0 {
            GrowthTrend::Increasing
        } else if rate < 1.0 {
            GrowthTrend::Decreasing
        } else {
            GrowthTrend::Stable
        }
    }
}

impl std::fmt::Display for GrowthTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrowthTrend::Increasing => write!(f, "INCREASING"),
            GrowthTrend::Decreasing => write!(f, "DECREASING"),
            GrowthTrend::Stable => write!(f, "STABLE"),
        }
    }
}

impl std::str::FromStr for GrowthTrend {
    type Err = LeslieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "increasing" => Ok(GrowthTrend::Increasing),
            "decreasing" => Ok(GrowthTrend::Decreasing),
            "stable" => Ok(GrowthTrend::Stable),
            _ => Err(LeslieError::ValidationError(format!(
                "Unknown growth trend: '{s}'"
            ))),
        }
    }
}

/// Eigenvalue analysis of a Leslie matrix.
#[derive(Debug, Clone, Serialize)]
pub struct GrowthAnalysis {
    /// All eigenvalues, largest magnitude first.
    pub eigenvalues: Vec<Complex64>,
    /// The eigenvalue selected as dominant.
    pub dominant: Complex64,
    /// Real part of the dominant eigenvalue (lambda).
    pub growth_rate: f64,
    pub trend: GrowthTrend,
}

/// Compute the dominant eigenvalue of `matrix` and classify the trend.
///
/// When several eigenvalues share the largest magnitude (cyclic Leslie
/// matrices have a whole ring of them), the one with the largest real part
/// wins, so a positive real root is always preferred over its rotations.
pub fn analyze_growth(matrix: &LeslieMatrix) -> Result<GrowthAnalysis, LeslieError> {
    let mut eigenvalues = eigen::eigenvalues(matrix)?;
    if eigenvalues.is_empty() {
        return Err(LeslieError::NumericalError(
            "matrix has no eigenvalues".to_string(),
        ));
    }

    eigenvalues.sort_by(|a, b| {
        b.norm()
            .total_cmp(&a.norm())
            .then(b.re.total_cmp(&a.re))
            .then(b.im.total_cmp(&a.im))
    });

    let max_norm = eigenvalues[0].norm();
    let index = eigenvalues
        .iter()
        .enumerate()
        .take_while(|(_, z)| max_norm - z.norm() <= MAGNITUDE_TIE_TOLERANCE * max_norm)
        .max_by(|(_, a), (_, b)| a.re.total_cmp(&b.re).then(b.im.total_cmp(&a.im)))
        .map_or(0, |(i, _)| i);

    // `dominant` must be an element of `eigenvalues`.
    if eigenvalues[index].im.abs() <= MAGNITUDE_TIE_TOLERANCE * max_norm.max(1.0) {
        let coeffs = eigen::characteristic_polynomial(matrix);
        let re = eigen::polish_real_root(&coeffs, eigenvalues[index].re);
        eigenvalues[index] = Complex64::new(re, 0.0);
    }

    let dominant = eigenvalues[index];
    let growth_rate = dominant.re;
    let trend = GrowthTrend::from_rate(growth_rate);

    tracing::debug!(growth_rate, %trend, "growth analysis complete");

    Ok(GrowthAnalysis {
        eigenvalues,
        dominant,
        growth_rate,
        trend,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(fecundity: &[f64], survival: &[f64]) -> GrowthAnalysis {
        let m = LeslieMatrix::new(fecundity, survival).unwrap();
        analyze_growth(&m).unwrap()
    }

    #[test]
    fn test_classification_thresholds() {
        assert_eq!(GrowthTrend::from_rate(1.0000001), GrowthTrend::Increasing);
        assert_eq!(GrowthTrend::from_rate(0.9999999), GrowthTrend::Decreasing);
        assert_eq!(GrowthTrend::from_rate(1.0), GrowthTrend::Stable);
        assert_eq!(GrowthTrend::from_rate(0.0), GrowthTrend::Decreasing);
    }

    #[test]
    fn test_trend_display_and_parse() {
        assert_eq!(GrowthTrend::Increasing.to_string(), "INCREASING");
        assert_eq!("stable".parse::<GrowthTrend>().unwrap(), GrowthTrend::Stable);
        assert_eq!(
            "Decreasing".parse::<GrowthTrend>().unwrap(),
            GrowthTrend::Decreasing
        );
        assert!("sideways".parse::<GrowthTrend>().is_err());
    }

    #[test]
    fn test_trend_serde_lowercase() {
        let json = serde_json::to_string(&GrowthTrend::Increasing).unwrap();
        assert_eq!(json, "\"increasing\"");
        let back: GrowthTrend = serde_json::from_str("\"stable\"").unwrap();
        assert_eq!(back, GrowthTrend::Stable);
    }

    #[test]
    fn test_cyclic_matrix_prefers_positive_real_root() {
        let g = analyze(&[0.0, 0.0, 20.0], &[0.5, 0.3]);
        assert_eq!(g.eigenvalues.len(), 3);
        assert!((g.growth_rate - 3.0f64.cbrt()).abs() < 1e-9);
        assert_eq!(g.dominant.im, 0.0);
        assert_eq!(g.trend, GrowthTrend::Increasing);
    }

    #[test]
    fn test_single_class_rate_is_fecundity() {
        let g = analyze(&[0.85], &[]);
        assert_eq!(g.growth_rate, 0.85);
        assert_eq!(g.trend, GrowthTrend::Decreasing);
    }

    #[test]
    fn test_single_class_replacement_is_stable() {
        let g = analyze(&[1.0], &[]);
        assert_eq!(g.growth_rate, 1.0);
        assert_eq!(g.trend, GrowthTrend::Stable);
    }

    #[test]
    fn test_two_class_replacement_is_stable() {
        // λ^2 - 1 = 0: the dominant roots are ±1, the tie-break picks +1.
        let g = analyze(&[0.0, 2.0], &[0.5]);
        assert_eq!(g.growth_rate, 1.0);
        assert_eq!(g.trend, GrowthTrend::Stable);
    }

    #[test]
    fn test_declining_population() {
        let g = analyze(&[0.0, 0.5, 0.8], &[0.4, 0.3]);
        assert!(g.growth_rate < 1.0);
        assert!(g.growth_rate > 0.0);
        assert_eq!(g.trend, GrowthTrend::Decreasing);
    }

    #[test]
    fn test_two_class_known_rate() {
        // λ^2 - 0.5λ - 0.8 = 0
        let g = analyze(&[0.5, 2.0], &[0.4]);
        let expected = (0.5 + (0.25f64 + 3.2).sqrt()) / 2.0;
        assert!((g.growth_rate - expected).abs() < 1e-12);
    }

    #[test]
    fn test_no_reproduction_collapses() {
        let g = analyze(&[0.0, 0.0, 0.0], &[0.9, 0.9]);
        assert_eq!(g.growth_rate, 0.0);
        assert_eq!(g.trend, GrowthTrend::Decreasing);
    }

    #[test]
    fn test_eigenvalues_sorted_by_magnitude() {
        let g = analyze(&[0.3, 1.2, 2.5, 0.8], &[0.7, 0.5, 0.4]);
        for pair in g.eigenvalues.windows(2) {
            assert!(pair[0].norm() >= pair[1].norm());
        }
        assert!((g.eigenvalues[0].norm() - g.dominant.norm()).abs() < 1e-9);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let a = analyze(&[0.0, 0.0, 20.0], &[0.5, 0.3]);
        let b = analyze(&[0.0, 0.0, 20.0], &[0.5, 0.3]);
        assert_eq!(a.growth_rate.to_bits(), b.growth_rate.to_bits());
        assert_eq!(a.eigenvalues, b.eigenvalues);
    }

    #[test]
    fn test_spectrum_holds_reported_dominant() {
        for (f, s) in [
            (vec![0.0, 2.0], vec![0.5]),
            (vec![0.0, 0.0, 20.0], vec![0.5, 0.3]),
            (vec![0.3, 1.2, 2.5, 0.8], vec![0.7, 0.5, 0.4]),
        ] {
            let g = analyze(&f, &s);
            assert!(g.eigenvalues.contains(&g.dominant));
            assert_eq!(g.dominant.re, g.growth_rate);
        }
    }

    #[test]
    fn test_extreme_fecundity_rates() {
        // λ^2 = f1 * s0, so λ = sqrt(f1).
        let g = analyze(&[0.0, 1e300], &[1.0]);
        assert!((g.growth_rate / 1e150 - 1.0).abs() < 1e-9);
        let g = analyze(&[0.0, 1e308], &[1.0]);
        assert!((g.growth_rate / 1e154 - 1.0).abs() < 1e-9);
        assert_eq!(g.trend, GrowthTrend::Increasing);
    }

    #[test]
    fn test_many_age_classes_satisfy_euler_lotka() {
        // Σ f_i l_i λ^-(i+1) = 1 holds for the dominant root.
        let n = 200;
        let fecundity: Vec<f64> = (0..n).map(|i| if i >= n / 2 { 0.5 } else { 0.0 }).collect();
        let survival = vec![0.95; n - 1];
        let m = LeslieMatrix::new(&fecundity, &survival).unwrap();
        let g = analyze_growth(&m).unwrap();

        let lambda = g.growth_rate;
        assert!(lambda > 0.9 && lambda < 1.0);
        let sum: f64 = fecundity
            .iter()
            .zip(m.survivorship())
            .enumerate()
            .map(|(i, (f, l))| f * l / lambda.powi(i as i32 + 1))
            .sum();
        assert!((sum - 1.0).abs() < 1e-6, "Euler-Lotka sum was {sum}");
        assert_eq!(g.trend, GrowthTrend::Decreasing);
    }

    #[test]
    fn test_non_finite_input_is_numerical_error() {
        let m = LeslieMatrix::new(&[f64::NAN, 1.0], &[0.5]).unwrap();
        let err = analyze_growth(&m).unwrap_err();
        assert!(matches!(err, LeslieError::NumericalError(_)));
    }
}
