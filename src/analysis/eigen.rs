use num_complex::Complex64;

use crate::error::LeslieError;
use crate::models::LeslieMatrix;

const MAX_SCHUR_ITERATIONS: usize = 100_000;
const NEWTON_POLISH_STEPS: usize = 4;

/// Coefficients of `det(λI - L)`, highest degree first.
///
/// For a Leslie matrix this is `λ^N - Σ f_i l_i λ^(N-1-i)` where `l_i` is the
/// survivorship to age class `i`.
pub(crate) fn characteristic_polynomial(matrix: &LeslieMatrix) -> Vec<f64> {
    let mut coeffs = Vec::with_capacity(matrix.dimension() + 1);
    coeffs.push(1.0);
    for (f, l) in matrix.fecundity().iter().zip(matrix.survivorship()) {
        coeffs.push(-(f * l));
    }
    coeffs
}

/// All eigenvalues of a Leslie matrix, possibly complex.
pub(crate) fn eigenvalues(matrix: &LeslieMatrix) -> Result<Vec<Complex64>, LeslieError> {
    eigenvalues_with_limit(matrix, MAX_SCHUR_ITERATIONS)
}

/// Eigenvalues from a real Schur decomposition capped at `max_iterations`
/// QR sweeps.
///
/// Age classes past the last one with `f_i * l_i != 0` only contribute the
/// factor `λ^k` to the characteristic polynomial, so they are exact zero
/// eigenvalues and the decomposition runs on the leading block alone.
pub(crate) fn eigenvalues_with_limit(
    matrix: &LeslieMatrix,
    max_iterations: usize,
) -> Result<Vec<Complex64>, LeslieError> {
    if matrix.as_matrix().iter().any(|v| !v.is_finite()) {
        return Err(LeslieError::NumericalError(
            "matrix has non-finite entries".to_string(),
        ));
    }

    let coeffs = characteristic_polynomial(matrix);
    let active = coeffs.iter().rposition(|&c| c != 0.0).unwrap_or(0);

    let mut roots = vec![Complex64::new(0.0, 0.0); matrix.dimension() - active];
    if active > 0 {
        let block = matrix
            .as_matrix()
            .view((0, 0), (active, active))
            .clone_owned();
        let schur = block
            .try_schur(f64::EPSILON, max_iterations)
            .ok_or_else(|| {
                LeslieError::NumericalError(format!(
                    "Schur decomposition did not converge within {max_iterations} iterations"
                ))
            })?;
        roots.extend(schur.complex_eigenvalues().iter().copied());
    }

    tracing::debug!(
        dimension = matrix.dimension(),
        zero_roots = matrix.dimension() - active,
        "eigenvalues computed"
    );
    Ok(roots)
}

/// Refine a real root with Newton steps along the real axis. Keeps the input
/// if no step improves the residual.
pub(crate) fn polish_real_root(coeffs: &[f64], x: f64) -> f64 {
    let mut best = x;
    let mut best_residual = eval_real(coeffs, x).0.abs();

    for _ in 0..NEWTON_POLISH_STEPS {
        if best_residual == 0.0 || !best_residual.is_finite() {
            break;
        }
        let (p, dp) = eval_real(coeffs, best);
        if dp == 0.0 || !dp.is_finite() {
            break;
        }
        let candidate = best - p / dp;
        let residual = eval_real(coeffs, candidate).0.abs();
        if !candidate.is_finite() || residual >= best_residual {
            break;
        }
        best = candidate;
        best_residual = residual;
    }

    best
}

/// Value and derivative at a real point (Horner).
fn eval_real(coeffs: &[f64], x: f64) -> (f64, f64) {
    let mut p = 0.0;
    let mut dp = 0.0;
    for &c in coeffs {
        dp = dp * x + p;
        p = p * x + c;
    }
    (p, dp)
}
