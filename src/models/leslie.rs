use nalgebra::{DMatrix, DVector};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::error::LeslieError;

/// An age-structured transition matrix.
///
/// Row 0 holds the fecundity of each age class and the sub-diagonal holds the
/// survival probability from class `i` to class `i + 1`. Every other entry is
/// zero. The only way to build one is [`LeslieMatrix::new`], so the sparsity
/// pattern always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct LeslieMatrix {
    matrix: DMatrix<f64>,
}

impl LeslieMatrix {
    /// Build the matrix from fecundity (length N) and survival (length N - 1).
    ///
    /// # Examples
    ///
    /// ```
    /// use leslie_projection::LeslieMatrix;
    ///
    /// let m = LeslieMatrix::new(&[0.0, 0.0, 20.0], &[0.5, 0.3]).unwrap();
    /// assert_eq!(m.dimension(), 3);
    /// assert_eq!(m.get(0, 2), 20.0);
    /// assert_eq!(m.get(1, 0), 0.5);
    /// assert_eq!(m.get(2, 1), 0.3);
    /// ```
    pub fn new(fecundity: &[f64], survival: &[f64]) -> Result<Self, LeslieError> {
        let n = fecundity.len();
        if n == 0 {
            return Err(LeslieError::ShapeMismatch(
                "fecundity vector must have at least one age class".to_string(),
            ));
        }
        if survival.len() != n - 1 {
            return Err(LeslieError::ShapeMismatch(format!(
                "{n} age classes need {} survival rates, got {}",
                n - 1,
                survival.len()
            )));
        }

        let mut matrix = DMatrix::zeros(n, n);
        for (j, &f) in fecundity.iter().enumerate() {
            matrix[(0, j)] = f;
        }
        for (i, &s) in survival.iter().enumerate() {
            matrix[(i + 1, i)] = s;
        }

        tracing::debug!(age_classes = n, "constructed Leslie matrix");
        Ok(Self { matrix })
    }

    /// Number of age classes (N).
    pub fn dimension(&self) -> usize {
        self.matrix.nrows()
    }

    /// Entry at (row, col). Panics if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.matrix[(row, col)]
    }

    /// Fecundity rates, i.e. row 0.
    pub fn fecundity(&self) -> Vec<f64> {
        self.matrix.row(0).iter().copied().collect()
    }

    /// Survival rates, i.e. the sub-diagonal.
    pub fn survival(&self) -> Vec<f64> {
        (0..self.dimension().saturating_sub(1))
            .map(|i| self.matrix[(i + 1, i)])
            .collect()
    }

    /// Survivorship to each age class: `l_0 = 1`, `l_i = s_0 * ... * s_(i-1)`.
    pub fn survivorship(&self) -> Vec<f64> {
        let mut l = Vec::with_capacity(self.dimension());
        let mut acc = 1.0;
        l.push(acc);
        for s in self.survival() {
            acc *= s;
            l.push(acc);
        }
        l
    }

    /// The matrix rows as plain vectors.
    pub fn rows(&self) -> Vec<Vec<f64>> {
        self.matrix
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }

    /// Borrow the underlying dense matrix.
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// One projection step: `matrix * population`.
    pub fn apply(&self, population: &DVector<f64>) -> Result<DVector<f64>, LeslieError> {
        if population.len() != self.dimension() {
            return Err(LeslieError::ShapeMismatch(format!(
                "population vector has {} entries, matrix has {} age classes",
                population.len(),
                self.dimension()
            )));
        }
        Ok(&self.matrix * population)
    }
}

impl std::fmt::Display for LeslieMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.matrix.row_iter() {
            let cells: Vec<String> = row.iter().map(|v| format!("{v:>8.3}")).collect();
            writeln!(f, "[{}]", cells.join(" "))?;
        }
        Ok(())
    }
}

impl Serialize for LeslieMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.dimension()))?;
        for row in self.rows() {
            seq.serialize_element(&row)?;
        }
        seq.end()
    }
}
