// Logistic regression via smartcore (L-BFGS solver, L2 penalty).

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::logistic_regression::{LogisticRegression, LogisticRegressionParameters};
use tracing::info;

use super::traits::SentimentClassifier;
use super::{check_training_data, dense_matrix, ModelKind};
use crate::features::matrix::SparseMatrix;
use crate::store::codec::write_bincode;

/// L2 penalty strength: the objective is the summed log loss plus
/// `alpha / 2 * ||w||^2`, with the intercept unpenalized.
pub const DEFAULT_ALPHA: f64 = 1.0;

type Inner = LogisticRegression<f64, i32, DenseMatrix<f64>, Vec<i32>>;

#[derive(Serialize, Deserialize)]
pub struct LogisticModel {
    inner: Inner,
}

impl LogisticModel {
    pub fn fit(x: &SparseMatrix, y: &[i32], alpha: f64) -> Result<Self> {
        check_training_data(x, y)?;
        let start = Instant::now();

        let dense = dense_matrix(x)?;
        let labels = y.to_vec();
        let params = LogisticRegressionParameters::default().with_alpha(alpha);
        let inner = LogisticRegression::fit(&dense, &labels, params)
            .map_err(|e| anyhow::anyhow!("Logistic regression training failed: {e}"))?;

        info!(
            samples = x.n_rows(),
            alpha,
            features = x.n_cols(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Trained logistic regression"
        );
        Ok(Self { inner })
    }
}

impl SentimentClassifier for LogisticModel {
    fn kind(&self) -> ModelKind {
        ModelKind::LogisticRegression
    }

    fn predict(&self, features: &SparseMatrix) -> Result<Vec<i32>> {
        if features.n_rows() == 0 {
            return Ok(Vec::new());
        }
        let dense = dense_matrix(features)?;
        self.inner
            .predict(&dense)
            .map_err(|e| anyhow::anyhow!("Logistic regression prediction failed: {e}"))
    }

    fn save(&self, path: &Path) -> Result<()> {
        write_bincode(path, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartcore::linalg::basic::arrays::Array;

    fn weight_norm(model: &LogisticModel) -> f64 {
        let w = model.inner.coefficients();
        let (rows, cols) = w.shape();
        let mut sum = 0.0;
        for r in 0..rows {
            for c in 0..cols {
                let v = *w.get((r, c));
                sum += v * v;
            }
        }
        sum.sqrt()
    }

    fn separable() -> (SparseMatrix, Vec<i32>) {
        let mut x = SparseMatrix::new(2);
        x.push_row(&[(0, 1.0)]);
        x.push_row(&[(0, 0.9), (1, 0.1)]);
        x.push_row(&[(1, 1.0)]);
        x.push_row(&[(0, 0.1), (1, 0.9)]);
        (x, vec![1, 1, 0, 0])
    }

    #[test]
    fn test_penalty_bounds_weights_on_separable_data() {
        let (x, y) = separable();
        let penalized = LogisticModel::fit(&x, &y, DEFAULT_ALPHA).unwrap();
        let unpenalized = LogisticModel::fit(&x, &y, 0.0).unwrap();

        let bounded = weight_norm(&penalized);
        assert!(bounded < weight_norm(&unpenalized));
        assert!(bounded < 5.0, "weight norm {bounded}");
        assert_eq!(penalized.predict(&x).unwrap(), y);
    }
}
