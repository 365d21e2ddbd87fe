// Classifier trait: the seam every model sits behind.
//
// The pipeline trains, evaluates, saves and reloads models only through this
// trait, so adding a fourth model touches ModelKind and nothing else.

use std::path::Path;

use anyhow::Result;

use super::ModelKind;
use crate::features::matrix::SparseMatrix;

/// A fitted binary sentiment classifier over TF-IDF features.
pub trait SentimentClassifier {
    fn kind(&self) -> ModelKind;

    /// Predict a label (0 = negative, 1 = positive) for every row.
    fn predict(&self, features: &SparseMatrix) -> Result<Vec<i32>>;

    /// Persist the fitted model.
    fn save(&self, path: &Path) -> Result<()>;
}
