// Random forest via smartcore, seeded so reruns grow the same trees.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_classifier::{
    RandomForestClassifier, RandomForestClassifierParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;
use tracing::info;

use super::traits::SentimentClassifier;
use super::{check_training_data, dense_matrix, ModelKind};
use crate::features::matrix::SparseMatrix;
use crate::store::codec::write_bincode;

type Inner = RandomForestClassifier<f64, i32, DenseMatrix<f64>, Vec<i32>>;

#[derive(Serialize, Deserialize)]
pub struct ForestModel {
    inner: Inner,
}

impl ForestModel {
    pub fn fit(x: &SparseMatrix, y: &[i32], n_trees: u16, seed: u64) -> Result<Self> {
        check_training_data(x, y)?;
        let start = Instant::now();

        let params = RandomForestClassifierParameters {
            n_trees: n_trees.into(),
            seed,
            ..Default::default()
        };

        let dense = dense_matrix(x)?;
        let labels = y.to_vec();
        let inner = RandomForestClassifier::fit(&dense, &labels, params)
            .map_err(|e| anyhow::anyhow!("Random forest training failed: {e}"))?;

        info!(
            samples = x.n_rows(),
            features = x.n_cols(),
            trees = n_trees,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Trained random forest"
        );
        Ok(Self { inner })
    }
}

impl SentimentClassifier for ForestModel {
    fn kind(&self) -> ModelKind {
        ModelKind::RandomForest
    }

    fn predict(&self, features: &SparseMatrix) -> Result<Vec<i32>> {
        if features.n_rows() == 0 {
            return Ok(Vec::new());
        }
        let dense = dense_matrix(features)?;
        self.inner
            .predict(&dense)
            .map_err(|e| anyhow::anyhow!("Random forest prediction failed: {e}"))
    }

    fn save(&self, path: &Path) -> Result<()> {
        write_bincode(path, self)
    }
}
