// Sentiment classifiers: three independent models behind one trait.
//
// Logistic regression and random forest delegate to smartcore. Multinomial
// naive Bayes is computed in closed form here because smartcore's version only
// accepts integer count features, and TF-IDF weights are real-valued.

pub mod forest;
pub mod logistic;
pub mod naive_bayes;
pub mod traits;

use std::fmt;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::config::Config;
use crate::features::matrix::SparseMatrix;
use traits::SentimentClassifier;

/// The classifier families trained by the pipeline.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum ModelKind {
    LogisticRegression,
    NaiveBayes,
    RandomForest,
}

impl ModelKind {
    /// Every model, in training order.
    pub const ALL: [ModelKind; 3] = [
        ModelKind::LogisticRegression,
        ModelKind::NaiveBayes,
        ModelKind::RandomForest,
    ];

    /// Stable snake_case key used for file names and the results map.
    pub fn key(self) -> &'static str {
        match self {
            ModelKind::LogisticRegression => "logistic_regression",
            ModelKind::NaiveBayes => "naive_bayes",
            ModelKind::RandomForest => "random_forest",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ModelKind::LogisticRegression => "Logistic Regression",
            ModelKind::NaiveBayes => "Naive Bayes",
            ModelKind::RandomForest => "Random Forest",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.key() == key)
    }

    /// Fit this kind of model on the training partition.
    pub fn train(
        self,
        x: &SparseMatrix,
        y: &[i32],
        config: &Config,
    ) -> Result<Box<dyn SentimentClassifier>> {
        Ok(match self {
            ModelKind::LogisticRegression => Box::new(logistic::LogisticModel::fit(
                x,
                y,
                logistic::DEFAULT_ALPHA,
            )?),
            ModelKind::NaiveBayes => Box::new(naive_bayes::NaiveBayesModel::fit(
                x,
                y,
                naive_bayes::DEFAULT_ALPHA,
            )?),
            ModelKind::RandomForest => Box::new(forest::ForestModel::fit(
                x,
                y,
                config.forest_trees,
                config.seed,
            )?),
        })
    }

    /// Load a persisted model of this kind.
    pub fn load(self, path: &Path) -> Result<Box<dyn SentimentClassifier>> {
        Ok(match self {
            ModelKind::LogisticRegression => {
                Box::new(crate::store::codec::read_bincode::<logistic::LogisticModel>(path)?)
            }
            ModelKind::NaiveBayes => {
                Box::new(crate::store::codec::read_bincode::<naive_bayes::NaiveBayesModel>(path)?)
            }
            ModelKind::RandomForest => {
                Box::new(crate::store::codec::read_bincode::<forest::ForestModel>(path)?)
            }
        })
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Expand a sparse feature matrix into smartcore's dense representation.
pub(crate) fn dense_matrix(x: &SparseMatrix) -> Result<DenseMatrix<f64>> {
    let rows = x.to_dense();
    DenseMatrix::from_2d_vec(&rows)
        .map_err(|e| anyhow::anyhow!("Failed to build feature matrix: {e}"))
}

/// Reject training data the classifiers cannot learn from.
pub(crate) fn check_training_data(x: &SparseMatrix, y: &[i32]) -> Result<()> {
    if x.n_rows() == 0 {
        anyhow::bail!("Training partition is empty");
    }
    if x.n_rows() != y.len() {
        anyhow::bail!(
            "Feature matrix has {} rows but there are {} labels",
            x.n_rows(),
            y.len()
        );
    }
    let first = y[0];
    if y.iter().all(|&label| label == first) {
        anyhow::bail!("Training labels contain a single class ({first}); need both sentiments");
    }
    Ok(())
}
