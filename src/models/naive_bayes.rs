// Multinomial naive Bayes over real-valued (TF-IDF) features.
//
// Fitting is closed-form: per-class feature totals with additive (Laplace)
// smoothing give the feature log-probabilities, and class frequencies give the
// log priors. Prediction is an argmax over prior + x · log_prob, computed
// directly on the sparse rows.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::traits::SentimentClassifier;
use super::{check_training_data, ModelKind};
use crate::features::matrix::SparseMatrix;
use crate::store::codec::write_bincode;

/// Additive smoothing applied to every feature count.
pub const DEFAULT_ALPHA: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaiveBayesModel {
    alpha: f64,
    /// Distinct training labels, ascending
    classes: Vec<i32>,
    class_log_prior: Vec<f64>,
    /// `[class][feature]`
    feature_log_prob: Vec<Vec<f64>>,
}

impl NaiveBayesModel {
    pub fn fit(x: &SparseMatrix, y: &[i32], alpha: f64) -> Result<Self> {
        check_training_data(x, y)?;
        if alpha <= 0.0 {
            anyhow::bail!("Naive Bayes smoothing alpha must be positive, got {alpha}");
        }
        let start = Instant::now();

        let mut classes: Vec<i32> = y.to_vec();
        classes.sort_unstable();
        classes.dedup();

        let n_features = x.n_cols();
        let mut feature_count = vec![vec![0.0; n_features]; classes.len()];
        let mut class_count = vec![0usize; classes.len()];

        for (i, label) in y.iter().enumerate() {
            let c = classes.binary_search(label).expect("label drawn from classes");
            class_count[c] += 1;
            for (col, value) in x.row(i) {
                if value < 0.0 {
                    anyhow::bail!(
                        "Naive Bayes needs non-negative features (row {i}, column {col} is {value})"
                    );
                }
                feature_count[c][col] += value;
            }
        }

        let n_samples = y.len() as f64;
        let class_log_prior = class_count
            .iter()
            .map(|&count| (count as f64).ln() - n_samples.ln())
            .collect();

        let feature_log_prob = feature_count
            .iter()
            .map(|counts| {
                let total: f64 = counts.iter().sum::<f64>() + alpha * n_features as f64;
                counts
                    .iter()
                    .map(|&count| (count + alpha).ln() - total.ln())
                    .collect()
            })
            .collect();

        info!(
            samples = x.n_rows(),
            features = n_features,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Trained naive Bayes"
        );

        Ok(Self {
            alpha,
            classes,
            class_log_prior,
            feature_log_prob,
        })
    }

    /// Unnormalized log posterior of each class for one row.
    fn joint_log_likelihood(&self, features: &SparseMatrix, row: usize) -> Vec<f64> {
        self.class_log_prior
            .iter()
            .zip(&self.feature_log_prob)
            .map(|(prior, log_prob)| {
                prior
                    + features
                        .row(row)
                        .map(|(col, value)| value * log_prob[col])
                        .sum::<f64>()
            })
            .collect()
    }
}

impl SentimentClassifier for NaiveBayesModel {
    fn kind(&self) -> ModelKind {
        ModelKind::NaiveBayes
    }

    fn predict(&self, features: &SparseMatrix) -> Result<Vec<i32>> {
        let expected = self.feature_log_prob.first().map_or(0, Vec::len);
        if features.n_cols() != expected {
            anyhow::bail!(
                "Naive Bayes was trained on {expected} features but got {}",
                features.n_cols()
            );
        }

        let predictions = (0..features.n_rows())
            .map(|row| {
                let scores = self.joint_log_likelihood(features, row);
                // First maximum wins, so ties go to the lower label
                let best = scores
                    .iter()
                    .enumerate()
                    .fold(0, |best, (c, &s)| if s > scores[best] { c } else { best });
                self.classes[best]
            })
            .collect();
        Ok(predictions)
    }

    fn save(&self, path: &Path) -> Result<()> {
        write_bincode(path, self)
    }
}
