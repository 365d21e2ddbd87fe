// Model evaluation: scores a fitted classifier on the held-out partition and
// collects the per-model results that training persists and charts read.

pub mod metrics;

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::features::matrix::SparseMatrix;
use crate::models::traits::SentimentClassifier;
use crate::models::ModelKind;
use crate::store::codec;
use metrics::{ClassMetrics, ConfusionMatrix};

/// Everything recorded about one model's test-set performance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub model_name: String,
    pub accuracy: f64,
    pub y_pred: Vec<i32>,
    pub confusion_matrix: ConfusionMatrix,
    pub classification_report: String,
    pub class_metrics: Vec<ClassMetrics>,
}

impl EvaluationResult {
    /// Build a result from actual and predicted labels.
    pub fn from_predictions(model_name: &str, y_true: &[i32], y_pred: Vec<i32>) -> Result<Self> {
        let accuracy = metrics::accuracy(y_true, &y_pred)?;
        let confusion_matrix = metrics::confusion_matrix(y_true, &y_pred)?;
        let class_metrics = metrics::class_metrics(&confusion_matrix);
        let classification_report = metrics::classification_report(&class_metrics, accuracy);

        Ok(Self {
            model_name: model_name.to_string(),
            accuracy,
            y_pred,
            confusion_matrix,
            classification_report,
            class_metrics,
        })
    }
}

/// Predict the test partition with `model` and score the predictions.
pub fn evaluate_model(
    model: &dyn SentimentClassifier,
    x_test: &SparseMatrix,
    y_test: &[i32],
) -> Result<EvaluationResult> {
    let y_pred = model.predict(x_test)?;
    let result = EvaluationResult::from_predictions(model.kind().display_name(), y_test, y_pred)?;
    debug!(
        model = model.kind().key(),
        accuracy = result.accuracy,
        "Evaluated model"
    );
    Ok(result)
}

/// Evaluation results keyed by model key. Serialized as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelResults(BTreeMap<String, EvaluationResult>);

impl ModelResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: ModelKind, result: EvaluationResult) {
        self.0.insert(kind.key().to_string(), result);
    }

    pub fn get(&self, kind: ModelKind) -> Option<&EvaluationResult> {
        self.0.get(kind.key())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Results for known models, in training order.
    pub fn in_training_order(&self) -> Vec<(ModelKind, &EvaluationResult)> {
        ModelKind::ALL
            .iter()
            .filter_map(|&kind| self.get(kind).map(|r| (kind, r)))
            .collect()
    }

    /// Highest-accuracy model. Ties go to the model trained first.
    pub fn best(&self) -> Option<(ModelKind, &EvaluationResult)> {
        self.in_training_order()
            .into_iter()
            .fold(None, |best, (kind, result)| match best {
                Some((_, b)) if b.accuracy >= result.accuracy => best,
                _ => Some((kind, result)),
            })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        codec::write_json(path, self)
    }

    pub fn load(path: &Path) -> Result<Self> {
        codec::read_json(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_accuracy(name: &str, y_pred: Vec<i32>) -> EvaluationResult {
        EvaluationResult::from_predictions(name, &[1, 0, 1, 0], y_pred).unwrap()
    }

    #[test]
    fn test_best_prefers_first_on_tie() {
        let mut results = ModelResults::new();
        results.insert(ModelKind::RandomForest, result_with_accuracy("rf", vec![1, 0, 1, 0]));
        results.insert(ModelKind::NaiveBayes, result_with_accuracy("nb", vec![1, 0, 1, 0]));
        results.insert(
            ModelKind::LogisticRegression,
            result_with_accuracy("lr", vec![1, 1, 1, 0]),
        );

        let (kind, best) = results.best().unwrap();
        assert_eq!(kind, ModelKind::NaiveBayes);
        assert_eq!(best.accuracy, 1.0);
    }

    #[test]
    fn test_best_of_empty_is_none() {
        assert!(ModelResults::new().best().is_none());
    }

    #[test]
    fn test_json_uses_model_keys() {
        let mut results = ModelResults::new();
        results.insert(ModelKind::NaiveBayes, result_with_accuracy("Naive Bayes", vec![0, 0, 1, 0]));
        let json = serde_json::to_value(&results).unwrap();
        assert!(json.get("naive_bayes").is_some());
        assert_eq!(json["naive_bayes"]["accuracy"], 0.75);
        assert_eq!(json["naive_bayes"]["confusion_matrix"][1][0], 1);
    }
}
