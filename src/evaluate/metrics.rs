// Binary classification metrics over 0/1 label vectors.
//
// Confusion rows are actual classes, columns are predicted classes, and an
// undefined precision/recall/F1 is reported as 0.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::corpus::review::Sentiment;

/// 2x2 counts, `matrix[actual][predicted]`, indexed by label.
pub type ConfusionMatrix = [[u32; 2]; 2];

/// Precision, recall, F1 and support for one class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    pub class_name: String,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub support: u32,
}

fn check_lengths(y_true: &[i32], y_pred: &[i32]) -> Result<()> {
    if y_true.len() != y_pred.len() {
        anyhow::bail!(
            "Label count mismatch: {} actual vs {} predicted",
            y_true.len(),
            y_pred.len()
        );
    }
    if y_true.is_empty() {
        anyhow::bail!("Cannot evaluate an empty test set");
    }
    let valid = |label: &i32| Sentiment::ALL.iter().any(|s| s.label() == *label);
    if let Some(bad) = y_true.iter().chain(y_pred).find(|l| !valid(l)) {
        anyhow::bail!("Invalid sentiment label {bad}: expected 0 or 1");
    }
    Ok(())
}

/// Fraction of predictions equal to the actual label.
pub fn accuracy(y_true: &[i32], y_pred: &[i32]) -> Result<f64> {
    check_lengths(y_true, y_pred)?;
    let correct = y_true.iter().zip(y_pred).filter(|(t, p)| t == p).count();
    Ok(correct as f64 / y_true.len() as f64)
}

pub fn confusion_matrix(y_true: &[i32], y_pred: &[i32]) -> Result<ConfusionMatrix> {
    check_lengths(y_true, y_pred)?;
    let mut matrix = [[0u32; 2]; 2];
    for (&t, &p) in y_true.iter().zip(y_pred) {
        let actual = Sentiment::from_label(t).label() as usize;
        let predicted = Sentiment::from_label(p).label() as usize;
        matrix[actual][predicted] += 1;
    }
    Ok(matrix)
}

fn ratio(num: u32, den: u32) -> f64 {
    if den == 0 {
        0.0
    } else {
        f64::from(num) / f64::from(den)
    }
}

/// Per-class metrics in label order (Negative, Positive).
pub fn class_metrics(matrix: &ConfusionMatrix) -> Vec<ClassMetrics> {
    Sentiment::ALL
        .iter()
        .map(|&class| {
            let c = class.label() as usize;
            let other = 1 - c;
            let tp = matrix[c][c];
            let fp = matrix[other][c];
            let fn_ = matrix[c][other];

            let precision = ratio(tp, tp + fp);
            let recall = ratio(tp, tp + fn_);
            let f1_score = if precision + recall == 0.0 {
                0.0
            } else {
                2.0 * precision * recall / (precision + recall)
            };

            ClassMetrics {
                class_name: class.as_str().to_string(),
                precision,
                recall,
                f1_score,
                support: tp + fn_,
            }
        })
        .collect()
}

const REPORT_WIDTH: usize = "weighted avg".len();

/// Render the plain-text classification report.
///
/// ```text
///               precision    recall  f1-score   support
///
///     Negative       0.85      0.83      0.84       199
///     Positive       0.84      0.86      0.85       201
///
///     accuracy                           0.84       400
///    macro avg       0.84      0.84      0.84       400
/// weighted avg       0.84      0.84      0.84       400
/// ```
pub fn classification_report(metrics: &[ClassMetrics], accuracy: f64) -> String {
    let w = REPORT_WIDTH;
    let mut report = format!(
        "{:>w$}  {:>9} {:>9} {:>9} {:>9}\n\n",
        "", "precision", "recall", "f1-score", "support"
    );

    for m in metrics {
        report.push_str(&metric_row(
            &m.class_name,
            m.precision,
            m.recall,
            m.f1_score,
            m.support,
        ));
    }
    report.push('\n');

    let total: u32 = metrics.iter().map(|m| m.support).sum();
    report.push_str(&format!(
        "{:>w$}  {:>9} {:>9} {:>9.2} {:>9}\n",
        "accuracy", "", "", accuracy, total
    ));

    let n = metrics.len().max(1) as f64;
    let macro_avg = |f: fn(&ClassMetrics) -> f64| metrics.iter().map(f).sum::<f64>() / n;
    report.push_str(&metric_row(
        "macro avg",
        macro_avg(|m| m.precision),
        macro_avg(|m| m.recall),
        macro_avg(|m| m.f1_score),
        total,
    ));

    let weighted_avg = |f: fn(&ClassMetrics) -> f64| {
        if total == 0 {
            0.0
        } else {
            metrics
                .iter()
                .map(|m| f(m) * f64::from(m.support))
                .sum::<f64>()
                / f64::from(total)
        }
    };
    report.push_str(&metric_row(
        "weighted avg",
        weighted_avg(|m| m.precision),
        weighted_avg(|m| m.recall),
        weighted_avg(|m| m.f1_score),
        total,
    ));

    report
}

fn metric_row(heading: &str, precision: f64, recall: f64, f1: f64, support: u32) -> String {
    let w = REPORT_WIDTH;
    format!("{heading:>w$}  {precision:>9.2} {recall:>9.2} {f1:>9.2} {support:>9}\n")
}
