// Colored terminal output for evaluation results and predictions.
//
// The pipeline stages and main.rs delegate all formatting here.

use std::time::Duration;

use colored::{ColoredString, Colorize};

use crate::corpus::review::Sentiment;
use crate::evaluate::{EvaluationResult, ModelResults};
use crate::models::ModelKind;
use crate::pipeline::predict::Prediction;

/// Color an accuracy: green at 0.80 and above, yellow from 0.65, red below.
pub fn colorize_accuracy(accuracy: f64) -> ColoredString {
    let text = format!("{accuracy:.4}");
    if accuracy >= 0.80 {
        text.green()
    } else if accuracy >= 0.65 {
        text.yellow()
    } else {
        text.red()
    }
}

fn colorize_sentiment(sentiment: Sentiment) -> ColoredString {
    match sentiment {
        Sentiment::Positive => sentiment.as_str().green().bold(),
        Sentiment::Negative => sentiment.as_str().red().bold(),
    }
}

/// Display one model's evaluation right after it is trained.
pub fn display_model_result(result: &EvaluationResult, elapsed: Duration) {
    println!(
        "    {} accuracy: {}  ({:.2}s)",
        result.model_name,
        colorize_accuracy(result.accuracy),
        elapsed.as_secs_f64()
    );
    println!("\n{}", result.classification_report);

    let [[tn, fp], [fn_, tp]] = result.confusion_matrix;
    println!("    {}", "Confusion matrix (rows: actual, columns: predicted)".dimmed());
    println!("    {:>10} {:>9} {:>9}", "", "Negative", "Positive");
    println!("    {:>10} {:>9} {:>9}", "Negative", tn, fp);
    println!("    {:>10} {:>9} {:>9}", "Positive", fn_, tp);
    println!();
}

/// Display the accuracy of every model in training order.
pub fn display_results_table(results: &ModelResults) {
    if results.is_empty() {
        println!("No model results yet. Run `sentiscope` without --skip-training first.");
        return;
    }

    println!("\n{}", "=== Model Accuracy ===".bold());
    println!("  {:<22} {:>8}", "Model".dimmed(), "Accuracy".dimmed());
    println!("  {}", "-".repeat(31).dimmed());

    let best = results.best().map(|(kind, _)| kind);
    for (kind, result) in results.in_training_order() {
        let marker = if Some(kind) == best { "*" } else { " " };
        println!(
            "  {:<22} {:>8} {}",
            result.model_name,
            colorize_accuracy(result.accuracy),
            marker.bold()
        );
    }
}

/// Announce the highest-accuracy model.
pub fn display_best_model(kind: ModelKind, accuracy: f64) {
    println!(
        "\n  Best model: {} (accuracy {})",
        kind.display_name().bold(),
        colorize_accuracy(accuracy)
    );
}

/// Display a single-text prediction.
pub fn display_prediction(text: &str, prediction: &Prediction) {
    println!("\n{}", "=== Prediction ===".bold());
    println!("  Text:      {}", super::truncate_chars(text, 120).dimmed());
    println!("  Model:     {}", prediction.model);
    println!("  Sentiment: {}", colorize_sentiment(prediction.sentiment));
    if prediction.known_terms == 0 {
        println!(
            "  {}",
            "No words from the text are in the trained vocabulary.".yellow()
        );
    } else {
        println!("  Known terms: {}", prediction.known_terms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_formatting_keeps_four_decimals() {
        colored::control::set_override(false);
        assert_eq!(colorize_accuracy(0.8125).to_string(), "0.8125");
        assert_eq!(colorize_accuracy(0.5).to_string(), "0.5000");
    }
}
