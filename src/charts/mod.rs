// PNG charts rendered from the processed review table and the persisted
// evaluation results.
//
// Drawing functions are generic over the plotters backend and return the
// backend's own error type; `render_all` owns the bitmap files and turns those
// errors into anyhow errors naming the chart.

pub mod confusion;
pub mod distribution;
pub mod models;
pub mod wordcloud;
pub mod words;

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;
use plotters::prelude::*;
use tracing::info;

use crate::corpus::review::{ProcessedReview, Sentiment};
use crate::evaluate::ModelResults;
use crate::store::paths::ArtifactPaths;

/// Slice and bar colors shared by the categorical charts.
pub const PALETTE: [RGBColor; 4] = [
    RGBColor(0xff, 0x99, 0x99),
    RGBColor(0x66, 0xb3, 0xff),
    RGBColor(0x99, 0xff, 0x99),
    RGBColor(0xff, 0xcc, 0x99),
];

/// Light-to-dark ramp for positive-review charts.
pub const GREEN_RAMP: (RGBColor, RGBColor) = (RGBColor(0xad, 0xdd, 0x8e), RGBColor(0x00, 0x45, 0x29));
/// Light-to-dark ramp for negative-review charts.
pub const PINK_RAMP: (RGBColor, RGBColor) = (RGBColor(0xfa, 0x9f, 0xb5), RGBColor(0x49, 0x00, 0x6a));
/// Light-to-dark ramp for confusion-matrix cells.
pub const BLUE_RAMP: (RGBColor, RGBColor) = (RGBColor(0xf7, 0xfb, 0xff), RGBColor(0x08, 0x30, 0x6b));

pub const FONT: &str = "sans-serif";

/// Linear interpolation between two colors, `t` clamped to [0, 1].
pub fn ramp(colors: (RGBColor, RGBColor), t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
    let (from, to) = colors;
    RGBColor(mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
}

/// Green for positive reviews, pink for negative ones.
pub fn sentiment_ramp(sentiment: Sentiment) -> (RGBColor, RGBColor) {
    match sentiment {
        Sentiment::Positive => GREEN_RAMP,
        Sentiment::Negative => PINK_RAMP,
    }
}

/// Word counts over the processed text of one class, most frequent first.
/// Equal counts are ordered alphabetically.
pub fn word_frequencies(reviews: &[ProcessedReview], sentiment: Sentiment) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for review in reviews.iter().filter(|r| r.sentiment() == sentiment) {
        for word in review.processed_text.split_whitespace() {
            *counts.entry(word).or_default() += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(word, count)| (word.to_string(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

/// Number of reviews per class, in label order.
pub fn class_counts(reviews: &[ProcessedReview]) -> Vec<(Sentiment, usize)> {
    Sentiment::ALL
        .iter()
        .map(|&s| (s, reviews.iter().filter(|r| r.sentiment() == s).count()))
        .collect()
}

fn draw_failed(chart: &str, err: impl std::fmt::Display) -> anyhow::Error {
    anyhow::anyhow!("Failed to render {chart}: {err}")
}

/// Render every chart into the results directory. Returns the written files.
pub fn render_all(
    paths: &ArtifactPaths,
    reviews: &[ProcessedReview],
    results: &ModelResults,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    let path = paths.chart("sentiment_distribution");
    {
        let root = BitMapBackend::new(&path, distribution::SIZE).into_drawing_area();
        distribution::draw(&root, &class_counts(reviews))
            .and_then(|_| root.present())
            .map_err(|e| draw_failed("sentiment distribution", e))?;
    }
    info!(path = %path.display(), "Saved sentiment distribution chart");
    written.push(path);

    let positive = word_frequencies(reviews, Sentiment::Positive);
    let negative = word_frequencies(reviews, Sentiment::Negative);

    let path = paths.chart("word_clouds");
    {
        let root = BitMapBackend::new(&path, wordcloud::SIZE).into_drawing_area();
        wordcloud::draw(&root, &positive, &negative)
            .and_then(|_| root.present())
            .map_err(|e| draw_failed("word clouds", e))?;
    }
    info!(path = %path.display(), "Saved word clouds");
    written.push(path);

    let path = paths.chart("common_words");
    {
        let root = BitMapBackend::new(&path, words::SIZE).into_drawing_area();
        words::draw(&root, &positive, &negative)
            .and_then(|_| root.present())
            .map_err(|e| draw_failed("common words chart", e))?;
    }
    info!(path = %path.display(), "Saved common words chart");
    written.push(path);

    let path = paths.chart("model_comparison");
    {
        let root = BitMapBackend::new(&path, models::SIZE).into_drawing_area();
        models::draw(&root, results)
            .and_then(|_| root.present())
            .map_err(|e| draw_failed("model comparison", e))?;
    }
    info!(path = %path.display(), "Saved model comparison chart");
    written.push(path);

    let path = paths.chart("confusion_matrices");
    {
        let size = confusion::size_for(results.len());
        let root = BitMapBackend::new(&path, size).into_drawing_area();
        confusion::draw(&root, results)
            .and_then(|_| root.present())
            .map_err(|e| draw_failed("confusion matrices", e))?;
    }
    info!(path = %path.display(), "Saved confusion matrices");
    written.push(path);

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(sentiment: i32, processed: &str) -> ProcessedReview {
        ProcessedReview {
            text: String::new(),
            sentiment,
            cleaned_text: String::new(),
            processed_text: processed.to_string(),
        }
    }

    #[test]
    fn test_word_frequencies_split_by_class() {
        let reviews = vec![
            review(1, "great plot great acting"),
            review(0, "dull plot"),
            review(1, "acting"),
        ];
        let pos = word_frequencies(&reviews, Sentiment::Positive);
        assert_eq!(
            pos,
            vec![
                ("acting".to_string(), 2),
                ("great".to_string(), 2),
                ("plot".to_string(), 1),
            ]
        );
        let neg = word_frequencies(&reviews, Sentiment::Negative);
        assert_eq!(neg.len(), 2);
    }

    #[test]
    fn test_class_counts_in_label_order() {
        let reviews = vec![review(1, "a"), review(1, "b"), review(0, "c")];
        assert_eq!(
            class_counts(&reviews),
            vec![(Sentiment::Negative, 1), (Sentiment::Positive, 2)]
        );
    }

    #[test]
    fn test_ramp_endpoints_and_clamp() {
        assert_eq!(ramp(BLUE_RAMP, 0.0), BLUE_RAMP.0);
        assert_eq!(ramp(BLUE_RAMP, 1.0), BLUE_RAMP.1);
        assert_eq!(ramp(BLUE_RAMP, 7.0), BLUE_RAMP.1);
        let mid = ramp((RGBColor(0, 0, 0), RGBColor(200, 100, 50)), 0.5);
        assert_eq!(mid, RGBColor(100, 50, 25));
    }
}
