// Single-text inference against the persisted vectorizer and a trained model.

use anyhow::Result;
use tracing::{debug, warn};

use crate::config::Config;
use crate::corpus::review::Sentiment;
use crate::features::matrix::SparseMatrix;
use crate::features::tfidf::TfidfVectorizer;
use crate::models::ModelKind;
use crate::store::paths::{require_artifacts, ArtifactPaths};
use crate::text::filter::LinguisticFilter;

/// The outcome of classifying one text.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub model: ModelKind,
    pub sentiment: Sentiment,
    /// The text after cleaning and filtering, as the vectorizer saw it
    pub processed_text: String,
    /// Vocabulary terms found in the text
    pub known_terms: usize,
}

/// Classify `text` with the persisted model of the given kind.
pub fn predict(config: &Config, model: ModelKind, text: &str) -> Result<Prediction> {
    let paths = ArtifactPaths::from_config(config);
    require_artifacts(&[paths.vectorizer()], "preprocessing")?;
    require_artifacts(&[paths.model(model)], "training")?;

    let vectorizer = TfidfVectorizer::load(&paths.vectorizer())?;
    let classifier = model.load(&paths.model(model))?;

    let (_, processed_text) = LinguisticFilter::default().prepare(text);
    let row = vectorizer.transform_document(&processed_text);
    if row.is_empty() {
        warn!("None of the input words are in the vocabulary; prediction is uninformed");
    }

    let mut features = SparseMatrix::new(vectorizer.n_features());
    features.push_row(&row);
    let labels = classifier.predict(&features)?;
    let label = labels
        .first()
        .copied()
        .ok_or_else(|| anyhow::anyhow!("{model} returned no prediction"))?;
    debug!(model = model.key(), label, "Predicted");

    Ok(Prediction {
        model,
        sentiment: Sentiment::from_label(label),
        processed_text,
        known_terms: row.len(),
    })
}
