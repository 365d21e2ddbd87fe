// Preprocessing stage: corpus -> processed table, fitted vectorizer, and the
// train/test feature matrices.
//
// The vectorizer is fitted on every processed review before the split, so the
// test partition shares the training vocabulary. Every artifact this stage
// writes is overwritten on each run.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::config::Config;
use crate::corpus::loader::load_reviews;
use crate::corpus::review::{ProcessedReview, Review};
use crate::features::split::train_test_split;
use crate::features::tfidf::TfidfVectorizer;
use crate::store::codec;
use crate::store::paths::ArtifactPaths;
use crate::text::filter::LinguisticFilter;

/// Counts reported after preprocessing.
#[derive(Debug, Clone, PartialEq)]
pub struct PreprocessSummary {
    pub reviews: usize,
    pub features: usize,
    pub train_rows: usize,
    pub test_rows: usize,
}

/// Stage entry point.
pub fn run(config: &Config) -> Result<()> {
    config.require_corpus()?;
    let reviews = load_reviews(&config.corpus_dir)?;
    println!("  Loaded {} reviews", reviews.len());

    let summary = preprocess_reviews(&reviews, config)?;
    println!(
        "  Vocabulary: {} terms, train: {} reviews, test: {} reviews",
        summary.features, summary.train_rows, summary.test_rows
    );
    Ok(())
}

/// Clean, filter, vectorize and split `reviews`, writing every
/// preprocessing artifact under the configured directories.
pub fn preprocess_reviews(reviews: &[Review], config: &Config) -> Result<PreprocessSummary> {
    let paths = ArtifactPaths::from_config(config);
    paths.ensure_dirs()?;

    let processed = process_reviews(reviews);
    codec::write_csv(&paths.processed_reviews(), &processed)?;
    info!(
        rows = processed.len(),
        path = %paths.processed_reviews().display(),
        "Saved processed reviews"
    );

    let documents: Vec<String> = processed.iter().map(|r| r.processed_text.clone()).collect();
    let labels: Vec<i32> = processed.iter().map(|r| r.sentiment).collect();

    let mut vectorizer = TfidfVectorizer::new(config.max_features);
    let features = vectorizer.fit_transform(&documents)?;
    vectorizer.save(&paths.vectorizer())?;

    let split = train_test_split(&features, &labels, config.test_size, config.seed)?;
    codec::write_bincode(&paths.x_train(), &split.x_train)?;
    codec::write_bincode(&paths.x_test(), &split.x_test)?;
    codec::write_bincode(&paths.y_train(), &split.y_train)?;
    codec::write_bincode(&paths.y_test(), &split.y_test)?;

    info!(
        train = split.y_train.len(),
        test = split.y_test.len(),
        features = vectorizer.n_features(),
        "Saved train/test split"
    );

    Ok(PreprocessSummary {
        reviews: processed.len(),
        features: vectorizer.n_features(),
        train_rows: split.y_train.len(),
        test_rows: split.y_test.len(),
    })
}

/// Run the normalizer and linguistic filter over every review, in order.
pub fn process_reviews(reviews: &[Review]) -> Vec<ProcessedReview> {
    let filter = LinguisticFilter::default();

    let pb = ProgressBar::new(reviews.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("    Processing [{bar:40.cyan/blue}] {pos}/{len} reviews")
            .expect("valid template")
            .progress_chars("=> "),
    );

    let processed = reviews
        .iter()
        .map(|review| {
            let (cleaned_text, processed_text) = filter.prepare(&review.text);
            pb.inc(1);
            ProcessedReview {
                text: review.text.clone(),
                sentiment: review.sentiment.label(),
                cleaned_text,
                processed_text,
            }
        })
        .collect();

    pb.finish_and_clear();
    processed
}
