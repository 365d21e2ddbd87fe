// Corpus loader: reads the movie_reviews layout into labeled records.
//
// The corpus is a directory with one subdirectory per class (`pos/`, `neg/`),
// each holding one pre-tokenized review per `.txt` file. Positive reviews are
// loaded first, then negative, each in file-name order, so the record order is
// stable across runs and platforms.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::review::{Review, Sentiment};

/// Load every review in the corpus directory.
pub fn load_reviews(corpus_dir: &Path) -> Result<Vec<Review>> {
    let mut reviews = Vec::new();

    for sentiment in [Sentiment::Positive, Sentiment::Negative] {
        let category_dir = corpus_dir.join(sentiment.corpus_category());
        let files = review_files(&category_dir)?;
        debug!(
            category = sentiment.corpus_category(),
            files = files.len(),
            "Reading review files"
        );

        for path in files {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read review {}", path.display()))?;
            reviews.push(Review {
                text: join_words(&raw),
                sentiment,
            });
        }
    }

    if reviews.is_empty() {
        anyhow::bail!("No reviews found under {}", corpus_dir.display());
    }

    info!(reviews = reviews.len(), "Loaded review corpus");
    Ok(reviews)
}

/// List the `.txt` files in one category directory, sorted by file name.
fn review_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read corpus directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Flatten a pre-tokenized review (one sentence per line) into a single
/// space-joined string.
fn join_words(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, body: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn test_load_orders_positive_first_then_by_name() {
        let tmp = tempfile::tempdir().unwrap();
        write(&tmp.path().join("neg"), "cv001.txt", "dull plot .\n");
        write(&tmp.path().join("pos"), "cv002.txt", "great cast\n");
        write(&tmp.path().join("pos"), "cv000.txt", "loved it !\nreally\n");
        write(&tmp.path().join("pos"), "README", "not a review");

        let reviews = load_reviews(tmp.path()).unwrap();
        assert_eq!(reviews.len(), 3);
        assert_eq!(reviews[0].text, "loved it ! really");
        assert_eq!(reviews[0].sentiment, Sentiment::Positive);
        assert_eq!(reviews[1].text, "great cast");
        assert_eq!(reviews[2].sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_missing_category_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        write(&tmp.path().join("pos"), "a.txt", "fine");
        assert!(load_reviews(tmp.path()).is_err());
    }
}
