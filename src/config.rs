use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

/// Central configuration loaded from environment variables.
///
/// Every field has a default, so a bare `sentiscope` run works out of the box.
/// The .env file is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the `pos/` and `neg/` review folders
    pub corpus_dir: PathBuf,
    /// Feature matrices, label vectors and the processed review table
    pub data_dir: PathBuf,
    /// Fitted vectorizer, trained models and the evaluation results
    pub models_dir: PathBuf,
    /// Rendered PNG charts
    pub results_dir: PathBuf,
    /// Vocabulary size cap for the TF-IDF vectorizer
    pub max_features: usize,
    /// Fraction of the corpus held out for evaluation, in (0, 1)
    pub test_size: f64,
    /// Seed shared by the train/test shuffle and the random forest
    pub seed: u64,
    /// Number of trees in the random forest
    pub forest_trees: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus_dir: crate::corpus::download::default_corpus_dir(),
            data_dir: PathBuf::from("data"),
            models_dir: PathBuf::from("models"),
            results_dir: PathBuf::from("results"),
            max_features: 5000,
            test_size: 0.2,
            seed: 42,
            forest_trees: 100,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        let config = Self {
            corpus_dir: env_path("SENTISCOPE_CORPUS_DIR").unwrap_or(defaults.corpus_dir),
            data_dir: env_path("SENTISCOPE_DATA_DIR").unwrap_or(defaults.data_dir),
            models_dir: env_path("SENTISCOPE_MODELS_DIR").unwrap_or(defaults.models_dir),
            results_dir: env_path("SENTISCOPE_RESULTS_DIR").unwrap_or(defaults.results_dir),
            max_features: env_parse("SENTISCOPE_MAX_FEATURES")?.unwrap_or(defaults.max_features),
            test_size: env_parse("SENTISCOPE_TEST_SIZE")?.unwrap_or(defaults.test_size),
            seed: env_parse("SENTISCOPE_SEED")?.unwrap_or(defaults.seed),
            forest_trees: env_parse("SENTISCOPE_FOREST_TREES")?.unwrap_or(defaults.forest_trees),
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject values the pipeline cannot run with.
    pub fn validate(&self) -> Result<()> {
        if !(self.test_size > 0.0 && self.test_size < 1.0) {
            anyhow::bail!(
                "SENTISCOPE_TEST_SIZE must be between 0 and 1 (exclusive), got {}",
                self.test_size
            );
        }
        if self.max_features == 0 {
            anyhow::bail!("SENTISCOPE_MAX_FEATURES must be at least 1");
        }
        if self.forest_trees == 0 {
            anyhow::bail!("SENTISCOPE_FOREST_TREES must be at least 1");
        }
        Ok(())
    }

    /// Check that the review corpus has been downloaded.
    /// Call this before the preprocessing stage.
    pub fn require_corpus(&self) -> Result<()> {
        if !crate::corpus::download::corpus_present(&self.corpus_dir) {
            anyhow::bail!(
                "Review corpus not found in {}\n\
                 Run `sentiscope download-corpus` to fetch it,\n\
                 or set SENTISCOPE_CORPUS_DIR to an existing movie_reviews directory.",
                self.corpus_dir.display()
            );
        }
        Ok(())
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    env::var(key).ok().filter(|v| !v.is_empty()).map(PathBuf::from)
}

fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => {
            let value = raw
                .trim()
                .parse::<T>()
                .with_context(|| format!("{key} has an invalid value: {raw:?}"))?;
            Ok(Some(value))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.max_features, 5000);
        assert!((config.test_size - 0.2).abs() < f64::EPSILON);
        assert_eq!(config.seed, 42);
        assert_eq!(config.forest_trees, 100);
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.models_dir, PathBuf::from("models"));
        assert_eq!(config.results_dir, PathBuf::from("results"));
    }

    #[test]
    fn test_validate_rejects_out_of_range_test_size() {
        let mut config = Config::default();
        config.test_size = 1.0;
        assert!(config.validate().is_err());
        config.test_size = 0.0;
        assert!(config.validate().is_err());
        config.test_size = 0.25;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_require_corpus_fails_for_missing_dir() {
        let config = Config {
            corpus_dir: std::env::temp_dir().join("sentiscope-no-such-corpus"),
            ..Config::default()
        };
        let err = config.require_corpus().unwrap_err().to_string();
        assert!(err.contains("download-corpus"), "unexpected error: {err}");
    }
}
