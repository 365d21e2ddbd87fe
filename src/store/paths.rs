// Artifact locations, derived from the configured directories.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::Config;
use crate::models::ModelKind;

/// Every file the stages hand to each other.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub data_dir: PathBuf,
    pub models_dir: PathBuf,
    pub results_dir: PathBuf,
}

impl ArtifactPaths {
    pub fn from_config(config: &Config) -> Self {
        Self {
            data_dir: config.data_dir.clone(),
            models_dir: config.models_dir.clone(),
            results_dir: config.results_dir.clone(),
        }
    }

    pub fn x_train(&self) -> PathBuf {
        self.data_dir.join("X_train.bin")
    }

    pub fn x_test(&self) -> PathBuf {
        self.data_dir.join("X_test.bin")
    }

    pub fn y_train(&self) -> PathBuf {
        self.data_dir.join("y_train.bin")
    }

    pub fn y_test(&self) -> PathBuf {
        self.data_dir.join("y_test.bin")
    }

    pub fn processed_reviews(&self) -> PathBuf {
        self.data_dir.join("processed_reviews.csv")
    }

    pub fn vectorizer(&self) -> PathBuf {
        self.models_dir.join("tfidf_vectorizer.json")
    }

    pub fn model(&self, kind: ModelKind) -> PathBuf {
        self.models_dir.join(format!("{}.bin", kind.key()))
    }

    pub fn results(&self) -> PathBuf {
        self.models_dir.join("model_results.json")
    }

    pub fn chart(&self, name: &str) -> PathBuf {
        self.results_dir.join(format!("{name}.png"))
    }

    /// Artifacts written by preprocessing.
    pub fn preprocessing_outputs(&self) -> Vec<PathBuf> {
        vec![
            self.x_train(),
            self.x_test(),
            self.y_train(),
            self.y_test(),
            self.vectorizer(),
            self.processed_reviews(),
        ]
    }

    /// Artifacts written by training.
    pub fn training_outputs(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = ModelKind::ALL.iter().map(|&k| self.model(k)).collect();
        paths.push(self.results());
        paths
    }

    /// Create the data, models and results directories if missing.
    /// Returns the directories that had to be created.
    pub fn ensure_dirs(&self) -> Result<Vec<PathBuf>> {
        let mut created = Vec::new();
        for dir in [&self.data_dir, &self.models_dir, &self.results_dir] {
            if !dir.exists() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create directory {}", dir.display()))?;
                created.push(dir.clone());
            }
        }
        Ok(created)
    }
}

/// Fail with a hint naming the stage that produces the missing artifact.
pub fn require_artifacts(paths: &[PathBuf], producer: &str) -> Result<()> {
    let missing: Vec<&Path> = paths
        .iter()
        .map(PathBuf::as_path)
        .filter(|p| !p.exists())
        .collect();
    if missing.is_empty() {
        return Ok(());
    }

    let list = missing
        .iter()
        .map(|p| format!("  {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");
    anyhow::bail!("Missing artifacts:\n{list}\nRun the {producer} stage first.")
}
