// Pipeline status display: corpus location, artifact presence, sizes and
// modification times, plus the last recorded accuracies.

use std::fs;
use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Local};
use colored::Colorize;

use crate::config::Config;
use crate::corpus::download::corpus_present;
use crate::evaluate::ModelResults;
use crate::output::terminal;
use crate::store::paths::ArtifactPaths;

/// Chart files rendered by the visualization stage.
pub const CHART_NAMES: [&str; 5] = [
    "sentiment_distribution",
    "word_clouds",
    "common_words",
    "model_comparison",
    "confusion_matrices",
];

/// Display pipeline status to the terminal.
pub fn show(config: &Config) -> Result<()> {
    if corpus_present(&config.corpus_dir) {
        println!("Corpus: {}", config.corpus_dir.display());
    } else {
        println!("Corpus: not downloaded");
        println!("  Run `sentiscope download-corpus` to fetch it");
    }

    let paths = ArtifactPaths::from_config(config);

    println!("\n{}", "Preprocessing artifacts:".bold());
    for path in paths.preprocessing_outputs() {
        println!("  {}", describe(&path));
    }

    println!("\n{}", "Training artifacts:".bold());
    for path in paths.training_outputs() {
        println!("  {}", describe(&path));
    }

    println!("\n{}", "Charts:".bold());
    for name in CHART_NAMES {
        println!("  {}", describe(&paths.chart(name)));
    }

    if paths.results().exists() {
        let results = ModelResults::load(&paths.results())?;
        terminal::display_results_table(&results);
    }

    Ok(())
}

/// One status line: path, then size and modification time or "missing".
pub fn describe(path: &Path) -> String {
    match fs::metadata(path) {
        Ok(meta) => {
            let modified = meta
                .modified()
                .map(|t| DateTime::<Local>::from(t).format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|_| "unknown".to_string());
            format!(
                "{} {} ({}, {})",
                "ok".green(),
                path.display(),
                format_bytes(meta.len()),
                modified
            )
        }
        Err(_) => format!("{} {}", "--".red(), path.display().to_string().dimmed()),
    }
}

pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_units() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MB");
    }

    #[test]
    fn test_describe_marks_missing_and_present() {
        colored::control::set_override(false);
        let tmp = tempfile::tempdir().unwrap();
        let present = tmp.path().join("X_train.bin");
        fs::write(&present, [0u8; 10]).unwrap();

        let line = describe(&present);
        assert!(line.starts_with("ok "));
        assert!(line.contains("10 B"));

        let missing = describe(&tmp.path().join("nope.bin"));
        assert!(missing.starts_with("-- "));
    }
}
