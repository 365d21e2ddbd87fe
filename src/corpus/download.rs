// Corpus download helper.
//
// Fetches the NLTK `movie_reviews` corpus (2,000 labeled reviews, ~4 MB zipped)
// and unpacks it into a platform-appropriate directory
// (~/.local/share/sentiscope/corpora/movie_reviews on Linux) so it persists
// across runs.

use std::fs;
use std::io::{self, Cursor};
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use super::review::Sentiment;

/// NLTK data mirror for the movie_reviews corpus archive.
const CORPUS_URL: &str =
    "https://raw.githubusercontent.com/nltk/nltk_data/gh-pages/packages/corpora/movie_reviews.zip";

/// Returns the default directory for the review corpus.
pub fn default_corpus_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sentiscope")
        .join("corpora")
        .join("movie_reviews")
}

/// Check whether both class directories exist.
pub fn corpus_present(dir: &Path) -> bool {
    Sentiment::ALL
        .iter()
        .all(|s| dir.join(s.corpus_category()).is_dir())
}

/// Download and unpack the corpus into `dir`. Skips the download if the
/// corpus is already there.
pub async fn download_corpus(dir: &Path) -> Result<()> {
    if corpus_present(dir) {
        info!("Corpus already exists, skipping");
        println!("  movie_reviews (already exists)");
        return Ok(());
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create corpus directory: {}", dir.display()))?;

    println!("  Downloading movie_reviews.zip (~4 MB)...");
    let bytes = download_bytes(CORPUS_URL).await?;

    let written = extract_corpus(&bytes, dir)?;
    println!("  Unpacked {written} files");

    if !corpus_present(dir) {
        anyhow::bail!(
            "Archive did not contain pos/ and neg/ directories: {}",
            dir.display()
        );
    }
    Ok(())
}

/// Fetch a URL into memory, with a byte-count progress bar.
async fn download_bytes(url: &str) -> Result<Vec<u8>> {
    let response = reqwest::get(url)
        .await
        .with_context(|| format!("Failed to download {}", url))?;

    if !response.status().is_success() {
        anyhow::bail!("Download failed with status {}: {}", response.status(), url);
    }

    let pb = match response.content_length() {
        Some(size) => {
            let pb = ProgressBar::new(size);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("    [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                    .expect("valid template")
                    .progress_chars("=> "),
            );
            pb
        }
        None => {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("    {spinner} {bytes}")
                    .expect("valid template"),
            );
            pb
        }
    };

    let bytes = response
        .bytes()
        .await
        .context("Failed to read response body")?;
    pb.set_position(bytes.len() as u64);
    pb.finish_and_clear();

    info!(url, bytes = bytes.len(), "Downloaded corpus archive");
    Ok(bytes.to_vec())
}

/// Unpack the archive into `dest`, dropping the archive's top-level
/// `movie_reviews/` directory so `dest` itself holds `pos/` and `neg/`.
/// Returns the number of files written.
pub fn extract_corpus(archive_bytes: &[u8], dest: &Path) -> Result<usize> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(archive_bytes)).context("Corpus archive is not a valid zip")?;

    let mut written = 0;
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .with_context(|| format!("Failed to read archive entry {i}"))?;

        // enclosed_name rejects absolute paths and `..` traversal
        let Some(name) = entry.enclosed_name() else {
            continue;
        };
        let relative: PathBuf = name
            .components()
            .skip(1)
            .filter(|c| matches!(c, Component::Normal(_)))
            .collect();
        if relative.as_os_str().is_empty() {
            continue;
        }

        let out_path = dest.join(&relative);
        if entry.is_dir() {
            fs::create_dir_all(&out_path)?;
            continue;
        }
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = fs::File::create(&out_path)
            .with_context(|| format!("Failed to write {}", out_path.display()))?;
        io::copy(&mut entry, &mut out)?;
        written += 1;
    }

    Ok(written)
}
