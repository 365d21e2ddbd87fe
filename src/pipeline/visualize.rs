// Visualization stage: render the chart set from persisted artifacts.

use anyhow::Result;

use crate::charts;
use crate::config::Config;
use crate::corpus::review::ProcessedReview;
use crate::evaluate::ModelResults;
use crate::store::codec;
use crate::store::paths::{require_artifacts, ArtifactPaths};

/// Stage entry point.
pub fn run(config: &Config) -> Result<()> {
    let paths = ArtifactPaths::from_config(config);
    require_artifacts(&[paths.processed_reviews()], "preprocessing")?;
    require_artifacts(&[paths.results()], "training")?;
    paths.ensure_dirs()?;

    let reviews: Vec<ProcessedReview> = codec::read_csv(&paths.processed_reviews())?;
    if reviews.is_empty() {
        anyhow::bail!(
            "{} has no rows; rerun preprocessing",
            paths.processed_reviews().display()
        );
    }
    let results = ModelResults::load(&paths.results())?;
    if results.is_empty() {
        anyhow::bail!("{} holds no model results; rerun training", paths.results().display());
    }

    for path in charts::render_all(&paths, &reviews, &results)? {
        println!("  Saved {}", path.display());
    }
    Ok(())
}
