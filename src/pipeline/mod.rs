// Pipeline orchestration: preprocessing -> training -> visualization.
//
// Stages are plain functions over the shared config, run in a fixed order on
// the calling thread. Any stage error aborts the run; later stages never see
// a half-written artifact set from an earlier failure.

pub mod predict;
pub mod preprocess;
pub mod train;
pub mod visualize;

use std::time::Instant;

use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info};

use crate::config::Config;
use crate::store::paths::ArtifactPaths;

/// Which stages to skip. Every stage runs by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::Args)]
pub struct RunOptions {
    /// Skip preprocessing (reuse the saved split and vectorizer)
    #[arg(long)]
    pub skip_preprocessing: bool,

    /// Skip training (reuse the saved models and results)
    #[arg(long)]
    pub skip_training: bool,

    /// Skip chart rendering
    #[arg(long)]
    pub skip_visualization: bool,
}

/// A named pipeline step.
#[derive(Clone, Copy)]
pub struct Stage {
    pub name: &'static str,
    pub skip: bool,
    pub run: fn(&Config) -> Result<()>,
}

/// The steps of a run, in execution order.
pub fn stages(options: RunOptions) -> [Stage; 3] {
    [
        Stage {
            name: "Preprocessing",
            skip: options.skip_preprocessing,
            run: preprocess::run,
        },
        Stage {
            name: "Training",
            skip: options.skip_training,
            run: train::run,
        },
        Stage {
            name: "Visualization",
            skip: options.skip_visualization,
            run: visualize::run,
        },
    ]
}

/// Run one step behind a 0-100 progress bar. The bar only moves once the
/// step finishes, so output printed by the step stays readable.
pub fn run_step(stage: &Stage, config: &Config) -> Result<()> {
    if stage.skip {
        println!("{}", format!("Skipping {}", stage.name.to_lowercase()).dimmed());
        return Ok(());
    }

    println!("\n{}", format!("Starting {}...", stage.name.to_lowercase()).bold());
    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:<14} [{bar:40.cyan/blue}] {pos:>3}%")
            .expect("valid template")
            .progress_chars("=> "),
    );
    pb.set_message(stage.name);

    let started = Instant::now();
    match (stage.run)(config) {
        Ok(()) => {
            pb.set_position(100);
            pb.finish();
            info!(
                stage = stage.name,
                secs = started.elapsed().as_secs_f64(),
                "Stage complete"
            );
            println!("{} complete.", stage.name);
            Ok(())
        }
        Err(e) => {
            pb.abandon();
            error!(stage = stage.name, error = %e, "Stage failed");
            println!("{}", format!("{} failed: {e:#}", stage.name).red());
            Err(e.context(format!("{} failed", stage.name)))
        }
    }
}

/// Run the full pipeline, honoring the skip flags.
pub fn run(config: &Config, options: RunOptions) -> Result<()> {
    let started = Instant::now();

    let paths = ArtifactPaths::from_config(config);
    for dir in paths.ensure_dirs()? {
        println!("Created directory '{}'", dir.display());
    }

    for stage in stages(options) {
        run_step(&stage, config)?;
    }

    println!(
        "\n{}",
        format!("Finished in {:.2} seconds.", started.elapsed().as_secs_f64()).bold()
    );
    println!("Charts are in '{}'.", config.results_dir.display());
    Ok(())
}
