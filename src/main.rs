use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use sentiscope::config::Config;
use sentiscope::models::ModelKind;
use sentiscope::pipeline::{self, RunOptions};

/// Sentiscope: sentiment classification of movie reviews.
///
/// Without a subcommand, runs the full pipeline: preprocess the review
/// corpus, train and evaluate three classifiers, and render charts.
#[derive(Parser)]
#[command(name = "sentiscope", version, about, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: RunOptions,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the movie_reviews corpus (~4 MB)
    DownloadCorpus,

    /// Classify a piece of text with a trained model
    Predict {
        /// Which trained model to use
        #[arg(long, value_enum, default_value = "logistic-regression")]
        model: ModelKind,

        /// The review text to classify
        text: String,
    },

    /// Show which artifacts exist and the last recorded accuracies
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sentiscope=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => {
            let config = Config::load()?;
            println!("{}", "Sentiscope: movie review sentiment analysis".bold());
            println!("{}", "=".repeat(70));
            info!(options = ?cli.run, "Starting pipeline");

            // Every stage is CPU-bound; keep it off the async worker threads
            let options = cli.run;
            tokio::task::spawn_blocking(move || pipeline::run(&config, options))
                .await
                .context("Pipeline worker panicked")??;
        }

        Some(Commands::DownloadCorpus) => {
            let config = Config::load()?;

            println!("Downloading movie_reviews corpus...");
            println!("  Destination: {}", config.corpus_dir.display());

            sentiscope::corpus::download::download_corpus(&config.corpus_dir).await?;

            println!("\n{}", "Corpus ready.".bold());
            println!("You can now run `sentiscope` to preprocess, train and chart.");
        }

        Some(Commands::Predict { model, text }) => {
            let config = Config::load()?;
            let input = text.clone();
            let prediction = tokio::task::spawn_blocking(move || {
                pipeline::predict::predict(&config, model, &input)
            })
            .await
            .context("Prediction worker panicked")??;

            sentiscope::output::terminal::display_prediction(&text, &prediction);
        }

        Some(Commands::Status) => {
            let config = Config::load()?;
            sentiscope::status::show(&config)?;
        }
    }

    Ok(())
}
