// Training stage: fit every model on the persisted training partition,
// evaluate it on the test partition, and persist models and results.

use std::time::Instant;

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::evaluate::{evaluate_model, ModelResults};
use crate::features::matrix::SparseMatrix;
use crate::models::ModelKind;
use crate::output::terminal;
use crate::store::codec;
use crate::store::paths::{require_artifacts, ArtifactPaths};

/// Stage entry point.
pub fn run(config: &Config) -> Result<()> {
    let results = train_all(config)?;
    terminal::display_results_table(&results);
    if let Some((kind, best)) = results.best() {
        terminal::display_best_model(kind, best.accuracy);
    }
    Ok(())
}

/// Train, evaluate and persist every model. Models run in `ModelKind::ALL`
/// order on the same partition.
pub fn train_all(config: &Config) -> Result<ModelResults> {
    let paths = ArtifactPaths::from_config(config);
    require_artifacts(
        &[paths.x_train(), paths.x_test(), paths.y_train(), paths.y_test()],
        "preprocessing",
    )?;

    let x_train: SparseMatrix = codec::read_bincode(&paths.x_train())?;
    let x_test: SparseMatrix = codec::read_bincode(&paths.x_test())?;
    let y_train: Vec<i32> = codec::read_bincode(&paths.y_train())?;
    let y_test: Vec<i32> = codec::read_bincode(&paths.y_test())?;
    info!(
        train = y_train.len(),
        test = y_test.len(),
        features = x_train.n_cols(),
        "Loaded train/test split"
    );

    let mut results = ModelResults::new();
    for kind in ModelKind::ALL {
        println!("  Training {kind}...");
        let started = Instant::now();
        let model = kind.train(&x_train, &y_train, config)?;
        let elapsed = started.elapsed();

        let result = evaluate_model(model.as_ref(), &x_test, &y_test)?;
        model.save(&paths.model(kind))?;

        info!(
            model = kind.key(),
            accuracy = result.accuracy,
            fit_secs = elapsed.as_secs_f64(),
            "Trained model"
        );
        terminal::display_model_result(&result, elapsed);
        results.insert(kind, result);
    }

    results.save(&paths.results())?;
    info!(path = %paths.results().display(), "Saved model results");
    Ok(results)
}
