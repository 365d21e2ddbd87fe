// Unit tests for the classifiers behind SentimentClassifier.
//
// Every model kind is trained on the same small, cleanly separable data set,
// then checked for accuracy, persistence, and input validation.

use sentiscope::config::Config;
use sentiscope::evaluate::metrics::accuracy;
use sentiscope::features::matrix::SparseMatrix;
use sentiscope::models::traits::SentimentClassifier;
use sentiscope::models::ModelKind;

/// Positive rows weigh on columns 0 and 1, negative rows on columns 2 and 3.
fn separable(n: usize) -> (SparseMatrix, Vec<i32>) {
    let mut x = SparseMatrix::new(4);
    let mut y = Vec::with_capacity(n);
    for i in 0..n {
        let jitter = 0.01 * (i % 7) as f64;
        if i % 2 == 0 {
            x.push_row(&[(0, 0.8 + jitter), (1, 0.5), (3, 0.1)]);
            y.push(1);
        } else {
            x.push_row(&[(2, 0.8 + jitter), (3, 0.5), (1, 0.1)]);
            y.push(0);
        }
    }
    (x, y)
}

fn small_forest_config() -> Config {
    Config {
        forest_trees: 10,
        ..Config::default()
    }
}

// ============================================================
// Training: every kind learns a separable problem
// ============================================================

#[test]
fn every_model_learns_separable_data() {
    let (x, y) = separable(40);
    let config = small_forest_config();

    for kind in ModelKind::ALL {
        let model = kind.train(&x, &y, &config).unwrap();
        assert_eq!(model.kind(), kind);

        let predictions = model.predict(&x).unwrap();
        assert_eq!(predictions.len(), y.len());
        let acc = accuracy(&y, &predictions).unwrap();
        assert!(acc >= 0.9, "{kind} accuracy {acc}");
    }
}

#[test]
fn predictions_are_binary_labels() {
    let (x, y) = separable(20);
    let config = small_forest_config();

    for kind in ModelKind::ALL {
        let model = kind.train(&x, &y, &config).unwrap();
        assert!(model.predict(&x).unwrap().iter().all(|&l| l == 0 || l == 1));
    }
}

#[test]
fn training_rejects_single_class() {
    let (x, _) = separable(6);
    let y = vec![1; 6];
    for kind in ModelKind::ALL {
        assert!(kind.train(&x, &y, &Config::default()).is_err(), "{kind}");
    }
}

// ============================================================
// Persistence: reloaded models predict identically
// ============================================================

#[test]
fn reloaded_models_predict_identically() {
    let tmp = tempfile::tempdir().unwrap();
    let (x, y) = separable(30);
    let config = small_forest_config();

    for kind in ModelKind::ALL {
        let path = tmp.path().join(format!("{}.bin", kind.key()));
        let model = kind.train(&x, &y, &config).unwrap();
        model.save(&path).unwrap();

        let reloaded = kind.load(&path).unwrap();
        assert_eq!(reloaded.kind(), kind);
        assert_eq!(reloaded.predict(&x).unwrap(), model.predict(&x).unwrap());
    }
}

#[test]
fn loading_missing_model_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let err = ModelKind::NaiveBayes
        .load(&tmp.path().join("naive_bayes.bin"))
        .err()
        .unwrap();
    assert!(err.to_string().contains("naive_bayes.bin"));
}

#[test]
fn forest_with_same_seed_is_reproducible() {
    let (x, y) = separable(30);
    let config = small_forest_config();

    let a = ModelKind::RandomForest.train(&x, &y, &config).unwrap();
    let b = ModelKind::RandomForest.train(&x, &y, &config).unwrap();
    assert_eq!(a.predict(&x).unwrap(), b.predict(&x).unwrap());
}
