// Unit tests for feature extraction.
//
// Tests the TF-IDF vectorizer, the sparse matrix it produces, and the seeded
// train/test split, including persistence of each.

use sentiscope::features::matrix::SparseMatrix;
use sentiscope::features::split::{split_indices, test_count, train_test_split};
use sentiscope::features::tfidf::TfidfVectorizer;
use sentiscope::store::codec::{read_bincode, write_bincode};

fn docs(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| t.to_string()).collect()
}

// ============================================================
// TfidfVectorizer: fitted vocabulary and weights
// ============================================================

#[test]
fn every_row_has_vocabulary_width() {
    let corpus = docs(&["great acting great plot", "dull plot", "", "acting"]);
    let mut v = TfidfVectorizer::new(5000);
    let m = v.fit_transform(&corpus).unwrap();

    assert_eq!(m.n_rows(), 4);
    assert_eq!(m.n_cols(), v.n_features());
    assert_eq!(v.n_features(), 4);
    // The empty document is an all-zero row
    assert_eq!(m.row(2).count(), 0);
    assert_eq!(m.dense_row(2), vec![0.0; 4]);
}

#[test]
fn rarer_term_outweighs_common_term() {
    let corpus = docs(&["film brilliant", "film dull", "film okay"]);
    let mut v = TfidfVectorizer::new(100);
    v.fit(&corpus).unwrap();

    let row = v.transform_document("film brilliant");
    let weight = |term: &str| {
        let idx = v.vocabulary[term];
        row.iter().find(|(c, _)| *c == idx).map(|(_, w)| *w).unwrap()
    };
    assert!(weight("brilliant") > weight("film"));
}

#[test]
fn vectorizer_survives_json_round_trip() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("tfidf_vectorizer.json");

    let mut v = TfidfVectorizer::new(3);
    v.fit(&docs(&["alpha beta gamma delta", "beta gamma", "gamma"]))
        .unwrap();
    v.save(&path).unwrap();

    let loaded = TfidfVectorizer::load(&path).unwrap();
    assert_eq!(loaded, v);
    assert_eq!(
        loaded.transform_document("gamma beta"),
        v.transform_document("gamma beta")
    );
}

#[test]
fn loading_missing_vectorizer_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(TfidfVectorizer::load(&tmp.path().join("absent.json")).is_err());
}

// ============================================================
// SparseMatrix: layout and persistence
// ============================================================

#[test]
fn push_row_sorts_and_drops_zeros() {
    let mut m = SparseMatrix::new(4);
    m.push_row(&[(3, 0.5), (0, 0.0), (1, 0.25)]);
    m.push_row(&[]);

    assert_eq!(m.n_rows(), 2);
    assert_eq!(m.nnz(), 2);
    assert_eq!(m.row(0).collect::<Vec<_>>(), vec![(1, 0.25), (3, 0.5)]);
    assert_eq!(m.to_dense(), vec![vec![0.0, 0.25, 0.0, 0.5], vec![0.0; 4]]);
}

#[test]
fn matrix_bincode_round_trip_is_exact() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("X_train.bin");

    let mut m = SparseMatrix::new(3);
    m.push_row(&[(0, 0.1 + 0.2), (2, 1.0 / 3.0)]);
    m.push_row(&[(1, std::f64::consts::PI)]);
    write_bincode(&path, &m).unwrap();

    let loaded: SparseMatrix = read_bincode(&path).unwrap();
    assert_eq!(loaded, m);
}

// ============================================================
// Train/test split: determinism and sizes
// ============================================================

#[test]
fn split_is_deterministic_for_a_seed() {
    let a = split_indices(100, 0.2, 42).unwrap();
    let b = split_indices(100, 0.2, 42).unwrap();
    assert_eq!(a, b);

    let c = split_indices(100, 0.2, 7).unwrap();
    assert_ne!(a.1, c.1);
}

#[test]
fn split_partitions_every_index_once() {
    for n in [2usize, 5, 11, 2000] {
        let (train, test) = split_indices(n, 0.2, 42).unwrap();
        assert_eq!(test.len(), test_count(n, 0.2));
        assert_eq!(train.len() + test.len(), n);

        let mut all: Vec<usize> = train.iter().chain(&test).copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..n).collect::<Vec<_>>());
    }
}

#[test]
fn split_keeps_rows_and_labels_aligned() {
    // Column 0 carries the row's own label, so alignment is checkable
    let n = 20;
    let labels: Vec<i32> = (0..n).map(|i| (i % 2) as i32).collect();
    let mut x = SparseMatrix::new(2);
    for &label in &labels {
        x.push_row(&[(0, f64::from(label) + 1.0), (1, 1.0)]);
    }

    let split = train_test_split(&x, &labels, 0.25, 42).unwrap();
    assert_eq!(split.y_test.len(), 5);
    assert_eq!(split.x_train.n_rows(), 15);

    for (i, &label) in split.y_test.iter().enumerate() {
        assert_eq!(split.x_test.dense_row(i)[0], f64::from(label) + 1.0);
    }
    for (i, &label) in split.y_train.iter().enumerate() {
        assert_eq!(split.x_train.dense_row(i)[0], f64::from(label) + 1.0);
    }
}

#[test]
fn split_rejects_mismatched_labels() {
    let mut x = SparseMatrix::new(1);
    x.push_row(&[(0, 1.0)]);
    x.push_row(&[(0, 1.0)]);
    assert!(train_test_split(&x, &[1], 0.5, 42).is_err());
}
