// Seeded train/test split.
//
// A single shuffled permutation decides both partitions: the first
// ceil(n * test_size) indices go to the test set, the rest to training. The
// same seed always yields the same partition, which is what lets every model
// in a run be compared on identical held-out reviews.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::matrix::SparseMatrix;

/// Train/test partitions of a feature matrix and its labels.
#[derive(Debug, Clone)]
pub struct TrainTestSplit {
    pub x_train: SparseMatrix,
    pub x_test: SparseMatrix,
    pub y_train: Vec<i32>,
    pub y_test: Vec<i32>,
}

/// Number of test rows for `n` samples: ceil(n * test_size).
pub fn test_count(n: usize, test_size: f64) -> usize {
    (n as f64 * test_size).ceil() as usize
}

/// Shuffle `0..n` with a seeded RNG and cut it into (train, test) index sets.
pub fn split_indices(n: usize, test_size: f64, seed: u64) -> Result<(Vec<usize>, Vec<usize>)> {
    if !(test_size > 0.0 && test_size < 1.0) {
        anyhow::bail!("test_size must be between 0 and 1 (exclusive), got {test_size}");
    }

    let n_test = test_count(n, test_size);
    if n_test == 0 || n_test >= n {
        anyhow::bail!(
            "Cannot split {n} samples with test_size {test_size}: \
             both partitions need at least one sample"
        );
    }

    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let train = indices.split_off(n_test);
    Ok((train, indices))
}

/// Split rows of `x` and the matching labels into train and test partitions.
pub fn train_test_split(
    x: &SparseMatrix,
    y: &[i32],
    test_size: f64,
    seed: u64,
) -> Result<TrainTestSplit> {
    if x.n_rows() != y.len() {
        anyhow::bail!(
            "Feature matrix has {} rows but there are {} labels",
            x.n_rows(),
            y.len()
        );
    }

    let (train_idx, test_idx) = split_indices(y.len(), test_size, seed)?;

    Ok(TrainTestSplit {
        x_train: x.select_rows(&train_idx),
        x_test: x.select_rows(&test_idx),
        y_train: train_idx.iter().map(|&i| y[i]).collect(),
        y_test: test_idx.iter().map(|&i| y[i]).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes_follow_ratio() {
        let (train, test) = split_indices(2000, 0.2, 42).unwrap();
        assert_eq!(test.len(), 400);
        assert_eq!(train.len(), 1600);

        // 0.2 * 7 = 1.4 rounds up
        let (train, test) = split_indices(7, 0.2, 42).unwrap();
        assert_eq!(test.len(), 2);
        assert_eq!(train.len(), 5);
    }

    #[test]
    fn test_degenerate_splits_rejected() {
        assert!(split_indices(1, 0.5, 42).is_err());
        assert!(split_indices(10, 0.0, 42).is_err());
        assert!(split_indices(10, 1.0, 42).is_err());
    }
}
