// Sparse feature matrix in compressed sparse row (CSR) layout.
//
// TF-IDF rows over a 5,000-term vocabulary are overwhelmingly zero, so the
// hand-off files store only the non-zero entries. Every row still has the
// same logical width (`n_cols`), which is what makes it a fixed-width feature
// vector for the classifiers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparseMatrix {
    n_cols: usize,
    /// Row `i` occupies `indices[indptr[i]..indptr[i + 1]]`
    indptr: Vec<usize>,
    indices: Vec<u32>,
    values: Vec<f64>,
}

impl SparseMatrix {
    /// An empty matrix with a fixed column count.
    pub fn new(n_cols: usize) -> Self {
        Self {
            n_cols,
            indptr: vec![0],
            indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Append a row given as `(column, value)` pairs.
    ///
    /// Pairs are stored in column order; zero values and out-of-range columns
    /// are dropped.
    pub fn push_row(&mut self, entries: &[(usize, f64)]) {
        let mut row: Vec<(usize, f64)> = entries
            .iter()
            .copied()
            .filter(|&(col, value)| col < self.n_cols && value != 0.0)
            .collect();
        row.sort_by_key(|&(col, _)| col);

        for (col, value) in row {
            self.indices.push(col as u32);
            self.values.push(value);
        }
        self.indptr.push(self.indices.len());
    }

    pub fn n_rows(&self) -> usize {
        self.indptr.len() - 1
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Number of stored (non-zero) entries.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Iterate the non-zero `(column, value)` pairs of one row.
    pub fn row(&self, i: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let range = self.indptr[i]..self.indptr[i + 1];
        self.indices[range.clone()]
            .iter()
            .zip(&self.values[range])
            .map(|(&col, &value)| (col as usize, value))
    }

    /// One row expanded to its full width.
    pub fn dense_row(&self, i: usize) -> Vec<f64> {
        let mut dense = vec![0.0; self.n_cols];
        for (col, value) in self.row(i) {
            dense[col] = value;
        }
        dense
    }

    /// The whole matrix expanded to dense rows, for classifiers that need it.
    pub fn to_dense(&self) -> Vec<Vec<f64>> {
        (0..self.n_rows()).map(|i| self.dense_row(i)).collect()
    }

    /// A new matrix holding the given rows, in the given order.
    pub fn select_rows(&self, rows: &[usize]) -> Self {
        let mut selected = Self::new(self.n_cols);
        for &i in rows {
            let entries: Vec<(usize, f64)> = self.row(i).collect();
            selected.push_row(&entries);
        }
        selected
    }
}
