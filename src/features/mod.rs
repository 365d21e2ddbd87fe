// Feature extraction: TF-IDF vectorization, the sparse matrix it produces,
// and the seeded train/test split.

pub mod matrix;
pub mod split;
pub mod tfidf;
