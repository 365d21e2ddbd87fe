// TF-IDF vectorizer.
//
// Weighting and vocabulary selection:
//   - tokens are runs of two or more word characters, lowercased
//   - the vocabulary keeps the `max_features` terms with the highest total
//     count across the corpus (ties broken alphabetically), indexed in
//     alphabetical order
//   - smooth idf: ln((1 + n) / (1 + df)) + 1
//   - raw term counts times idf, each row L2-normalized
//
// The fitted vectorizer is a trained artifact: it is persisted next to the
// models so single texts can be projected onto the same columns later.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::matrix::SparseMatrix;
use crate::store::codec;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// Term -> column index
    pub vocabulary: BTreeMap<String, usize>,
    /// Inverse document frequency per column
    pub idf: Vec<f64>,
    /// Vocabulary size cap
    pub max_features: usize,
}

impl TfidfVectorizer {
    pub fn new(max_features: usize) -> Self {
        Self {
            vocabulary: BTreeMap::new(),
            idf: Vec::new(),
            max_features,
        }
    }

    /// Number of feature columns (the fitted vocabulary size).
    pub fn n_features(&self) -> usize {
        self.idf.len()
    }

    /// Build the vocabulary and idf weights from a document collection.
    pub fn fit(&mut self, documents: &[String]) -> Result<()> {
        if documents.is_empty() {
            anyhow::bail!("Cannot fit a TF-IDF vectorizer on zero documents");
        }

        let mut term_counts: HashMap<String, usize> = HashMap::new();
        let mut doc_counts: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let tokens = analyze(doc);
            let unique: HashSet<&String> = tokens.iter().collect();
            for term in unique {
                *doc_counts.entry(term.clone()).or_insert(0) += 1;
            }
            for term in tokens {
                *term_counts.entry(term).or_insert(0) += 1;
            }
        }

        if term_counts.is_empty() {
            anyhow::bail!(
                "TF-IDF found no terms in {} documents: are they all empty after preprocessing?",
                documents.len()
            );
        }

        // Highest corpus frequency first; alphabetical among ties
        let mut ranked: Vec<(String, usize)> = term_counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(self.max_features);

        let mut kept: Vec<String> = ranked.into_iter().map(|(term, _)| term).collect();
        kept.sort();

        let n_docs = documents.len() as f64;
        self.idf = kept
            .iter()
            .map(|term| {
                let df = doc_counts.get(term).copied().unwrap_or(0) as f64;
                ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
            })
            .collect();
        self.vocabulary = kept
            .into_iter()
            .enumerate()
            .map(|(idx, term)| (term, idx))
            .collect();

        info!(
            documents = documents.len(),
            features = self.vocabulary.len(),
            "Fitted TF-IDF vectorizer"
        );
        Ok(())
    }

    /// Project one document onto the fitted vocabulary.
    /// Returns the non-zero `(column, weight)` pairs in column order.
    pub fn transform_document(&self, document: &str) -> Vec<(usize, f64)> {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for term in analyze(document) {
            if let Some(&idx) = self.vocabulary.get(&term) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut weighted: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(idx, count)| (idx, count * self.idf[idx]))
            .collect();

        let norm = weighted.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut weighted {
                *w /= norm;
            }
        }
        weighted
    }

    /// Project a document collection onto the fitted vocabulary.
    pub fn transform(&self, documents: &[String]) -> SparseMatrix {
        let mut matrix = SparseMatrix::new(self.n_features());
        for doc in documents {
            matrix.push_row(&self.transform_document(doc));
        }
        matrix
    }

    pub fn fit_transform(&mut self, documents: &[String]) -> Result<SparseMatrix> {
        self.fit(documents)?;
        Ok(self.transform(documents))
    }

    /// Save the vectorizer as JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        codec::write_json(path, self)
    }

    /// Load a vectorizer saved by [`TfidfVectorizer::save`].
    pub fn load(path: &Path) -> Result<Self> {
        codec::read_json(path)
    }
}

/// Split a document into lowercase terms of at least two word characters.
fn analyze(document: &str) -> Vec<String> {
    document
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| t.chars().count() >= 2)
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_vocabulary_is_alphabetical_and_capped() {
        let corpus = docs(&["zebra zebra zebra apple", "apple mango", "mango zebra kiwi"]);
        let mut v = TfidfVectorizer::new(3);
        v.fit(&corpus).unwrap();

        // zebra (4), apple (2), mango (2) beat kiwi (1)
        let terms: Vec<&str> = v.vocabulary.keys().map(String::as_str).collect();
        assert_eq!(terms, vec!["apple", "mango", "zebra"]);
        assert_eq!(v.vocabulary["apple"], 0);
        assert_eq!(v.vocabulary["zebra"], 2);
    }

    #[test]
    fn test_smooth_idf_values() {
        let corpus = docs(&["good film", "good plot", "bad film"]);
        let mut v = TfidfVectorizer::new(10);
        v.fit(&corpus).unwrap();

        // df(good) = 2 of 3 docs
        let good = v.idf[v.vocabulary["good"]];
        assert!((good - ((4.0f64 / 3.0).ln() + 1.0)).abs() < 1e-12);
        // df(plot) = 1
        let plot = v.idf[v.vocabulary["plot"]];
        assert!((plot - (2.0f64.ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_rows_are_unit_length() {
        let corpus = docs(&["good good film", "bad plot", "film film plot"]);
        let mut v = TfidfVectorizer::new(10);
        let m = v.fit_transform(&corpus).unwrap();

        for i in 0..m.n_rows() {
            let norm: f64 = m.row(i).map(|(_, w)| w * w).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-12, "row {i} norm {norm}");
        }
    }

    #[test]
    fn test_single_characters_and_unknown_terms_ignored() {
        let mut v = TfidfVectorizer::new(10);
        v.fit(&docs(&["great film"])).unwrap();
        assert!(v.transform_document("a b c unseen").is_empty());
    }

    #[test]
    fn test_fit_rejects_empty_input() {
        let mut v = TfidfVectorizer::new(10);
        assert!(v.fit(&[]).is_err());
        assert!(v.fit(&docs(&["", "a"])).is_err());
    }
}
