// Review records: the immutable unit of the corpus.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Binary sentiment label. The discriminants are the numeric labels stored
/// in the label vectors and the processed review table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sentiment {
    Negative = 0,
    Positive = 1,
}

impl Sentiment {
    /// Both classes in label order (index == label).
    pub const ALL: [Sentiment; 2] = [Sentiment::Negative, Sentiment::Positive];

    pub fn label(self) -> i32 {
        self as i32
    }

    /// Map a numeric label back to a class. Anything non-zero counts as
    /// positive; label vectors are validated before they reach this.
    pub fn from_label(label: i32) -> Self {
        if label == 0 {
            Sentiment::Negative
        } else {
            Sentiment::Positive
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Negative => "Negative",
            Sentiment::Positive => "Positive",
        }
    }

    /// Name of the corpus subdirectory holding reviews of this class.
    pub fn corpus_category(self) -> &'static str {
        match self {
            Sentiment::Negative => "neg",
            Sentiment::Positive => "pos",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single labeled review as loaded from the corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub text: String,
    pub sentiment: Sentiment,
}

/// A review with its derived text fields: one row of `processed_reviews.csv`.
///
/// Field order matches the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedReview {
    pub text: String,
    /// Numeric label (1 = positive, 0 = negative)
    pub sentiment: i32,
    pub cleaned_text: String,
    pub processed_text: String,
}

impl ProcessedReview {
    pub fn sentiment(&self) -> Sentiment {
        Sentiment::from_label(self.sentiment)
    }
}
