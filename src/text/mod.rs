// Text preparation: normalization, tokenization, stop-word removal and
// lemmatization. Every function here is pure so the same code path serves
// corpus preprocessing and single-text prediction.

pub mod filter;
pub mod lemmatizer;
pub mod normalize;
