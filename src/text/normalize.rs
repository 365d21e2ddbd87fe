// Text normalizer: the regex cleaning pass applied before tokenization.
//
// The substitutions run in a fixed order; later patterns rely on earlier ones
// (single-character removal only sees word/space characters once punctuation
// is gone, and whitespace collapsing cleans up the holes the others leave).

use std::sync::LazyLock;

use regex_lite::Regex;

static MARKUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<.*?>").expect("valid regex"));
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid regex"));
static SINGLE_CHAR_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\b").expect("valid regex"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Lowercase the text, strip `<...>` markup and punctuation, drop
/// single-character words, and collapse whitespace runs to single spaces.
pub fn clean_text(text: &str) -> String {
    let text = text.to_lowercase();
    let text = MARKUP.replace_all(&text, "");
    let text = NON_WORD.replace_all(&text, "");
    let text = SINGLE_CHAR_WORD.replace_all(&text, "");
    let text = WHITESPACE.replace_all(&text, " ");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_markup_and_punctuation() {
        let cleaned = clean_text("<br />This movie was GREAT!!! <i>Really</i>, truly great.");
        assert_eq!(cleaned, "this movie was great really truly great");
    }

    #[test]
    fn test_removes_single_character_words() {
        assert_eq!(clean_text("a b c film x is ok"), "film is ok");
    }

    #[test]
    fn test_apostrophes_join_words() {
        // Punctuation is deleted rather than replaced, so contractions fuse
        assert_eq!(clean_text("don't stop"), "dont stop");
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("   \n\t  "), "");
        assert_eq!(clean_text("! ? ."), "");
    }
}
