// Lemmatizer: reduces inflected nouns to their dictionary form.
//
// Follows WordNet's morphy rules for nouns, but without the WordNet database to
// confirm candidates. The rules are ordered so the common cases resolve the
// way the dictionary lookup would ("movies" -> "movie", "stories" -> "story",
// "boxes" -> "box"), and the tables below cover words the suffix rules would
// otherwise mangle.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Trait for reducing a token to its base form. Swap-ready: a dictionary-backed
/// implementation can replace the rule-based one without touching the filter.
pub trait Lemmatizer {
    fn lemmatize(&self, word: &str) -> String;
}

/// Irregular plurals (subset of WordNet's noun.exc).
static IRREGULAR: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("men", "man"),
        ("women", "woman"),
        ("children", "child"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("geese", "goose"),
        ("mice", "mouse"),
        ("lice", "louse"),
        ("oxen", "ox"),
        ("lives", "life"),
        ("wives", "wife"),
        ("knives", "knife"),
        ("wolves", "wolf"),
        ("leaves", "leaf"),
        ("halves", "half"),
        ("shelves", "shelf"),
        ("thieves", "thief"),
        ("selves", "self"),
        ("elves", "elf"),
        ("loaves", "loaf"),
        ("heroes", "hero"),
        ("potatoes", "potato"),
        ("tomatoes", "tomato"),
        ("echoes", "echo"),
        ("vetoes", "veto"),
        ("crises", "crisis"),
        ("analyses", "analysis"),
        ("theses", "thesis"),
        ("phenomena", "phenomenon"),
        ("criteria", "criterion"),
        ("cacti", "cactus"),
        ("fungi", "fungus"),
        ("alumni", "alumnus"),
        ("indices", "index"),
        ("matrices", "matrix"),
        ("businessmen", "businessman"),
        ("cameramen", "cameraman"),
        ("gentlemen", "gentleman"),
        ("policemen", "policeman"),
        ("henchmen", "henchman"),
        ("townsmen", "townsman"),
        ("stuntmen", "stuntman"),
    ]
    .into_iter()
    .collect()
});

/// Words ending in `s` that are not plurals, or whose plural equals the
/// singular.
static INVARIANT: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "always", "perhaps", "whereas", "unless", "besides", "towards", "afterwards",
        "sometimes", "nowadays", "news", "series", "species", "physics", "mathematics",
        "politics", "ethics", "economics", "athletics", "aesthetics", "dynamics",
        "graphics", "lens", "gas", "bias", "chaos", "atlas", "canvas", "pathos",
        "ethos", "kudos", "christmas", "texas", "vegas", "paris", "jones", "james",
        "thomas", "douglas", "williams", "stevens", "bros", "mars", "zeus", "yes",
        "alias", "alas", "overseas", "mess", "less", "across", "thus", "plus",
        "minus", "nevertheless", "regardless",
        "hes", "shes", "thats", "whats", "lets", "its", "this", "his",
        "has", "was", "is", "does", "hers", "ours", "yours", "theirs", "hows",
        "whos", "wheres", "heres", "theres",
    ]
    .into_iter()
    .collect()
});

/// Stems whose plural ends in `ies` but whose singular ends in `ie`
/// ("movies" -> "movie" rather than "movy").
static IE_STEMS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "movie", "zombie", "cookie", "rookie", "hippie", "genie", "prairie", "calorie",
        "goalie", "junkie", "newbie", "selfie", "sortie", "lingerie", "auntie",
        "brownie", "pixie", "freebie", "yuppie", "smoothie", "birdie", "bookie",
        "collie", "necktie", "pie", "tie", "lie", "die", "walkie", "talkie",
        "groupie", "indie", "hoodie", "techie", "foodie", "veggie", "cutie",
        "sweetie", "bootie", "quickie", "boogie", "mountie", "roomie",
        "beanie", "eerie", "reverie", "coterie", "menagerie", "camaraderie",
        "specie", "kiddie", "baddie", "goodie", "biggie", "oldie",
    ]
    .into_iter()
    .collect()
});

/// Morphy suffix rules for nouns, tried in order: (suffix, replacement).
const SUFFIX_RULES: [(&str, &str); 5] = [
    ("sses", "ss"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("xes", "x"),
    ("zes", "z"),
];

/// Rule-based noun lemmatizer in the style of WordNet's morphy.
#[derive(Debug, Clone, Copy, Default)]
pub struct NounLemmatizer;

impl Lemmatizer for NounLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        if word.chars().count() <= 3 || INVARIANT.contains(word) {
            return word.to_string();
        }
        if let Some(base) = IRREGULAR.get(word) {
            return (*base).to_string();
        }

        if let Some(stem) = word.strip_suffix("ies") {
            let ie_form = format!("{stem}ie");
            if IE_STEMS.contains(ie_form.as_str()) {
                return ie_form;
            }
            return format!("{stem}y");
        }

        for (suffix, replacement) in SUFFIX_RULES {
            if let Some(stem) = word.strip_suffix(suffix) {
                return format!("{stem}{replacement}");
            }
        }

        // Plain `-s` plural: leave `-ss`, `-us` and `-is` endings alone
        if word.ends_with('s')
            && !word.ends_with("ss")
            && !word.ends_with("us")
            && !word.ends_with("is")
        {
            return word[..word.len() - 1].to_string();
        }

        word.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemma(word: &str) -> String {
        NounLemmatizer.lemmatize(word)
    }

    #[test]
    fn test_regular_plurals() {
        assert_eq!(lemma("films"), "film");
        assert_eq!(lemma("characters"), "character");
        assert_eq!(lemma("boxes"), "box");
        assert_eq!(lemma("watches"), "watch");
        assert_eq!(lemma("wishes"), "wish");
        assert_eq!(lemma("classes"), "class");
    }

    #[test]
    fn test_ies_plurals() {
        assert_eq!(lemma("stories"), "story");
        assert_eq!(lemma("comedies"), "comedy");
        assert_eq!(lemma("movies"), "movie");
        assert_eq!(lemma("zombies"), "zombie");
    }

    #[test]
    fn test_irregular_plurals() {
        assert_eq!(lemma("women"), "woman");
        assert_eq!(lemma("children"), "child");
        assert_eq!(lemma("henchmen"), "henchman");
    }

    #[test]
    fn test_non_plurals_unchanged() {
        assert_eq!(lemma("glass"), "glass");
        assert_eq!(lemma("bonus"), "bonus");
        assert_eq!(lemma("analysis"), "analysis");
        assert_eq!(lemma("series"), "series");
        assert_eq!(lemma("hilarious"), "hilarious");
        assert_eq!(lemma("plot"), "plot");
        assert_eq!(lemma("bus"), "bus");
    }
}
