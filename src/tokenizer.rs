use regex::Regex;
use std::sync::LazyLock;

/// Maximal runs of non-word characters. Compiled once, on first use.
static SENTENCE_SPLIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\W+").expect("Logic error: sentence split pattern should compile")
});

/// Lowercases `sentence` and splits it into word and punctuation tokens.
///
/// The separator runs matched by [`SENTENCE_SPLIT`] are kept in the output
/// rather than thrown away, so punctuation glued to a word (`"world!"`)
/// comes back as its own token instead of disappearing. Pieces that are
/// empty after trimming whitespace are dropped, which is what removes
/// separators made of whitespace only.
pub fn tokenize(sentence: &str) -> Vec<String> {
    let lowered = sentence.to_lowercase();
    let mut pieces: Vec<&str> = Vec::new();
    let mut last_end = 0;
    for sep in SENTENCE_SPLIT.find_iter(&lowered) {
        pieces.push(&lowered[last_end..sep.start()]);
        pieces.push(sep.as_str());
        last_end = sep.end();
    }
    pieces.push(&lowered[last_end..]);
    pieces
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
