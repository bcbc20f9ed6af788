// Text normalization: lowercase, strip punctuation, tokenize, drop stopwords.

use std::sync::LazyLock;

use regex::Regex;

use super::stopwords::StopwordSet;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").expect("valid regex"));

/// Tokens for the corpus-weighted strategy: runs of two or more word chars.
static CORPUS_TERM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("valid regex"));

/// Join messages with a space, lowercase, remove ASCII punctuation, split
/// into words and drop stopwords. Order and duplicates are preserved.
pub fn normalize<'a, I>(messages: I, stopwords: &StopwordSet) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let joined = messages.into_iter().collect::<Vec<_>>().join(" ");
    let cleaned: String = joined
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    WORD.find_iter(&cleaned)
        .map(|m| m.as_str())
        .filter(|word| !stopwords.contains(word))
        .map(str::to_string)
        .collect()
}

/// Split one corpus document into lowercase terms, stopwords removed.
/// Punctuation is not stripped first, so `don't` yields `don` and drops `t`.
pub(crate) fn corpus_terms<'a>(
    document: &'a str,
    stopwords: &'a StopwordSet,
) -> impl Iterator<Item = &'a str> + 'a {
    CORPUS_TERM
        .find_iter(document)
        .map(|m| m.as_str())
        .filter(move |term| !stopwords.contains(term))
}
