// Frequency keyword extraction: count normalized tokens, keep the most common.

use std::collections::HashMap;
use std::num::NonZeroUsize;

use anyhow::Result;
use tracing::debug;

use super::normalize::normalize;
use super::stopwords::StopwordSet;
use super::traits::KeywordExtractor;
use super::{Keyword, Score, DEFAULT_TOP_N};
use crate::transcript::Messages;

/// Ranks tokens across both speakers by raw occurrence count.
pub struct FrequencyExtractor {
    pub top_n: NonZeroUsize,
}

impl Default for FrequencyExtractor {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl KeywordExtractor for FrequencyExtractor {
    fn extract(&self, messages: &Messages, stopwords: &StopwordSet) -> Result<Vec<Keyword>> {
        let tokens = normalize(messages.combined(), stopwords);
        let ranked = most_common(&tokens, self.top_n.get());
        debug!(
            tokens = tokens.len(),
            keywords = ranked.len(),
            "Frequency keywords"
        );
        Ok(ranked)
    }
}

/// Count tokens and return the `n` most common. Equal counts keep the order
/// in which the tokens first appeared.
pub fn most_common(tokens: &[String], n: usize) -> Vec<Keyword> {
    // token -> (count, first position)
    let mut counts: HashMap<&str, (u32, usize)> = HashMap::new();
    for (pos, token) in tokens.iter().enumerate() {
        counts.entry(token.as_str()).or_insert((0, pos)).0 += 1;
    }

    let mut ranked: Vec<(&str, u32, usize)> = counts
        .into_iter()
        .map(|(term, (count, first))| (term, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(n)
        .map(|(term, count, _)| Keyword {
            term: term.to_string(),
            score: Score::Count(count),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_most_common_orders_by_count() {
        let ranked = most_common(&tokens(&["a", "b", "b", "c", "b", "a"]), 5);
        let terms: Vec<&str> = ranked.iter().map(|k| k.term.as_str()).collect();
        assert_eq!(terms, vec!["b", "a", "c"]);
        assert_eq!(ranked[0].score, Score::Count(3));
    }

    #[test]
    fn test_ties_keep_first_occurrence() {
        let ranked = most_common(&tokens(&["zeta", "alpha", "mid", "alpha", "zeta"]), 3);
        let terms: Vec<&str> = ranked.iter().map(|k| k.term.as_str()).collect();
        assert_eq!(terms, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_caps_at_n() {
        let ranked = most_common(&tokens(&["a", "b", "c", "d"]), 2);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_empty_messages_yield_empty_ranking() {
        let stopwords = StopwordSet::from_words(["the"]);
        let ranked = FrequencyExtractor::default()
            .extract(&Messages::default(), &stopwords)
            .unwrap();
        assert!(ranked.is_empty());
    }
}
