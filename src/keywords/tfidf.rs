// Corpus-weighted keyword extraction over a two-document corpus.
//
// The user's messages form one document and the AI's messages the other.
// Each term gets a smoothed TF-IDF weight per document:
//
//   weight(t, d) = count(t, d) * (ln((1 + n) / (1 + df(t))) + 1),  n = 2
//
// Each document's weight vector is L2-normalized, and a term's final score
// is the sum of its two normalized weights. A term used by only one speaker
// gets a higher idf than one both speakers use.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::num::NonZeroUsize;

use anyhow::Result;
use tracing::{debug, info};

use super::normalize::corpus_terms;
use super::stopwords::StopwordSet;
use super::traits::KeywordExtractor;
use super::{Keyword, Score, DEFAULT_TOP_N};
use crate::error::SummaryError;
use crate::transcript::Messages;

/// Ranks terms by TF-IDF summed over the user and AI documents.
pub struct TfIdfExtractor {
    pub top_n: NonZeroUsize,
}

impl Default for TfIdfExtractor {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl KeywordExtractor for TfIdfExtractor {
    fn extract(&self, messages: &Messages, stopwords: &StopwordSet) -> Result<Vec<Keyword>> {
        let documents = [messages.user.join(" "), messages.ai.join(" ")];
        let mut ranked = score_documents(&documents, stopwords)?;
        ranked.truncate(self.top_n.get());

        if let Some(top) = ranked.first() {
            info!(
                keywords = ranked.len(),
                top_keyword = %top.term,
                top_score = top.score.as_f64(),
                "Extracted TF-IDF keywords"
            );
        }
        Ok(ranked)
    }
}

/// Score every term of the corpus, highest first. Equal scores are ordered
/// alphabetically. Fails with `EmptyCorpus` when no document has any term.
pub fn score_documents(documents: &[String], stopwords: &StopwordSet) -> Result<Vec<Keyword>> {
    let lowered: Vec<String> = documents.iter().map(|doc| doc.to_lowercase()).collect();

    // per document: term -> raw count
    let counts: Vec<BTreeMap<&str, u32>> = lowered
        .iter()
        .map(|doc| {
            let mut tf = BTreeMap::new();
            for term in corpus_terms(doc, stopwords) {
                *tf.entry(term).or_insert(0) += 1;
            }
            tf
        })
        .collect();

    // term -> document frequency
    let mut df: BTreeMap<&str, u32> = BTreeMap::new();
    for tf in &counts {
        for &term in tf.keys() {
            *df.entry(term).or_insert(0) += 1;
        }
    }

    if df.is_empty() {
        return Err(SummaryError::EmptyCorpus.into());
    }

    let n = documents.len() as f64;
    let idf = |term: &str| ((1.0 + n) / (1.0 + df[term] as f64)).ln() + 1.0;

    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for tf in &counts {
        let weights: Vec<(&str, f64)> = tf
            .iter()
            .map(|(&term, &count)| (term, count as f64 * idf(term)))
            .collect();
        let norm = weights.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm == 0.0 {
            continue;
        }
        for (term, weight) in weights {
            *totals.entry(term).or_insert(0.0) += weight / norm;
        }
    }

    debug!(vocabulary = totals.len(), documents = documents.len(), "Scored corpus");

    let mut ranked: Vec<(&str, f64)> = totals.into_iter().collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });

    Ok(ranked
        .into_iter()
        .map(|(term, weight)| Keyword {
            term: term.to_string(),
            score: Score::Weight(weight),
        })
        .collect())
}
