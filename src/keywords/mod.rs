// Keyword extraction: normalization, stopwords and the two ranking strategies.

pub mod frequency;
pub mod normalize;
pub mod stopwords;
pub mod tfidf;
pub mod traits;

use std::fmt;
use std::num::NonZeroUsize;

use serde::Serialize;

use frequency::FrequencyExtractor;
use tfidf::TfIdfExtractor;
use traits::KeywordExtractor;

/// Default number of keywords to report.
pub const DEFAULT_TOP_N: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(n) => n,
    None => unreachable!(),
};

/// How a keyword earned its place in the ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Score {
    /// Raw occurrence count (frequency strategy)
    Count(u32),
    /// Summed TF-IDF weight (corpus-weighted strategy)
    Weight(f64),
}

impl Score {
    pub fn as_f64(self) -> f64 {
        match self {
            Score::Count(n) => n as f64,
            Score::Weight(w) => w,
        }
    }
}

/// A ranked keyword.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Keyword {
    pub term: String,
    pub score: Score,
}

/// Which extractor to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    Frequency,
    TfIdf,
}

impl Strategy {
    pub fn from_tfidf_flag(use_tfidf: bool) -> Self {
        if use_tfidf {
            Strategy::TfIdf
        } else {
            Strategy::Frequency
        }
    }

    pub fn extractor(self, top_n: NonZeroUsize) -> Box<dyn KeywordExtractor> {
        match self {
            Strategy::Frequency => Box::new(FrequencyExtractor { top_n }),
            Strategy::TfIdf => Box::new(TfIdfExtractor { top_n }),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Frequency => "frequency".fmt(f),
            Strategy::TfIdf => "tf-idf".fmt(f),
        }
    }
}
