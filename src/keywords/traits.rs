// Keyword extractor trait: the seam between the two ranking strategies.
//
// The pipeline only sees this trait, so frequency counting and TF-IDF can be
// swapped with a flag.

use anyhow::Result;

use super::stopwords::StopwordSet;
use super::Keyword;
use crate::transcript::Messages;

/// Produce a ranked keyword list from a parsed conversation.
pub trait KeywordExtractor {
    /// Rank keywords, highest score first. Never returns more entries than
    /// the extractor's `top_n`, and never pads when fewer terms exist.
    fn extract(&self, messages: &Messages, stopwords: &StopwordSet) -> Result<Vec<Keyword>>;
}
