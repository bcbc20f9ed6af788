// Stopword set: loaded once up front, then only read.
//
// The default list is the NLTK English set shipped with the `stop-words` crate.
// A custom newline-separated file can replace it. Either way an empty list is
// an error: silently filtering nothing would produce junk keywords.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::Result;
use stop_words::{get, LANGUAGE};
use tracing::info;

use crate::error::SummaryError;

/// Lowercase words excluded from keyword consideration.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Load the stopword list: `path` if given, otherwise the built-in
    /// English list.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::english(),
        }
    }

    /// The built-in English list from the `stop-words` crate.
    pub fn english() -> Result<Self> {
        let set = Self::from_words(get(LANGUAGE::English));
        set.ensure_non_empty("built-in English list")?;
        info!(stopwords = set.len(), "Loaded built-in English stopwords");
        Ok(set)
    }

    /// One stopword per line; blank lines and `#` comments are skipped.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| SummaryError::StopwordDataUnavailable {
            reason: format!("cannot read {}: {e}", path.display()),
        })?;
        let set = Self::from_words(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        );
        set.ensure_non_empty(&path.display().to_string())?;
        info!(
            stopwords = set.len(),
            path = %path.display(),
            "Loaded stopwords from file"
        );
        Ok(set)
    }

    /// Build a set from any list of words. Words are lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn ensure_non_empty(&self, source: &str) -> Result<()> {
        if self.is_empty() {
            return Err(SummaryError::StopwordDataUnavailable {
                reason: format!("{source} contains no stopwords"),
            }
            .into());
        }
        Ok(())
    }
}
