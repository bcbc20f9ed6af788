// Error kinds the summarizer surfaces to its caller.
//
// Everything is propagated through `anyhow::Result`; callers that need to
// tell the kinds apart use `err.downcast_ref::<SummaryError>()`.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// A failure that stops the summary before anything is printed.
#[derive(Debug)]
pub enum SummaryError {
    /// The transcript path does not exist or could not be read.
    TranscriptUnreadable { path: PathBuf, source: io::Error },
    /// Corpus-weighted extraction was asked to score a corpus with no terms.
    EmptyCorpus,
    /// No stopword list could be loaded.
    StopwordDataUnavailable { reason: String },
    /// Folder mode found nothing to summarize.
    NoTranscripts { dir: PathBuf },
}

impl fmt::Display for SummaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryError::TranscriptUnreadable { path, .. } => {
                write!(f, "cannot read chat log {}", path.display())
            }
            SummaryError::EmptyCorpus => {
                "corpus is empty: no terms left after stopword removal".fmt(f)
            }
            SummaryError::StopwordDataUnavailable { reason } => {
                write!(f, "stopword data unavailable: {reason}")
            }
            SummaryError::NoTranscripts { dir } => {
                write!(f, "no .txt chat logs found in {}", dir.display())
            }
        }
    }
}

impl Error for SummaryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SummaryError::TranscriptUnreadable { source, .. } => Some(source),
            _ => None,
        }
    }
}
