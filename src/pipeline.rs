// Summarization pipeline: read -> parse -> extract keywords -> summary.
//
// Nothing is printed here. Callers get the finished summaries back and
// decide how to show them, so a failure never leaves partial output behind.

use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::error::SummaryError;
use crate::keywords::stopwords::StopwordSet;
use crate::keywords::{Strategy, DEFAULT_TOP_N};
use crate::summary::topic::TopicRules;
use crate::summary::Summary;
use crate::transcript::parser::read_transcript;
use crate::transcript::Messages;

/// Knobs shared by every transcript in a run.
#[derive(Debug, Clone, Default)]
pub struct SummaryOptions {
    pub strategy: Strategy,
    pub top_n: Option<NonZeroUsize>,
    pub rules: TopicRules,
}

impl SummaryOptions {
    fn top_n(&self) -> NonZeroUsize {
        self.top_n.unwrap_or(DEFAULT_TOP_N)
    }
}

/// Summarize an already parsed conversation.
pub fn summarize_messages(
    path: &Path,
    messages: &Messages,
    options: &SummaryOptions,
    stopwords: &StopwordSet,
) -> Result<Summary> {
    let extractor = options.strategy.extractor(options.top_n());
    let keywords = extractor.extract(messages, stopwords)?;
    Ok(Summary::new(path, messages, keywords, &options.rules))
}

/// Summarize one transcript file.
pub fn summarize_file(
    path: &Path,
    options: &SummaryOptions,
    stopwords: &StopwordSet,
) -> Result<Summary> {
    let messages = read_transcript(path)?;
    info!(
        path = %path.display(),
        user = messages.user.len(),
        ai = messages.ai.len(),
        strategy = %options.strategy,
        "Analyzing chat log"
    );
    summarize_messages(path, &messages, options, stopwords)
}

/// All `*.txt` files directly inside `dir`, sorted by name.
pub fn transcript_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let unreadable = |source: std::io::Error| SummaryError::TranscriptUnreadable {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(unreadable)? {
        let path = entry.map_err(unreadable)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Summarize every transcript in a directory. Any failing file aborts the
/// whole run.
pub fn summarize_folder(
    dir: &Path,
    options: &SummaryOptions,
    stopwords: &StopwordSet,
) -> Result<Vec<Summary>> {
    let files = transcript_files(dir)?;
    if files.is_empty() {
        return Err(SummaryError::NoTranscripts {
            dir: dir.to_path_buf(),
        }
        .into());
    }
    info!(dir = %dir.display(), files = files.len(), "Summarizing chat log folder");

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(ProgressStyle::default_bar().template("  Chat logs [{bar:30}] {pos}/{len} ({eta})")?);

    let mut summaries = Vec::with_capacity(files.len());
    for file in &files {
        let summary = summarize_file(file, options, stopwords)
            .with_context(|| format!("Failed to summarize {}", file.display()))?;
        summaries.push(summary);
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(summaries)
}

/// Summarize a file, or every transcript in a directory.
pub fn summarize_path(
    path: &Path,
    options: &SummaryOptions,
    stopwords: &StopwordSet,
) -> Result<Vec<Summary>> {
    if path.is_dir() {
        summarize_folder(path, options, stopwords)
    } else {
        Ok(vec![summarize_file(path, options, stopwords)?])
    }
}
