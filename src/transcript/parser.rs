// Line-oriented transcript parser.

use std::fs;
use std::path::Path;

use anyhow::Result;
use tracing::debug;

use super::{Messages, Speaker, Turn};
use crate::error::SummaryError;

/// Classify a single line. Returns `None` for anything that isn't a
/// `User:` or `AI:` turn.
pub fn parse_line(line: &str) -> Option<Turn> {
    let line = line.trim();
    [Speaker::User, Speaker::Ai].into_iter().find_map(|speaker| {
        line.strip_prefix(speaker.prefix()).map(|rest| Turn {
            speaker,
            text: rest.trim().to_string(),
        })
    })
}

/// Split raw transcript lines into per-speaker message sequences.
pub fn parse<I, S>(lines: I) -> Messages
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut messages = Messages::default();
    let mut dropped = 0usize;
    for line in lines {
        match parse_line(line.as_ref()) {
            Some(turn) => messages.push(turn),
            None => dropped += 1,
        }
    }
    debug!(
        user = messages.user.len(),
        ai = messages.ai.len(),
        dropped,
        "Parsed transcript"
    );
    messages
}

/// Read a transcript file from disk and parse it.
pub fn read_transcript(path: &Path) -> Result<Messages> {
    let text = fs::read_to_string(path).map_err(|source| SummaryError::TranscriptUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse(text.lines()))
}
