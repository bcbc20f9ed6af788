// Unit tests for transcript parsing.
//
// Tests the line classifier and the per-speaker split against a handful of
// messy transcripts: count and drop properties, ordering, file reading.

use std::io::Write;
use std::path::Path;

use chat_summary::error::SummaryError;
use chat_summary::transcript::parser::{parse, parse_line, read_transcript};
use chat_summary::transcript::Speaker;

fn sample_transcripts() -> Vec<Vec<&'static str>> {
    vec![
        vec!["User: I love Python", "AI: Python is great", "Narrator: irrelevant"],
        vec![],
        vec!["", "   ", "random text", "USER: shouting", "Ai: wrong case"],
        vec![
            "  User: padded  ",
            "\tAI:\ttabbed",
            "User:no space",
            "AI: multi: colons: here",
            "System: ignored",
            "User: AI: nested prefix",
        ],
    ]
}

fn recognised(line: &str) -> bool {
    let stripped = line.trim();
    stripped.starts_with("User:") || stripped.starts_with("AI:")
}

// ============================================================
// Count and drop properties
// ============================================================

#[test]
fn total_matches_recognised_line_count() {
    for lines in sample_transcripts() {
        let messages = parse(&lines);
        let expected = lines.iter().filter(|l| recognised(l)).count();
        assert_eq!(
            messages.user.len() + messages.ai.len(),
            expected,
            "lines: {lines:?}"
        );
        assert_eq!(messages.total(), expected);
    }
}

#[test]
fn unrecognised_lines_never_appear() {
    let messages = parse(["Narrator: irrelevant", "User: kept", "System: ignored"]);
    for text in messages.combined() {
        assert!(!text.contains("irrelevant"));
        assert!(!text.contains("ignored"));
    }
    assert_eq!(messages.user, vec!["kept"]);
}

// ============================================================
// Line classification details
// ============================================================

#[test]
fn whitespace_is_stripped_around_prefix_and_text() {
    let messages = parse(sample_transcripts()[3].clone());
    assert_eq!(messages.user, vec!["padded", "no space", "AI: nested prefix"]);
    assert_eq!(messages.ai, vec!["tabbed", "multi: colons: here"]);
}

#[test]
fn only_the_leading_prefix_is_removed() {
    let messages = parse(["User: type User: then", "AI: reply AI: done"]);
    assert_eq!(messages.user, vec!["type User: then"]);
    assert_eq!(messages.ai, vec!["reply AI: done"]);
}

#[test]
fn prefixes_are_case_sensitive() {
    assert!(parse_line("USER: shouting").is_none());
    assert!(parse_line("Ai: wrong case").is_none());
    assert_eq!(parse_line("AI: ok").unwrap().speaker, Speaker::Ai);
}

#[test]
fn scenario_one_split() {
    let messages = parse(sample_transcripts()[0].clone());
    assert_eq!(messages.user, vec!["I love Python"]);
    assert_eq!(messages.ai, vec!["Python is great"]);
    assert_eq!(messages.total(), 2);
}

// ============================================================
// read_transcript
// ============================================================

#[test]
fn read_transcript_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "User: hello\r\nAI: hi there\r\n\r\nnoise\n").unwrap();

    let messages = read_transcript(file.path()).unwrap();
    assert_eq!(messages.user, vec!["hello"]);
    assert_eq!(messages.ai, vec!["hi there"]);
}

#[test]
fn read_transcript_empty_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let messages = read_transcript(file.path()).unwrap();
    assert!(messages.is_empty());
}

#[test]
fn read_transcript_missing_file_is_unreadable() {
    let err = read_transcript(Path::new("/nonexistent/chat.txt")).unwrap_err();
    match err.downcast_ref::<SummaryError>() {
        Some(SummaryError::TranscriptUnreadable { path, source }) => {
            assert_eq!(path, Path::new("/nonexistent/chat.txt"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected TranscriptUnreadable, got {other:?}"),
    }
}
