// Conversation summary: counts, topic guess and keywords for one chat log.

pub mod topic;

use std::path::PathBuf;

use serde::Serialize;

use crate::keywords::Keyword;
use crate::transcript::Messages;
use topic::TopicRules;

/// Everything printed for one transcript.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub path: PathBuf,
    pub user_messages: usize,
    pub ai_messages: usize,
    pub total: usize,
    pub topic: String,
    pub keywords: Vec<Keyword>,
}

impl Summary {
    pub fn new(
        path: impl Into<PathBuf>,
        messages: &Messages,
        keywords: Vec<Keyword>,
        rules: &TopicRules,
    ) -> Self {
        Self {
            path: path.into(),
            user_messages: messages.user.len(),
            ai_messages: messages.ai.len(),
            total: messages.total(),
            topic: rules.classify(&keywords).to_string(),
            keywords,
        }
    }

    /// Keyword terms in rank order, comma separated.
    pub fn keyword_list(&self) -> String {
        self.keywords
            .iter()
            .map(|k| k.term.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The bullet lines under the `Summary:` header. Scores are not shown.
    pub fn lines(&self) -> [String; 3] {
        [
            format!("- The conversation had {} exchanges.", self.total),
            format!("- {}", self.topic),
            format!("- Most common keywords: {}", self.keyword_list()),
        ]
    }

    /// Plain-text rendering, header included.
    pub fn render(&self) -> String {
        let mut out = String::from("Summary:\n");
        for line in self.lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::Score;

    #[test]
    fn test_render_template() {
        let messages = Messages {
            user: vec!["a".into(), "b".into()],
            ai: vec!["c".into()],
        };
        let keywords = vec![
            Keyword {
                term: "python".into(),
                score: Score::Count(3),
            },
            Keyword {
                term: "code".into(),
                score: Score::Count(1),
            },
        ];
        let summary = Summary::new("chat.txt", &messages, keywords, &TopicRules::default());
        assert_eq!(
            summary.render(),
            "Summary:\n\
             - The conversation had 3 exchanges.\n\
             - The user asked mainly about Python and its uses.\n\
             - Most common keywords: python, code\n"
        );
    }

    #[test]
    fn test_empty_keywords_render_blank_list() {
        let summary = Summary::new(
            "empty.txt",
            &Messages::default(),
            vec![],
            &TopicRules::default(),
        );
        assert_eq!(summary.total, 0);
        assert_eq!(summary.lines()[2], "- Most common keywords: ");
        assert_eq!(summary.topic, topic::FALLBACK_TOPIC);
    }
}
