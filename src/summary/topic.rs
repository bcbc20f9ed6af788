// Topic guess: an ordered table of trigger terms.
//
// The first rule whose trigger appears among the keyword terms wins; with no
// match the fallback label is used.

use anyhow::Result;

use crate::keywords::Keyword;

pub const FALLBACK_TOPIC: &str = "The conversation was general.";

/// A single trigger term and the line printed when it matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicRule {
    pub trigger: String,
    pub label: String,
}

impl TopicRule {
    pub fn new(trigger: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into().to_lowercase(),
            label: label.into(),
        }
    }

    /// Parse a `term=label` pair, as given on the command line.
    pub fn parse(raw: &str) -> Result<Self> {
        let (trigger, label) = raw
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("Topic rule must look like `term=label`: `{raw}`"))?;
        let (trigger, label) = (trigger.trim(), label.trim());
        if trigger.is_empty() || label.is_empty() {
            anyhow::bail!("Topic rule needs both a term and a label: `{raw}`");
        }
        Ok(Self::new(trigger, label))
    }
}

/// Rules evaluated in priority order, plus the fallback.
#[derive(Debug, Clone)]
pub struct TopicRules {
    rules: Vec<TopicRule>,
    fallback: String,
}

impl Default for TopicRules {
    fn default() -> Self {
        Self {
            rules: vec![
                TopicRule::new("python", "The user asked mainly about Python and its uses."),
                TopicRule::new("machine", "The conversation focused on machine learning."),
            ],
            fallback: FALLBACK_TOPIC.to_string(),
        }
    }
}

impl TopicRules {
    /// Append a rule. It only fires if no earlier rule matched.
    pub fn with_rule(mut self, rule: TopicRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Pick the topic line for a keyword ranking.
    pub fn classify(&self, keywords: &[Keyword]) -> &str {
        self.rules
            .iter()
            .find(|rule| keywords.iter().any(|k| k.term == rule.trigger))
            .map(|rule| rule.label.as_str())
            .unwrap_or(&self.fallback)
    }
}
