// Chat transcript model: who said what, in order.
//
// A transcript is plain text with one message per line. Only lines starting
// with `User:` or `AI:` count as turns; everything else is dropped.

pub mod parser;

/// Which side of the conversation a turn belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Ai,
}

impl Speaker {
    /// The literal line prefix that marks this speaker.
    pub fn prefix(self) -> &'static str {
        match self {
            Speaker::User => "User:",
            Speaker::Ai => "AI:",
        }
    }
}

/// One speaker's message extracted from a transcript line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
}

/// Message texts split by speaker, each in transcript order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Messages {
    pub user: Vec<String>,
    pub ai: Vec<String>,
}

impl Messages {
    /// Number of recognised turns from both speakers.
    pub fn total(&self) -> usize {
        self.user.len() + self.ai.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn push(&mut self, turn: Turn) {
        match turn.speaker {
            Speaker::User => self.user.push(turn.text),
            Speaker::Ai => self.ai.push(turn.text),
        }
    }

    /// User messages followed by AI messages.
    pub fn combined(&self) -> impl Iterator<Item = &str> {
        self.user.iter().chain(self.ai.iter()).map(String::as_str)
    }
}
