// chat-summary: keyword and topic summaries for User/AI chat transcripts.
//
// This is the library root. Each module is one stage of the summary:
// transcript parsing, keyword extraction, summary assembly and output.

pub mod config;
pub mod error;
pub mod keywords;
pub mod output;
pub mod pipeline;
pub mod summary;
pub mod transcript;
