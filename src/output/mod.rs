// Output formatting: terminal display and JSON export.

pub mod terminal;

use anyhow::Result;

use crate::summary::Summary;

/// Pretty-printed JSON for a batch of summaries, scores included.
pub fn to_json(summaries: &[Summary]) -> Result<String> {
    Ok(serde_json::to_string_pretty(summaries)?)
}
