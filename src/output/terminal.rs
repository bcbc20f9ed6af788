// Terminal output for conversation summaries.

use colored::Colorize;

use crate::summary::Summary;

/// Print one summary in the fixed text template.
pub fn display_summary(summary: &Summary) {
    println!("\nAnalyzing chat log: {}", summary.path.display());
    println!("{}", "Summary:".bold());
    for line in summary.lines() {
        println!("{line}");
    }
}

/// Print every summary, in order.
pub fn display_summaries(summaries: &[Summary]) {
    for summary in summaries {
        display_summary(summary);
    }
}
