use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use chat_summary::config::Config;
use chat_summary::keywords::stopwords::StopwordSet;
use chat_summary::output;
use chat_summary::pipeline::{self, SummaryOptions};
use chat_summary::summary::topic::{TopicRule, TopicRules};

/// Summarize a User/AI chat log: message count, a topic guess and the top
/// keywords.
#[derive(Parser)]
#[command(name = "chat-summary", version, about)]
struct Cli {
    /// Chat log to analyze, or a directory of *.txt chat logs
    path: PathBuf,

    /// Rank keywords by TF-IDF over the user and AI sides (default: raw frequency)
    #[arg(long, overrides_with = "no_tfidf")]
    tfidf: bool,

    /// Rank keywords by raw frequency, even if CHAT_SUMMARY_TFIDF is set
    #[arg(long, overrides_with = "tfidf")]
    no_tfidf: bool,

    /// Number of keywords to report (default: 5)
    #[arg(long)]
    top_n: Option<NonZeroUsize>,

    /// Newline-separated stopword file (default: built-in English list)
    #[arg(long)]
    stopwords: Option<PathBuf>,

    /// Extra topic rule, checked after the built-in ones
    #[arg(long = "topic", value_name = "TERM=LABEL", value_parser = TopicRule::parse)]
    topics: Vec<TopicRule>,

    /// Print summaries as JSON, scores included
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// `Some` only when the command line picked a strategy explicitly.
    fn tfidf_flag(&self) -> Option<bool> {
        match (self.tfidf, self.no_tfidf) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr; stdout is reserved for the summary
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("chat_summary=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    debug!(?config, "Loaded configuration");

    // Stopwords first: a missing list must fail before any text is touched
    let stopwords_path = cli.stopwords.clone().or(config.stopwords_path.clone());
    let stopwords = StopwordSet::load(stopwords_path.as_deref())?;

    let rules = cli
        .topics
        .clone()
        .into_iter()
        .fold(TopicRules::default(), TopicRules::with_rule);

    let options = SummaryOptions {
        strategy: config.strategy(cli.tfidf_flag()),
        top_n: Some(cli.top_n.unwrap_or(config.top_n)),
        rules,
    };

    let summaries = pipeline::summarize_path(&cli.path, &options, &stopwords)?;

    if cli.json {
        println!("{}", output::to_json(&summaries)?);
    } else {
        output::terminal::display_summaries(&summaries);
    }

    Ok(())
}
