use std::env;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::keywords::{Strategy, DEFAULT_TOP_N};

/// Defaults loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy; command-line flags
/// override anything set here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of keywords to report (CHAT_SUMMARY_TOP_N, default 5)
    pub top_n: NonZeroUsize,
    /// Custom stopword list (CHAT_SUMMARY_STOPWORDS). Unset means the
    /// built-in English list.
    pub stopwords_path: Option<PathBuf>,
    /// Use the corpus-weighted strategy by default (CHAT_SUMMARY_TFIDF)
    pub use_tfidf: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            stopwords_path: None,
            use_tfidf: false,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup. Unset or blank keys keep
    /// their defaults.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| var(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(raw) = var("CHAT_SUMMARY_TOP_N") {
            config.top_n = raw.trim().parse().with_context(|| {
                format!("CHAT_SUMMARY_TOP_N must be a positive integer, got `{raw}`")
            })?;
        }

        config.stopwords_path = var("CHAT_SUMMARY_STOPWORDS").map(PathBuf::from);

        if let Some(raw) = var("CHAT_SUMMARY_TFIDF") {
            config.use_tfidf = match raw.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                other => anyhow::bail!("CHAT_SUMMARY_TFIDF must be true or false, got `{other}`"),
            };
        }

        Ok(config)
    }

    /// Pick the extraction strategy. An explicit `--tfidf` / `--no-tfidf`
    /// wins over CHAT_SUMMARY_TFIDF.
    pub fn strategy(&self, tfidf_flag: Option<bool>) -> Strategy {
        Strategy::from_tfidf_flag(tfidf_flag.unwrap_or(self.use_tfidf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.top_n.get(), 5);
        assert!(config.stopwords_path.is_none());
        assert!(!config.use_tfidf);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("CHAT_SUMMARY_TOP_N", "10"),
            ("CHAT_SUMMARY_STOPWORDS", "/tmp/words.txt"),
            ("CHAT_SUMMARY_TFIDF", "TRUE"),
        ])
        .unwrap();
        assert_eq!(config.top_n.get(), 10);
        assert_eq!(config.stopwords_path, Some(PathBuf::from("/tmp/words.txt")));
        assert!(config.use_tfidf);
    }

    #[test]
    fn test_zero_top_n_rejected() {
        assert!(load(&[("CHAT_SUMMARY_TOP_N", "0")]).is_err());
        assert!(load(&[("CHAT_SUMMARY_TOP_N", "many")]).is_err());
    }

    #[test]
    fn test_flag_overrides_env_strategy() {
        let config = load(&[("CHAT_SUMMARY_TFIDF", "true")]).unwrap();
        assert_eq!(config.strategy(None), Strategy::TfIdf);
        assert_eq!(config.strategy(Some(false)), Strategy::Frequency);

        let config = load(&[]).unwrap();
        assert_eq!(config.strategy(None), Strategy::Frequency);
        assert_eq!(config.strategy(Some(true)), Strategy::TfIdf);
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config = load(&[("CHAT_SUMMARY_STOPWORDS", "  "), ("CHAT_SUMMARY_TFIDF", "")]).unwrap();
        assert!(config.stopwords_path.is_none());
        assert!(!config.use_tfidf);
    }
}
