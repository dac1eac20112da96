use std::str::FromStr;

use anyhow::{ensure, Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Target width of justified lines, in characters.
    pub line_width: usize,
    /// Words each caller may submit per calendar day.
    pub daily_word_limit: u64,
    /// Seconds between stale quota record sweeps. Zero disables the sweep.
    pub quota_prune_interval_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 3000,
            rust_log: "info".to_string(),
            line_width: 80,
            daily_word_limit: 80_000,
            quota_prune_interval_secs: 3600,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let config = Config {
            port: parse_or(&lookup, "PORT", defaults.port)?,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            line_width: parse_or(&lookup, "JUSTIFY_LINE_WIDTH", defaults.line_width)?,
            daily_word_limit: parse_or(&lookup, "DAILY_WORD_LIMIT", defaults.daily_word_limit)?,
            quota_prune_interval_secs: parse_or(
                &lookup,
                "QUOTA_PRUNE_INTERVAL_SECS",
                defaults.quota_prune_interval_secs,
            )?,
        };

        ensure!(config.line_width > 0, "JUSTIFY_LINE_WIDTH must be at least 1");
        Ok(config)
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.line_width, 80);
        assert_eq!(config.daily_word_limit, 80_000);
        assert_eq!(config.quota_prune_interval_secs, 3600);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_overrides_are_parsed() {
        let config = from_pairs(&[
            ("PORT", "8080"),
            ("JUSTIFY_LINE_WIDTH", " 60 "),
            ("DAILY_WORD_LIMIT", "1000"),
            ("RUST_LOG", "debug"),
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.line_width, 60);
        assert_eq!(config.daily_word_limit, 1000);
        assert_eq!(config.rust_log, "debug");
    }

    #[test]
    fn test_invalid_number_names_the_variable() {
        let err = from_pairs(&[("DAILY_WORD_LIMIT", "lots")]).unwrap_err();
        assert!(err.to_string().contains("DAILY_WORD_LIMIT"));
    }

    #[test]
    fn test_zero_line_width_rejected() {
        assert!(from_pairs(&[("JUSTIFY_LINE_WIDTH", "0")]).is_err());
    }
}
