use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Client configuration loaded from environment variables.
/// Everything has a default; only malformed values are errors.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    /// `None` leaves the transport's own default in place.
    pub http_timeout: Option<Duration>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup, so tests need not touch the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let http_timeout = lookup("RECRUIT_HTTP_TIMEOUT_SECS")
            .filter(|v| !v.trim().is_empty())
            .map(|v| {
                v.trim()
                    .parse::<u64>()
                    .map(Duration::from_secs)
                    .context("RECRUIT_HTTP_TIMEOUT_SECS must be a whole number of seconds")
            })
            .transpose()?;

        Ok(Config {
            api_url: lookup("RECRUIT_API_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            http_timeout,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.http_timeout, None);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("RECRUIT_API_URL", "https://recruit.example.com"),
            ("RECRUIT_HTTP_TIMEOUT_SECS", "30"),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "https://recruit.example.com");
        assert_eq!(config.http_timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.rust_log, "debug");
    }

    #[test]
    fn test_blank_api_url_uses_default() {
        let config = Config::from_lookup(lookup(&[("RECRUIT_API_URL", "  ")])).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_bad_timeout_is_error() {
        let err = Config::from_lookup(lookup(&[("RECRUIT_HTTP_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(err.to_string().contains("RECRUIT_HTTP_TIMEOUT_SECS"));
    }
}
