use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/graphql";
pub const DEFAULT_TOAST_DURATION_MS: u32 = 3000;

/// Registration page configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub toast_duration_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            api_url: lookup("API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            toast_duration_ms: match lookup("TOAST_DURATION_MS") {
                Some(value) => value
                    .parse()
                    .context("TOAST_DURATION_MS must be a valid number")?,
                None => DEFAULT_TOAST_DURATION_MS,
            },
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
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("API_URL", "https://api.example.org/graphql"),
            ("TOAST_DURATION_MS", "5000"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "https://api.example.org/graphql");
        assert_eq!(config.toast_duration_ms, 5000);
    }

    #[test]
    fn test_rejects_bad_duration() {
        let err = Config::from_lookup(lookup(&[("TOAST_DURATION_MS", "soon")])).unwrap_err();
        assert!(err.to_string().contains("TOAST_DURATION_MS"));
    }
}
