use crate::error::{Error, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/";
pub const DEFAULT_USER_AGENT: &str = "devmetrics/0.1";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: String,
    pub base_url: String,
    pub user_agent: String,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source, falling back to
    /// defaults for anything unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base = lookup("DEVMETRICS_API_BASE")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base);

        let base_url = lookup("DEVMETRICS_BASE_URL").unwrap_or(defaults.base_url);

        let user_agent = lookup("DEVMETRICS_USER_AGENT").unwrap_or(defaults.user_agent);

        let request_timeout = match lookup("DEVMETRICS_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(Error::Config(format!(
                        "DEVMETRICS_TIMEOUT_SECS must be a positive integer, got '{}'",
                        raw
                    )))
                }
            },
            None => defaults.request_timeout,
        };

        if api_base.is_empty() {
            return Err(Error::Config("DEVMETRICS_API_BASE must not be empty".to_string()));
        }

        Ok(Self {
            api_base,
            base_url,
            user_agent,
            request_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("DEVMETRICS_API_BASE", "http://127.0.0.1:9000/"),
            ("DEVMETRICS_TIMEOUT_SECS", "5"),
            ("DEVMETRICS_USER_AGENT", "tester"),
        ]))
        .unwrap();
        assert_eq!(config.api_base, "http://127.0.0.1:9000");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "tester");
    }

    #[test]
    fn test_invalid_timeout() {
        let err = Config::from_lookup(lookup(&[("DEVMETRICS_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = Config::from_lookup(lookup(&[("DEVMETRICS_TIMEOUT_SECS", "0")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
