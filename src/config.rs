use std::time::Duration;

use crate::error::ConfigError;
use crate::network::DEFAULT_TIMEOUT;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

pub const ENV_BASE_URL: &str = "BRIEFING_BASE_URL";
pub const ENV_ACCESS_TOKEN: &str = "BRIEFING_ACCESS_TOKEN";
pub const ENV_TIMEOUT_SECS: &str = "BRIEFING_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub access_token: Option<String>,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config =
            Self::new(lookup(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()));

        if let Some(token) = lookup(ENV_ACCESS_TOKEN).filter(|t| !t.trim().is_empty()) {
            config = config.with_access_token(token);
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw
                .trim()
                .parse()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout(raw.clone()))?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
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
    fn defaults_when_nothing_is_set() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.access_token, None);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn reads_all_variables() {
        let config = ClientConfig::from_lookup(lookup(&[
            (ENV_BASE_URL, "https://api.briefing.test/"),
            (ENV_ACCESS_TOKEN, "abc"),
            (ENV_TIMEOUT_SECS, "3"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://api.briefing.test");
        assert_eq!(config.access_token.as_deref(), Some("abc"));
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn blank_token_is_ignored() {
        let config = ClientConfig::from_lookup(lookup(&[(ENV_ACCESS_TOKEN, "  ")])).unwrap();
        assert_eq!(config.access_token, None);
    }

    #[test]
    fn bad_timeout_is_an_error() {
        let err = ClientConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "soon")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidTimeout("soon".to_string()));
    }

    #[test]
    fn zero_timeout_is_an_error() {
        let err = ClientConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "0")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidTimeout("0".to_string()));
    }
}
