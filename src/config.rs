use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_TAVILY_URL: &str = "https://api.tavily.com/search";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Clone)]
pub struct Config {
    pub tavily_api_key: String,
    pub tavily_api_url: Url,
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
}

impl Config {
    /// Config with defaults for everything except the API key.
    pub fn new(tavily_api_key: impl Into<String>) -> Self {
        Self {
            tavily_api_key: tavily_api_key.into(),
            tavily_api_url: Url::parse(DEFAULT_TAVILY_URL).expect("default Tavily URL is valid"),
            bind_addr: DEFAULT_BIND_ADDR.parse().expect("default bind address is valid"),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }

    /// Load configuration from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("TAVILY_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let mut config = Self::new(api_key);

        if let Some(raw) = lookup("TAVILY_API_URL") {
            config.tavily_api_url =
                Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(raw.clone(), e))?;
        }
        if let Some(raw) = lookup("BIND_ADDR") {
            config.bind_addr = raw
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr(raw.clone(), e))?;
        }
        if let Some(dir) = lookup("STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }

        Ok(config)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("tavily_api_key", &"<redacted>")
            .field("tavily_api_url", &self.tavily_api_url.as_str())
            .field("bind_addr", &self.bind_addr)
            .field("static_dir", &self.static_dir)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
    }

    #[test]
    fn test_blank_api_key_is_fatal() {
        let err = Config::from_lookup(lookup_from(&[("TAVILY_API_KEY", "   ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[("TAVILY_API_KEY", "tvly-123")])).unwrap();
        assert_eq!(config.tavily_api_key, "tvly-123");
        assert_eq!(config.tavily_api_url.as_str(), DEFAULT_TAVILY_URL);
        assert_eq!(config.bind_addr.port(), 8000);
        assert_eq!(config.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("TAVILY_API_KEY", "tvly-123"),
            ("TAVILY_API_URL", "http://127.0.0.1:9000/search"),
            ("BIND_ADDR", "127.0.0.1:3000"),
            ("STATIC_DIR", "/srv/www"),
        ]))
        .unwrap();
        assert_eq!(config.tavily_api_url.as_str(), "http://127.0.0.1:9000/search");
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.static_dir, PathBuf::from("/srv/www"));
    }

    #[test]
    fn test_invalid_values() {
        let err = Config::from_lookup(lookup_from(&[
            ("TAVILY_API_KEY", "k"),
            ("TAVILY_API_URL", "not a url"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl(..)));

        let err = Config::from_lookup(lookup_from(&[("TAVILY_API_KEY", "k"), ("BIND_ADDR", "nope")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr(..)));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = Config::new("secret-key");
        assert!(!format!("{:?}", config).contains("secret-key"));
    }
}
