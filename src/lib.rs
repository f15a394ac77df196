pub mod config;
pub mod error;
pub mod extract;
pub mod search;
pub mod server;
pub mod types;
pub mod weather;

use std::time::Duration;

pub use config::Config;
pub use error::{ConfigError, WeatherError};
pub use types::*;

/// Outbound budget for a single Tavily call.
pub const SEARCH_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Config,
    pub http_client: reqwest::Client,
    pub extractor: extract::WeatherExtractor,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(SEARCH_TIMEOUT)
            .user_agent(concat!("weather-search/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(config, http_client))
    }

    pub fn with_client(config: Config, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
            extractor: extract::WeatherExtractor::new(),
        }
    }
}
