#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use url::Url;
use weather_search::{AppState, Config};

pub fn test_config(api_url: &str) -> Config {
    let mut config = Config::new("tvly-test-key");
    config.tavily_api_url = Url::parse(api_url).expect("test url");
    config.static_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static");
    config
}

pub fn test_state(api_url: &str) -> Arc<AppState> {
    Arc::new(AppState::new(test_config(api_url)).expect("http client"))
}

pub fn test_state_with_timeout(api_url: &str, timeout: Duration) -> Arc<AppState> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .expect("http client");
    Arc::new(AppState::with_client(test_config(api_url), client))
}
