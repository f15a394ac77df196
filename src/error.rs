use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

use crate::types::ErrorResponse;

/// Fatal problems detected while reading configuration at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TAVILY_API_KEY environment variable is required")]
    MissingApiKey,

    #[error("Invalid TAVILY_API_URL '{0}': {1}")]
    InvalidUrl(String, url::ParseError),

    #[error("Invalid BIND_ADDR '{0}': {1}")]
    InvalidBindAddr(String, std::net::AddrParseError),
}

/// Failures of a single weather lookup. Each one is reported to the caller as HTTP 500.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Search API error: {0}")]
    SearchProvider(String),

    #[error("Request timeout. Please try again.")]
    SearchTimeout,

    #[error("An error occurred: {0}")]
    Unknown(String),
}

impl From<reqwest::Error> for WeatherError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            WeatherError::SearchTimeout
        } else {
            WeatherError::Unknown(e.to_string())
        }
    }
}

impl IntoResponse for WeatherError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}
