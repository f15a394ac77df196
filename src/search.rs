use crate::error::WeatherError;
use crate::types::*;
use crate::AppState;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Search text sent to Tavily for a city lookup.
pub fn build_query(city: &str, unit: TemperatureUnit) -> String {
    format!(
        "current weather in {} temperature humidity wind speed {}",
        city,
        unit.label()
    )
}

/// Run one Tavily search for the weather in `city`.
///
/// The call is made once with the client's fixed timeout; failures are never retried.
pub async fn search_weather(
    state: &Arc<AppState>,
    city: &str,
    unit: TemperatureUnit,
) -> Result<TavilyResponse, WeatherError> {
    let query = build_query(city, unit);
    info!("Searching for: {}", query);

    let payload = TavilySearchRequest::for_query(&state.config.tavily_api_key, query);

    let resp = state
        .http_client
        .post(state.config.tavily_api_url.clone())
        .header("Accept", "application/json")
        .json(&payload)
        .send()
        .await?;

    if !resp.status().is_success() {
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        warn!(status = %status, "tavily search api error");
        return Err(WeatherError::SearchProvider(format!("HTTP {}: {}", status, text)));
    }

    let parsed: TavilyResponse = resp.json().await?;

    debug!(
        has_answer = parsed.answer.as_deref().is_some_and(|a| !a.is_empty()),
        result_count = parsed.results.len(),
        "tavily search completed"
    );
    Ok(parsed)
}
