use crate::extract::{WeatherExtractor, WeatherInfo};
use crate::types::*;
use crate::{error::WeatherError, search, AppState};
use std::sync::Arc;
use tracing::{debug, info};

/// Merge weather fields from the provider answer and each result, first found wins per field.
pub fn aggregate(
    extractor: &WeatherExtractor,
    city: &str,
    search_results: &TavilyResponse,
) -> WeatherResponse {
    let mut found = WeatherInfo::default();

    if let Some(answer) = search_results.answer.as_deref().filter(|a| !a.is_empty()) {
        found.fill_missing(extractor.extract(answer));
    }

    for (i, result) in search_results.results.iter().enumerate() {
        if found.is_complete() {
            debug!("All fields found after {} results", i);
            break;
        }
        found.fill_missing(extractor.extract(&result.combined_text()));
    }

    if found.is_empty() {
        return WeatherResponse {
            city: city.to_string(),
            temperature: None,
            description: None,
            humidity: None,
            wind_speed: None,
            success: false,
            error: Some(format!(
                "Weather information not found for {}. Please check the city name and try again.",
                city
            )),
        };
    }

    WeatherResponse {
        city: city.to_string(),
        temperature: found.temperature,
        description: found.description,
        humidity: found.humidity,
        wind_speed: found.wind_speed,
        success: true,
        error: None,
    }
}

/// Search for `request.city` and scrape weather values out of the results.
pub async fn lookup_weather(
    state: &Arc<AppState>,
    request: &WeatherRequest,
) -> Result<WeatherResponse, WeatherError> {
    let search_results = search::search_weather(state, &request.city, request.unit).await?;
    let response = aggregate(&state.extractor, &request.city, &search_results);

    if response.success {
        info!("Weather found for {}", request.city);
    } else {
        info!("No weather information extracted for {}", request.city);
    }
    Ok(response)
}
