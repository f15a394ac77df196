use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Label used inside the search query.
    pub fn label(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherRequest {
    pub city: String,
    #[serde(default)]
    pub unit: TemperatureUnit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub city: String,
    pub temperature: Option<String>,
    pub description: Option<String>,
    pub humidity: Option<String>,
    pub wind_speed: Option<String>,
    pub success: bool,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

// Tavily API types
#[derive(Debug, Serialize)]
pub struct TavilySearchRequest {
    pub api_key: String,
    pub query: String,
    pub search_depth: String,
    pub include_answer: bool,
    pub include_raw_content: bool,
    pub max_results: u32,
}

impl TavilySearchRequest {
    pub fn for_query(api_key: &str, query: String) -> Self {
        Self {
            api_key: api_key.to_string(),
            query,
            search_depth: "basic".to_string(),
            include_answer: true,
            include_raw_content: false,
            max_results: 5,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TavilyResponse {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<TavilyResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TavilyResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
}

impl TavilyResult {
    /// Text the extractor sees for this result.
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.title, self.content)
    }
}

/// Treat an explicit JSON `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
