use regex::Regex;

/// Temperature patterns, tried in order.
const TEMPERATURE_PATTERNS: &[&str] = &[
    r"(\d+)°?\s*[cf]",
    r"temperature:?\s*(\d+)°?\s*[cf]",
    r"(\d+)\s*degrees?",
    r"temp:?\s*(\d+)°?\s*[cf]",
];

/// Condition phrases, scanned in order as plain substrings.
/// "cloudy" precedes "partly cloudy", so the shorter phrase wins when both occur.
const WEATHER_CONDITIONS: &[&str] = &[
    "sunny",
    "cloudy",
    "rainy",
    "stormy",
    "snowy",
    "foggy",
    "windy",
    "partly cloudy",
    "overcast",
    "clear",
    "thunderstorms",
    "drizzle",
    "fair",
    "partly sunny",
    "mostly cloudy",
    "light rain",
    "heavy rain",
];

const HUMIDITY_PATTERNS: &[&str] = &[r"humidity:?\s*(\d+)%?", r"(\d+)%\s*humidity"];

const WIND_PATTERNS: &[&str] = &[
    r"wind:?\s*(\d+)\s*(?:mph|km/h|kph)",
    r"wind speed:?\s*(\d+)\s*(?:mph|km/h|kph)",
    r"(\d+)\s*(?:mph|km/h|kph)\s*wind",
];

/// Weather fields found in a piece of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeatherInfo {
    pub temperature: Option<String>,
    pub description: Option<String>,
    pub humidity: Option<String>,
    pub wind_speed: Option<String>,
}

impl WeatherInfo {
    /// Copy fields from `other` into the ones still empty here.
    pub fn fill_missing(&mut self, other: WeatherInfo) {
        if self.temperature.is_none() {
            self.temperature = other.temperature;
        }
        if self.description.is_none() {
            self.description = other.description;
        }
        if self.humidity.is_none() {
            self.humidity = other.humidity;
        }
        if self.wind_speed.is_none() {
            self.wind_speed = other.wind_speed;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.temperature.is_none()
            && self.description.is_none()
            && self.humidity.is_none()
            && self.wind_speed.is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.temperature.is_some()
            && self.description.is_some()
            && self.humidity.is_some()
            && self.wind_speed.is_some()
    }
}

/// Heuristic scraper for weather values in free-text search snippets.
#[derive(Debug, Clone)]
pub struct WeatherExtractor {
    temperature: Vec<Regex>,
    humidity: Vec<Regex>,
    wind: Vec<Regex>,
}

impl WeatherExtractor {
    pub fn new() -> Self {
        Self {
            temperature: compile(TEMPERATURE_PATTERNS),
            humidity: compile(HUMIDITY_PATTERNS),
            wind: compile(WIND_PATTERNS),
        }
    }

    /// Extract every field from `text`. Matching is case-insensitive.
    pub fn extract(&self, text: &str) -> WeatherInfo {
        let lower = text.to_lowercase();

        WeatherInfo {
            temperature: first_capture(&self.temperature, &lower).map(|n| format!("{}°", n)),
            description: find_condition(&lower),
            humidity: first_capture(&self.humidity, &lower).map(|n| format!("{}%", n)),
            // Source unit is not converted; the label is always mph.
            wind_speed: first_capture(&self.wind, &lower).map(|n| format!("{} mph", n)),
        }
    }
}

impl Default for WeatherExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("weather pattern is a valid regex"))
        .collect()
}

/// Capture group 1 of the first pattern, in list order, that matches anywhere.
fn first_capture<'t>(patterns: &[Regex], text: &'t str) -> Option<&'t str> {
    patterns
        .iter()
        .find_map(|re| re.captures(text).and_then(|caps| caps.get(1)))
        .map(|m| m.as_str())
}

fn find_condition(lower: &str) -> Option<String> {
    WEATHER_CONDITIONS
        .iter()
        .find(|condition| lower.contains(*condition))
        .map(|condition| title_case(condition))
}

fn title_case(phrase: &str) -> String {
    phrase
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
