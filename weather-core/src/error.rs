/// Errors raised while fetching weather for a single city.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// The API answered with a non-success status. OpenWeather uses 404 for
    /// unknown cities, but any failure status ends up here.
    #[error("City \"{city}\" not found")]
    CityNotFound { city: String, status: u16 },

    #[error("Network error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to parse OpenWeather JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
