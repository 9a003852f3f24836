use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::category::WeatherCategory;

/// A city shown on the dashboard. Only `name` is sent to the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityRequest {
    pub name: String,
    pub country: String,
}

impl CityRequest {
    pub fn new(name: impl Into<String>, country: impl Into<String>) -> Self {
        Self { name: name.into(), country: country.into() }
    }
}

/// Cities rendered on load, on refresh and by every filter.
pub fn default_cities() -> Vec<CityRequest> {
    [
        ("delhi", "in"),
        ("mumbai", "in"),
        ("Tokyo", "JP"),
        ("Moscow", "RU"),
        ("Sydney", "AU"),
        ("Dubai", "AE"),
        ("Paris", "FR"),
        ("Seattle", "US"),
    ]
    .into_iter()
    .map(|(name, country)| CityRequest::new(name, country))
    .collect()
}

/// Unit system passed to OpenWeather as the `units` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
    Standard,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
            Units::Standard => "standard",
        }
    }

    pub const fn all() -> &'static [Units] {
        &[Units::Metric, Units::Imperial, Units::Standard]
    }

    pub fn temperature_suffix(&self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
            Units::Standard => "K",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Units {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "metric" => Ok(Units::Metric),
            "imperial" => Ok(Units::Imperial),
            "standard" => Ok(Units::Standard),
            _ => Err(anyhow::anyhow!(
                "Unknown unit system '{value}'. Supported: metric, imperial, standard."
            )),
        }
    }
}

/// Current conditions for one city, as reported by the weather API.
///
/// Values are in the API's units for `units`: wind speed is m/s for metric
/// and standard, mph for imperial. Visibility is in metres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub city: String,
    pub country: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity_pct: u8,
    pub wind_speed: f64,
    pub pressure_hpa: u32,
    pub visibility_m: Option<u32>,
    pub category: WeatherCategory,
    pub description: String,
    pub units: Units,
    pub observed_at: DateTime<Utc>,
}
