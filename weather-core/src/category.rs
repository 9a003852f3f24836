use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse weather classification reported by OpenWeather in `weather[0].main`.
///
/// Drives both the card icon/colours and dashboard filtering. Names the API
/// may add later are kept verbatim in [`WeatherCategory::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WeatherCategory {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Snow,
    Thunderstorm,
    Mist,
    Smoke,
    Haze,
    Dust,
    Fog,
    Sand,
    Ash,
    Squall,
    Tornado,
    Other(String),
}

/// CSS colours applied to a card through custom properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub hover: &'static str,
    pub shine: &'static str,
    pub border: &'static str,
}

impl WeatherCategory {
    /// Every category the API documents, in lookup-table order.
    pub const KNOWN: [WeatherCategory; 15] = [
        WeatherCategory::Clear,
        WeatherCategory::Clouds,
        WeatherCategory::Rain,
        WeatherCategory::Snow,
        WeatherCategory::Thunderstorm,
        WeatherCategory::Drizzle,
        WeatherCategory::Mist,
        WeatherCategory::Smoke,
        WeatherCategory::Haze,
        WeatherCategory::Dust,
        WeatherCategory::Fog,
        WeatherCategory::Sand,
        WeatherCategory::Ash,
        WeatherCategory::Squall,
        WeatherCategory::Tornado,
    ];

    /// Parse the API's capitalised category name. Matching is exact.
    pub fn from_api(name: &str) -> Self {
        match name {
            "Clear" => Self::Clear,
            "Clouds" => Self::Clouds,
            "Rain" => Self::Rain,
            "Drizzle" => Self::Drizzle,
            "Snow" => Self::Snow,
            "Thunderstorm" => Self::Thunderstorm,
            "Mist" => Self::Mist,
            "Smoke" => Self::Smoke,
            "Haze" => Self::Haze,
            "Dust" => Self::Dust,
            "Fog" => Self::Fog,
            "Sand" => Self::Sand,
            "Ash" => Self::Ash,
            "Squall" => Self::Squall,
            "Tornado" => Self::Tornado,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Clear => "Clear",
            Self::Clouds => "Clouds",
            Self::Rain => "Rain",
            Self::Drizzle => "Drizzle",
            Self::Snow => "Snow",
            Self::Thunderstorm => "Thunderstorm",
            Self::Mist => "Mist",
            Self::Smoke => "Smoke",
            Self::Haze => "Haze",
            Self::Dust => "Dust",
            Self::Fog => "Fog",
            Self::Sand => "Sand",
            Self::Ash => "Ash",
            Self::Squall => "Squall",
            Self::Tornado => "Tornado",
            Self::Other(name) => name,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Clear => "☀️",
            Self::Clouds => "🌥",
            Self::Rain => "🌧",
            Self::Snow => "❄️",
            Self::Thunderstorm => "🌩",
            Self::Drizzle => "🌦",
            Self::Mist | Self::Smoke | Self::Haze | Self::Dust | Self::Fog | Self::Sand => "🌫️",
            Self::Ash => "🌋",
            Self::Squall | Self::Tornado => "🌪️",
            Self::Other(_) => "🌈",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Self::Clear => Palette {
                hover: "rgba(255, 240, 150, 0.25)",
                shine: "rgba(255, 255, 200, 0.8)",
                border: "rgba(255, 200, 0, 0.8)",
            },
            Self::Clouds => Palette {
                hover: "rgba(120, 170, 255, 0.25)",
                shine: "rgba(200, 200, 255, 0.8)",
                border: "rgba(100, 149, 237, 0.8)",
            },
            Self::Rain | Self::Drizzle => Palette {
                hover: "rgba(100, 190, 240, 0.25)",
                shine: "rgba(173, 216, 230, 0.8)",
                border: "rgba(64, 164, 223, 0.8)",
            },
            Self::Thunderstorm => Palette {
                hover: "rgba(160, 0, 160, 0.25)",
                shine: "rgba(200, 100, 200, 0.8)",
                border: "rgba(128, 0, 128, 0.8)",
            },
            Self::Snow => Palette {
                hover: "rgba(200, 230, 255, 0.25)",
                shine: "rgba(255, 255, 255, 0.8)",
                border: "rgba(173, 216, 230, 0.8)",
            },
            _ => Palette {
                hover: "rgba(255, 255, 255, 0.15)",
                shine: "rgba(255, 255, 255, 0.5)",
                border: "rgba(255, 255, 255, 0.5)",
            },
        }
    }
}

impl fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for WeatherCategory {
    fn from(value: String) -> Self {
        Self::from_api(&value)
    }
}

impl From<WeatherCategory> for String {
    fn from(value: WeatherCategory) -> Self {
        value.as_str().to_string()
    }
}
