//! In-memory provider shared by the unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::{WeatherError, WeatherProvider, WeatherResponse, category::WeatherCategory, model::Units};

#[derive(Debug, Default)]
pub(crate) struct StubProvider {
    responses: HashMap<String, WeatherResponse>,
    calls: AtomicUsize,
}

impl StubProvider {
    pub(crate) fn with(mut self, city: &str, category: WeatherCategory) -> Self {
        self.responses.insert(city.to_lowercase(), sample_response(city, category));
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WeatherProvider for StubProvider {
    async fn current_weather(&self, city: &str) -> Result<WeatherResponse, WeatherError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .get(&city.to_lowercase())
            .cloned()
            .ok_or_else(|| WeatherError::CityNotFound { city: city.to_string(), status: 404 })
    }
}

pub(crate) fn sample_response(city: &str, category: WeatherCategory) -> WeatherResponse {
    WeatherResponse {
        city: city.to_string(),
        country: "XX".to_string(),
        temperature: 21.4,
        feels_like: 20.5,
        humidity_pct: 60,
        wind_speed: 5.0,
        pressure_hpa: 1013,
        visibility_m: Some(10_000),
        description: format!("some {}", category.as_str().to_lowercase()),
        category,
        units: Units::Metric,
        observed_at: Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap(),
    }
}
