//! Session cache for weather responses.
//!
//! Entries are keyed by the lowercased city name as typed, never expire and
//! are never evicted. Failed fetches are not cached, so a city that was not
//! found is asked for again next time.

use std::collections::HashMap;

use tracing::debug;

use crate::{WeatherError, WeatherProvider, WeatherResponse};

#[derive(Debug, Default)]
pub struct WeatherCache {
    entries: HashMap<String, WeatherResponse>,
}

impl WeatherCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(city: &str) -> String {
        city.to_lowercase()
    }

    pub fn get(&self, city: &str) -> Option<&WeatherResponse> {
        self.entries.get(&Self::key(city))
    }

    pub fn contains(&self, city: &str) -> bool {
        self.entries.contains_key(&Self::key(city))
    }

    /// Store `response` for `city`, replacing any previous entry.
    pub fn insert(&mut self, city: &str, response: WeatherResponse) {
        self.entries.insert(Self::key(city), response);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// A provider wrapped with a [`WeatherCache`].
#[derive(Debug)]
pub struct CachedClient<P> {
    provider: P,
    cache: WeatherCache,
}

impl<P: WeatherProvider> CachedClient<P> {
    pub fn new(provider: P) -> Self {
        Self { provider, cache: WeatherCache::new() }
    }

    /// Return the cached response for `city`, fetching it first on a miss.
    pub async fn fetch(&mut self, city: &str) -> Result<WeatherResponse, WeatherError> {
        if let Some(hit) = self.cache.get(city) {
            debug!(city, "weather cache hit");
            return Ok(hit.clone());
        }

        debug!(city, "weather cache miss");
        let response = self.provider.current_weather(city).await?;
        self.cache.insert(city, response.clone());
        Ok(response)
    }

    pub fn cache(&self) -> &WeatherCache {
        &self.cache
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}
